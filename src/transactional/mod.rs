//! Transactional tests: every body runs inside a rolled-back database
//! transaction, against a context found from the test type's own name.

pub mod context;
pub mod errors;
pub mod locations;
pub mod resources;

pub use context::{ContextConfig, DataSourceConfig, TestTransaction, TransactionalContext};
pub use errors::ContextError;
pub use locations::{config_location_for_name, config_locations};
pub use resources::ResourceLoader;

use crate::config::SupportConfig;
use crate::lifecycle::{run_test, TestCase, TestScope};
use anyhow::{Context, Result};

/// Base for database-backed tests.
pub trait TransactionalTestCase: TestCase {
    /// Where the context configuration lives. Defaults to the resource
    /// derived from this type's path.
    fn config_locations(&self) -> Vec<String> {
        config_locations::<Self>()
    }
}

/// Run `body` with the standard lifecycle plus a fresh context and a
/// transaction that is rolled back unless the body marks it complete.
pub fn run_transactional_test<T, F, R>(config: &SupportConfig, case: &mut T, body: F) -> Result<R>
where
    T: TransactionalTestCase,
    F: FnOnce(&mut T, &TestScope, &mut TestTransaction<'_>) -> errors::Result<R>,
{
    run_test(config, case, |case, scope| {
        let locations = case.config_locations();
        let loader = ResourceLoader::new(&scope.config().resource_root);
        let context = TransactionalContext::load(&loader, &locations)?;
        context.in_transaction(|tx| body(case, scope, tx))
    })?
    .context("Transactional test failed")
}
