//! Per-test setup and teardown.
//!
//! A test wraps its body in [`run_test`], which sets up logging, the
//! fixture's hooks and the scratch directory, then tears them down again in
//! reverse order.

pub mod fixtures;
pub mod inject;
pub mod logging;
pub mod temp_dir;

pub use fixtures::{array, as_list, empty_list, object_array, println};
pub use inject::{inject, try_inject, Injectable, InjectionError};
pub use logging::init_test_logging;
pub use temp_dir::TempDirectory;

use crate::config::SupportConfig;
use anyhow::{Context, Result};
use std::any::type_name;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, info_span, Span};

/// Hooks a fixture may provide around each test body.
pub trait TestCase {
    fn set_up(&mut self) -> Result<()> {
        Ok(())
    }

    /// Build the fixture's test doubles. Runs after [`TestCase::set_up`].
    fn init_mocks(&mut self) {}

    fn tear_down(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Resources owned by one running test.
///
/// Dropping the scope removes the scratch directory, including when the test
/// body panics.
pub struct TestScope {
    config: SupportConfig,
    temp_dir: TempDirectory,
    span: Span,
}

impl TestScope {
    pub fn new(config: &SupportConfig) -> Result<Self> {
        Self::named(config, "anonymous")
    }

    pub fn named(config: &SupportConfig, case: &str) -> Result<Self> {
        init_test_logging(&config.log_filter);

        let temp_dir = TempDirectory::create(&config.temp_dir).with_context(|| {
            format!(
                "Failed to create temporary directory: {}",
                config.temp_dir.display()
            )
        })?;

        Ok(Self {
            config: config.clone(),
            temp_dir,
            span: info_span!("test_case", case),
        })
    }

    pub fn config(&self) -> &SupportConfig {
        &self.config
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path for a test output file inside the scratch directory.
    pub fn output_file(&self, file_name: &str) -> PathBuf {
        self.temp_dir.file(file_name)
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// Run `body` against `case` with the full lifecycle around it.
///
/// Order: `set_up`, `init_mocks`, scratch directory creation, body,
/// `tear_down`, scratch directory removal. A panicking body still gets
/// `tear_down` and directory removal before the panic is resumed.
pub fn run_test<T, F, R>(config: &SupportConfig, case: &mut T, body: F) -> Result<R>
where
    T: TestCase,
    F: FnOnce(&mut T, &TestScope) -> R,
{
    let name = type_name::<T>();

    case.set_up()
        .with_context(|| format!("set_up failed for {}", name))?;
    case.init_mocks();

    let scope = TestScope::named(config, name)?;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        scope.span.in_scope(|| {
            debug!("Running test body");
            body(&mut *case, &scope)
        })
    }));

    let torn_down = case
        .tear_down()
        .with_context(|| format!("tear_down failed for {}", name));
    drop(scope);

    let result = match outcome {
        Ok(result) => result,
        Err(payload) => panic::resume_unwind(payload),
    };
    torn_down?;

    Ok(result)
}
