pub mod assertions;
pub mod config;
pub mod lifecycle;
pub mod transactional;

// Re-export key types for easy testing
pub use assertions::{fail, fail_todo, AssertionFailure};
pub use config::SupportConfig;
pub use lifecycle::{run_test, TestCase, TestScope};
pub use transactional::{run_transactional_test, TransactionalTestCase};
