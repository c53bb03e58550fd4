// Infrastructure layer modules
pub mod config;
pub mod invocation_log;
pub mod logging;

// Re-exports
pub use config::{LogFormat, LoggingConfig};
pub use invocation_log::{InvocationLog, TracingInvocationLog};
pub use logging::init_logging;
