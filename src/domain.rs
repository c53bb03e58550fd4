// Domain layer modules
pub mod event;
mod json_field;
pub mod probe;

// Re-exports
pub use event::{EnvelopeError, Event, EventValidationError};
pub use probe::{Probe, PONG};
