//! Error type for the event-handling path.

use thiserror::Error;

/// Failures while unpacking a function event. The HTTP path never produces
/// these; malformed bodies there are rejected by the framework.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("field {0} has the wrong type")]
    WrongType(&'static str),

    #[error("invalid request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("failed to read event: {0}")]
    Read(#[from] std::io::Error),
}
