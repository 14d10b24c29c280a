use thiserror::Error;

/// Error returned when the tracing subscriber cannot be installed.
#[derive(Debug, Error)]
pub enum TracingInitError {
    /// The filter directives did not parse.
    #[error("invalid tracing filter directives: {0}")]
    Directives(String),
    /// A global subscriber was already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}
