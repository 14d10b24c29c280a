//! crates/logging/src/subscriber.rs
//! Installs a `tracing-subscriber` fmt subscriber for the engine targets.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{DEFAULT_DIRECTIVES, TracingInitError};

/// Installs a global fmt subscriber filtered by `directives`.
///
/// `directives` uses the `RUST_LOG` syntax, e.g.
/// `"sdinherit::propagate=trace,sdinherit=info"`.
pub fn init_tracing(directives: &str) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|error| TracingInitError::Directives(error.to_string()))?;
    install(filter)
}

/// Installs a global fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVES`] when the variable is unset or empty.
pub fn init_from_env() -> Result<(), TracingInitError> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(value)
            .map_err(|error| TracingInitError::Directives(error.to_string()))?,
        _ => EnvFilter::new(DEFAULT_DIRECTIVES),
    };
    install(filter)
}

fn install(filter: EnvFilter) -> Result<(), TracingInitError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish()
        .try_init()
        .map_err(|_| TracingInitError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the process-wide subscriber slot.
    #[test]
    fn install_once_then_refuse() {
        assert!(matches!(
            init_tracing("sdinherit=bogus"),
            Err(TracingInitError::Directives(_))
        ));

        init_tracing("sdinherit=trace").expect("first install succeeds");
        crate::trace_inherit!(installed = true, "subscriber ready");

        assert!(matches!(
            init_tracing("sdinherit=info"),
            Err(TracingInitError::AlreadyInstalled)
        ));
        assert!(matches!(
            init_from_env(),
            Err(TracingInitError::AlreadyInstalled) | Err(TracingInitError::Directives(_))
        ));
    }
}
