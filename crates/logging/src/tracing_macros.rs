//! crates/logging/src/tracing_macros.rs
//! Convenience macros for the engine's tracing targets.
//!
//! The calling crate must depend on `tracing`.

/// Emit a descriptor-level trace.
///
/// # Example
/// ```ignore
/// trace_inherit!(owner = %sid, "owner resolved");
/// ```
#[macro_export]
macro_rules! trace_inherit {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: $crate::INHERIT_TARGET, $($arg)*);
    };
}

/// Emit a parent-propagation trace.
///
/// # Example
/// ```ignore
/// trace_propagate!(index = 2, "ace skipped");
/// ```
#[macro_export]
macro_rules! trace_propagate {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: $crate::PROPAGATE_TARGET, $($arg)*);
    };
}

/// Emit a creator-ACL trace.
///
/// # Example
/// ```ignore
/// trace_creator!(index = 0, "inherited ace discarded");
/// ```
#[macro_export]
macro_rules! trace_creator {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: $crate::CREATOR_TARGET, $($arg)*);
    };
}
