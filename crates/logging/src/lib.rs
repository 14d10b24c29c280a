#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` names the tracing targets used by the inheritance engine and,
//! behind the `tracing` feature, provides convenience macros for them plus a
//! helper that installs a formatted subscriber filtered by `RUST_LOG`-style
//! directives.
//!
//! # Targets
//!
//! | target | events |
//! |--------|--------|
//! | [`INHERIT_TARGET`] | owner/group resolution and the assembled descriptor |
//! | [`PROPAGATE_TARGET`] | ACEs copied, expanded or skipped from a parent ACL |
//! | [`CREATOR_TARGET`] | ACEs kept, stripped or expanded from a creator ACL |
//!
//! All targets share the [`TARGET_PREFIX`], so `sdinherit=debug` enables
//! every engine event at once.
//!
//! # Examples
//!
//! ```rust,ignore
//! logging::init_tracing("sdinherit::propagate=trace,sdinherit=info")?;
//! logging::trace_propagate!(aces = 3, "parent ACL walked");
//! ```

/// Common prefix of every engine target.
pub const TARGET_PREFIX: &str = "sdinherit";
/// Target for descriptor-level decisions.
pub const INHERIT_TARGET: &str = "sdinherit::inherit";
/// Target for parent ACL propagation.
pub const PROPAGATE_TARGET: &str = "sdinherit::propagate";
/// Target for creator ACL processing.
pub const CREATOR_TARGET: &str = "sdinherit::creator";

/// Filter used by [`init_from_env`] when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "sdinherit=info";

mod error;

pub use error::TracingInitError;

#[cfg(feature = "tracing")]
mod subscriber;
#[cfg(feature = "tracing")]
mod tracing_macros;

#[cfg(feature = "tracing")]
pub use subscriber::{init_from_env, init_tracing};
