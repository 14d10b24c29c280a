//! Tracing for inheritance decisions.
//!
//! Every function here emits a structured event on one of the targets named
//! by the `logging` crate when the `tracing` feature is enabled, and compiles
//! to an empty inline function otherwise.

use descriptor::{DescriptorFlags, Sid};

/// Where the owner or group of a new descriptor came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Source {
    Creator,
    Parent,
    Default,
    Token,
}

impl Source {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Creator => "creator",
            Self::Parent => "parent",
            Self::Default => "default",
            Self::Token => "token",
        }
    }
}

/// Traces owner resolution.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_owner_resolved(owner: &Sid, source: Source) {
    logging::trace_inherit!(owner = %owner, source = source.as_str(), "owner_resolved");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_owner_resolved(_owner: &Sid, _source: Source) {}

/// Traces group resolution.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_group_resolved(group: &Sid, source: Source) {
    logging::trace_inherit!(group = %group, source = source.as_str(), "group_resolved");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_group_resolved(_group: &Sid, _source: Source) {}

/// Traces one parent ACE producing `emitted` entries on the child.
///
/// `expanded` is set when one of the emitted entries is the resolved,
/// directly effective copy.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_ace_propagated(index: usize, emitted: usize, expanded: bool) {
    logging::trace_propagate!(index, emitted, expanded, "ace_propagated");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_ace_propagated(_index: usize, _emitted: usize, _expanded: bool) {}

/// Traces a parent ACE that produced nothing on the child.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_ace_skipped(index: usize, reason: &'static str) {
    logging::trace_propagate!(index, reason, "ace_skipped");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_ace_skipped(_index: usize, _reason: &'static str) {}

/// Traces what happened to one creator-supplied ACE.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_creator_ace(index: usize, action: &'static str) {
    logging::trace_creator!(index, action, "creator_ace");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_creator_ace(_index: usize, _action: &'static str) {}

/// Traces the finished descriptor.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_descriptor_assembled(
    control: DescriptorFlags,
    dacl_len: Option<usize>,
    sacl_len: Option<usize>,
) {
    logging::trace_inherit!(
        control = control.as_raw(),
        dacl_len = ?dacl_len,
        sacl_len = ?sacl_len,
        "descriptor_assembled"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_descriptor_assembled(
    _control: DescriptorFlags,
    _dacl_len: Option<usize>,
    _sacl_len: Option<usize>,
) {
}
