//! crates/inheritance/src/propagate.rs
//!
//! Derives the inherited fragment of a child's ACL from its parent's ACL.
//!
//! Each inheritable parent entry produces at most two child entries, in
//! parent order:
//!
//! 1. A copy tagged `INHERITED`. Its `INHERIT_ONLY` bit is recomputed for the
//!    child: set when the entry does not take effect on the child itself (a
//!    container takes container-inherit entries, a leaf takes object-inherit
//!    entries) or when the entry is object-specific and the child's class does
//!    not accept its object type.
//! 2. When the entry carries generic rights or a creator placeholder, its
//!    resolved form (see [`expand`]) tagged `INHERITED`. A container keeps the
//!    copy as an inherit-only template directly before the resolved entry; a
//!    leaf has nothing to pass on and receives only the resolved entry.
//!
//!    The resolved entry does not depend on rule 1's container/leaf match: an
//!    object-inherit-only template still grants its resolved rights on a
//!    container, while a concrete object-inherit-only entry reaches the same
//!    container only as an inherit-only copy. Only a rejected object type
//!    suppresses the resolved entry.
//!
//! Entries flagged `NO_PROPAGATE_INHERIT` reach the immediate child only: the
//! child receives a single entry with all inheritance flags cleared, resolved
//! if needed, and nothing when the entry would not take effect on it.

use descriptor::{Ace, AceFlags, Acl};

use crate::InheritTarget;
use crate::debug_inherit::{trace_ace_propagated, trace_ace_skipped};
use crate::error::{InheritanceError, reserve};
use crate::expand::{expand, needs_expansion};

/// Computes the entries a child inherits from `parent`.
///
/// Returns `Ok(None)` when no parent entry produced anything, so callers can
/// tell "nothing was inherited" apart from an empty ACL. The returned ACL
/// carries the parent's revision.
pub fn propagate(
    parent: &Acl,
    target: &InheritTarget<'_>,
) -> Result<Option<Acl>, InheritanceError> {
    let mut aces = Vec::new();
    reserve(&mut aces, parent.len().saturating_mul(2), "inherited ACL")?;

    for (index, ace) in parent.iter().enumerate() {
        if !ace.is_inheritable() {
            trace_ace_skipped(index, "not inheritable");
            continue;
        }

        let before = aces.len();
        match propagate_ace(ace, target, &mut aces) {
            Outcome::Skipped(reason) => trace_ace_skipped(index, reason),
            Outcome::Emitted { expanded } => {
                trace_ace_propagated(index, aces.len() - before, expanded);
            }
        }
    }

    if aces.is_empty() {
        return Ok(None);
    }

    Ok(Some(Acl {
        revision: parent.revision,
        aces,
    }))
}

enum Outcome {
    Skipped(&'static str),
    Emitted { expanded: bool },
}

/// Appends the child entries for one inheritable parent entry. Capacity for
/// two entries has already been reserved.
fn propagate_ace(ace: &Ace, target: &InheritTarget<'_>, out: &mut Vec<Ace>) -> Outcome {
    let applies = target.applies_directly(ace.flags);
    let accepted =
        !ace.ace_type.is_object() || target.accepts_object_type(ace.object_type.as_ref());
    let resolve = needs_expansion(ace);

    if ace.flags.contains(AceFlags::NO_PROPAGATE_INHERIT) {
        if !(applies && accepted) {
            return Outcome::Skipped("no-propagate entry does not apply to child");
        }
        let mut effective = if resolve {
            expand(ace, target.owner, target.group, target.mapper)
        } else {
            *ace
        };
        effective.flags = effective
            .flags
            .without(AceFlags::INHERITANCE)
            .with(AceFlags::INHERITED);
        out.push(effective);
        return Outcome::Emitted { expanded: resolve };
    }

    let mut inherited = *ace;
    inherited.flags = ace
        .flags
        .without(AceFlags::INHERIT_ONLY)
        .with(AceFlags::INHERITED);
    if !(applies && accepted) {
        inherited.flags |= AceFlags::INHERIT_ONLY;
    }

    if resolve && accepted {
        let mut effective = expand(ace, target.owner, target.group, target.mapper);
        effective.flags |= AceFlags::INHERITED;
        if target.is_container {
            inherited.flags |= AceFlags::INHERIT_ONLY;
            out.push(inherited);
        }
        out.push(effective);
        return Outcome::Emitted { expanded: true };
    }

    out.push(inherited);
    Outcome::Emitted { expanded: false }
}
