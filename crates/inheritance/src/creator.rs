//! crates/inheritance/src/creator.rs
//!
//! Prepares the ACL the creator supplied so it can be merged with the
//! inherited fragment.

use descriptor::{AceFlags, Acl};

use crate::InheritTarget;
use crate::debug_inherit::trace_creator_ace;
use crate::error::{InheritanceError, reserve};
use crate::expand::{expand, needs_expansion};

/// Processes a creator-supplied ACL for the new object.
///
/// Per entry, in order:
///
/// - entries tagged `INHERITED` are kept with the tag removed when
///   `is_protected`, and discarded otherwise (inheritance recomputes them);
/// - inherit-only entries that nothing can inherit are discarded;
/// - entries that are concrete, or already inherit-only, are kept unchanged;
/// - entries needing expansion are replaced by their resolved form when they
///   are not inheritable, or kept as inherit-only templates followed by their
///   resolved form when they are.
///
/// Returns `Ok(None)` only when `acl` is `None`. An ACL whose entries were
/// all discarded comes back empty, with the input revision.
pub fn process_creator(
    acl: Option<&Acl>,
    target: &InheritTarget<'_>,
    is_protected: bool,
) -> Result<Option<Acl>, InheritanceError> {
    let Some(acl) = acl else {
        return Ok(None);
    };

    let mut aces = Vec::new();
    reserve(&mut aces, acl.len().saturating_mul(2), "creator ACL")?;

    for (index, ace) in acl.iter().enumerate() {
        let mut ace = *ace;

        if ace.is_inherited() {
            if !is_protected {
                trace_creator_ace(index, "discarded inherited");
                continue;
            }
            ace.flags = ace.flags.without(AceFlags::INHERITED);
        }

        if ace.is_meaningless() {
            trace_creator_ace(index, "discarded meaningless");
            continue;
        }

        if !needs_expansion(&ace) || ace.is_inherit_only() {
            trace_creator_ace(index, "kept");
            aces.push(ace);
            continue;
        }

        let effective = expand(&ace, target.owner, target.group, target.mapper);
        if ace.is_inheritable() {
            ace.flags |= AceFlags::INHERIT_ONLY;
            aces.push(ace);
            aces.push(effective);
            trace_creator_ace(index, "split");
        } else {
            aces.push(effective);
            trace_creator_ace(index, "expanded");
        }
    }

    Ok(Some(Acl {
        revision: acl.revision,
        aces,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use descriptor::well_known::{BUILTIN_ADMINISTRATORS, CREATOR_GROUP, CREATOR_OWNER, WORLD};
    use descriptor::{AccessMask, Ace, GenericMapping, Sid, Trustee};

    fn bob() -> Sid {
        "S-1-5-21-1-2-3-1104".parse().unwrap()
    }

    fn users() -> Sid {
        "S-1-5-21-1-2-3-513".parse().unwrap()
    }

    fn target() -> InheritTarget<'static> {
        InheritTarget::new(true, bob(), users(), &GenericMapping::DIRECTORY)
    }

    fn run(aces: Vec<Ace>, is_protected: bool) -> Acl {
        process_creator(Some(&Acl::from_aces(aces)), &target(), is_protected)
            .expect("no allocation failure")
            .expect("input present")
    }

    #[test]
    fn absent_input_yields_none() {
        assert_eq!(process_creator(None, &target(), false), Ok(None));
        assert_eq!(process_creator(None, &target(), true), Ok(None));
    }

    #[test]
    fn empty_input_stays_present() {
        let acl = run(Vec::new(), false);
        assert!(acl.is_empty());
        assert_eq!(acl.revision, Acl::REVISION);
    }

    #[test]
    fn inherited_entries_dropped_when_unprotected() {
        let acl = run(
            vec![
                Ace::allow(WORLD, AccessMask::DS_LIST).with_flags(AceFlags::INHERITED),
                Ace::allow(BUILTIN_ADMINISTRATORS, AccessMask::DS_LIST),
            ],
            false,
        );
        assert_eq!(acl.aces, vec![Ace::allow(BUILTIN_ADMINISTRATORS, AccessMask::DS_LIST)]);
    }

    #[test]
    fn inherited_entries_become_explicit_when_protected() {
        let acl = run(
            vec![Ace::allow(WORLD, AccessMask::DS_LIST)
                .with_flags(AceFlags::INHERITED | AceFlags::CONTAINER_INHERIT)],
            true,
        );
        assert_eq!(
            acl.aces,
            vec![Ace::allow(WORLD, AccessMask::DS_LIST).with_flags(AceFlags::CONTAINER_INHERIT)]
        );
    }

    #[test]
    fn meaningless_entries_are_dropped() {
        let acl = run(
            vec![Ace::deny(WORLD, AccessMask::DELETE).with_flags(AceFlags::INHERIT_ONLY)],
            false,
        );
        assert!(acl.is_empty());
    }

    #[test]
    fn non_inheritable_generic_entry_expanded_in_place() {
        let acl = run(vec![Ace::allow(CREATOR_OWNER, AccessMask::GENERIC_READ)], false);
        assert_eq!(
            acl.aces,
            vec![Ace::allow(bob(), GenericMapping::DIRECTORY.read)]
        );
    }

    #[test]
    fn inheritable_generic_entry_is_split() {
        let template = Ace::allow(CREATOR_GROUP, AccessMask::GENERIC_WRITE)
            .with_flags(AceFlags::CONTAINER_INHERIT);
        let acl = run(vec![template], false);

        assert_eq!(acl.len(), 2);
        assert_eq!(
            acl.aces[0],
            template.with_flags(AceFlags::CONTAINER_INHERIT | AceFlags::INHERIT_ONLY)
        );
        assert_eq!(acl.aces[1].trustee, Trustee::Sid(users()));
        assert_eq!(acl.aces[1].mask, GenericMapping::DIRECTORY.write);
        assert_eq!(acl.aces[1].flags, AceFlags::EMPTY);
    }

    #[test]
    fn inherit_only_template_is_kept_without_companion() {
        let template = Ace::allow(CREATOR_OWNER, AccessMask::GENERIC_ALL)
            .with_flags(AceFlags::CONTAINER_INHERIT | AceFlags::INHERIT_ONLY);
        let acl = run(vec![template], false);
        assert_eq!(acl.aces, vec![template]);
    }

    #[test]
    fn concrete_entries_pass_through_in_order() {
        let aces = vec![
            Ace::deny(WORLD, AccessMask::DELETE),
            Ace::allow(BUILTIN_ADMINISTRATORS, AccessMask::STANDARD_RIGHTS_ALL)
                .with_flags(AceFlags::OBJECT_INHERIT),
            Ace::audit(WORLD, AccessMask::WRITE_DAC).with_flags(AceFlags::FAILED_ACCESS),
        ];
        assert_eq!(run(aces.clone(), false).aces, aces);
    }

    #[test]
    fn reprocessing_is_stable() {
        let aces = vec![
            Ace::allow(CREATOR_OWNER, AccessMask::GENERIC_ALL)
                .with_flags(AceFlags::CONTAINER_INHERIT),
            Ace::allow(WORLD, AccessMask::GENERIC_READ),
        ];
        let once = run(aces, false);
        let twice = process_creator(Some(&once), &target(), false)
            .unwrap()
            .unwrap();
        assert_eq!(once, twice);
    }
}
