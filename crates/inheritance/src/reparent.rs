//! Recomputing an existing object's descriptor after it moves.
//!
//! The object's current descriptor takes the creator's place: its owner,
//! group and explicit entries are kept, inherited entries are dropped and
//! recomputed from the new parent, and protected ACLs keep the inherited
//! entries they already carry, now as explicit entries.

use descriptor::{MapGenericRights, SecurityDescriptor, SecurityToken};

use crate::{InheritFlags, InheritanceError, InheritanceRequest};

impl<'a> InheritanceRequest<'a> {
    /// Starts a request that re-derives `current` under `new_parent`.
    ///
    /// Both auto-inherit options are set. Further setters can adjust the
    /// request, for example to restrict object types.
    #[must_use]
    pub fn for_move(
        current: &'a SecurityDescriptor,
        new_parent: Option<&'a SecurityDescriptor>,
        token: &'a SecurityToken,
        mapper: &'a dyn MapGenericRights,
    ) -> Self {
        Self::new(token, mapper)
            .with_creator(Some(current))
            .with_parent(new_parent)
            .with_flags(InheritFlags::AUTO_INHERIT)
    }
}

/// Re-derives the descriptor of an object moved under `new_parent`.
pub fn reinherit(
    current: &SecurityDescriptor,
    new_parent: Option<&SecurityDescriptor>,
    is_container: bool,
    token: &SecurityToken,
    mapper: &dyn MapGenericRights,
) -> Result<SecurityDescriptor, InheritanceError> {
    InheritanceRequest::for_move(current, new_parent, token, mapper)
        .with_container(is_container)
        .assemble()
}

#[cfg(test)]
mod tests {
    use super::*;
    use descriptor::well_known::{BUILTIN_ADMINISTRATORS, CREATOR_OWNER, LOCAL_SYSTEM, WORLD};
    use descriptor::{AccessMask, Ace, AceFlags, Acl, DescriptorFlags, GenericMapping, Sid, Trustee};

    fn carol() -> Sid {
        "S-1-5-21-1-2-3-1200".parse().unwrap()
    }

    #[test]
    fn for_move_uses_current_as_creator() {
        let token = SecurityToken::new(LOCAL_SYSTEM);
        let current = SecurityDescriptor::new().with_owner(carol());
        let parent = SecurityDescriptor::new();
        let request = InheritanceRequest::for_move(&current, Some(&parent), &token, &GenericMapping::DIRECTORY);

        assert_eq!(request.creator(), Some(&current));
        assert_eq!(request.parent(), Some(&parent));
        assert_eq!(request.flags(), InheritFlags::AUTO_INHERIT);
    }

    #[test]
    fn inherited_entries_are_replaced_by_new_parent() {
        let token = SecurityToken::new(LOCAL_SYSTEM);
        let old_parent = SecurityDescriptor::new().with_dacl(Acl::from_aces(vec![
            Ace::allow(WORLD, AccessMask::DS_LIST).with_flags(AceFlags::CONTAINER_INHERIT),
        ]));
        let new_parent = SecurityDescriptor::new().with_dacl(Acl::from_aces(vec![
            Ace::allow(BUILTIN_ADMINISTRATORS, AccessMask::STANDARD_RIGHTS_ALL)
                .with_flags(AceFlags::CONTAINER_INHERIT),
        ]));
        let creator = SecurityDescriptor::new()
            .with_owner(carol())
            .with_dacl(Acl::from_aces(vec![Ace::deny(WORLD, AccessMask::DELETE)]));

        let current = InheritanceRequest::new(&token, &GenericMapping::DIRECTORY)
            .with_parent(Some(&old_parent))
            .with_creator(Some(&creator))
            .with_container(true)
            .with_flags(InheritFlags::AUTO_INHERIT)
            .assemble()
            .unwrap();

        let moved = reinherit(&current, Some(&new_parent), true, &token, &GenericMapping::DIRECTORY)
            .unwrap();
        let dacl = moved.dacl.unwrap();

        assert_eq!(moved.owner, Some(carol()));
        assert_eq!(dacl.aces[0], Ace::deny(WORLD, AccessMask::DELETE));
        assert_eq!(dacl.len(), 2);
        assert_eq!(dacl.aces[1].trustee, Trustee::Sid(BUILTIN_ADMINISTRATORS));
        assert!(dacl.aces[1].is_inherited());
    }

    #[test]
    fn moving_to_no_parent_drops_inherited_entries() {
        let token = SecurityToken::new(LOCAL_SYSTEM);
        let current = SecurityDescriptor::new()
            .with_owner(carol())
            .with_dacl(Acl::from_aces(vec![
                Ace::allow(WORLD, AccessMask::DS_LIST).with_flags(AceFlags::INHERITED),
            ]))
            .with_control(DescriptorFlags::DACL_AUTO_INHERITED);

        let moved = reinherit(&current, None, false, &token, &GenericMapping::DIRECTORY).unwrap();
        assert_eq!(moved.dacl, Some(Acl::new()));
        assert!(!moved.control.contains(DescriptorFlags::DACL_AUTO_INHERITED));
    }

    #[test]
    fn explicit_templates_survive_a_move() {
        let token = SecurityToken::new(LOCAL_SYSTEM);
        let template = Ace::allow(CREATOR_OWNER, AccessMask::GENERIC_ALL)
            .with_flags(AceFlags::CONTAINER_INHERIT | AceFlags::INHERIT_ONLY);
        let current = SecurityDescriptor::new()
            .with_owner(carol())
            .with_dacl(Acl::from_aces(vec![template]));

        let moved = reinherit(&current, None, true, &token, &GenericMapping::DIRECTORY).unwrap();
        assert_eq!(moved.dacl.unwrap().aces, vec![template]);
    }
}
