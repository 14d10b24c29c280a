use super::*;
use descriptor::well_known::{
    AUTHENTICATED_USERS, BUILTIN_ADMINISTRATORS, CREATOR_GROUP, CREATOR_OWNER, LOCAL_SYSTEM, WORLD,
};
use descriptor::{
    AccessMask, Ace, AceFlags, AceType, Acl, DescriptorFlags, GenericMapping, Guid,
    SecurityDescriptor, SecurityToken, Sid, Trustee,
};
use proptest::prelude::*;

const CLASSES: [Guid; 3] = [
    Guid::from_u128(0xbf967aba_0de6_11d0_a285_00aa003049e2),
    Guid::from_u128(0xbf967a86_0de6_11d0_a285_00aa003049e2),
    Guid::from_u128(0xbf967a9c_0de6_11d0_a285_00aa003049e2),
];

const KNOWN_ACE_FLAGS: u8 = 0xDF;

fn arb_concrete_sid() -> impl Strategy<Value = Sid> {
    prop_oneof![
        Just(WORLD),
        Just(LOCAL_SYSTEM),
        Just(BUILTIN_ADMINISTRATORS),
        Just(AUTHENTICATED_USERS),
        (1000u32..1010).prop_map(|rid| Sid::new(5, &[21, 1, 2, 3, rid]).expect("valid")),
    ]
}

/// Owner and group candidates, including placeholder SIDs a caller might
/// pass by mistake.
fn arb_identity() -> impl Strategy<Value = Sid> {
    prop_oneof![
        4 => arb_concrete_sid(),
        1 => Just(CREATOR_OWNER),
        1 => Just(CREATOR_GROUP),
    ]
}

fn arb_trustee() -> impl Strategy<Value = Trustee> {
    prop_oneof![
        6 => arb_concrete_sid().prop_map(Trustee::Sid),
        2 => Just(Trustee::CreatorOwner),
        2 => Just(Trustee::CreatorGroup),
        1 => Just(Trustee::Sid(CREATOR_OWNER)),
        1 => Just(Trustee::Sid(CREATOR_GROUP)),
    ]
}

fn arb_ace_type() -> impl Strategy<Value = AceType> {
    prop_oneof![
        Just(AceType::Allow),
        Just(AceType::Deny),
        Just(AceType::Audit),
        Just(AceType::AllowObject),
        Just(AceType::DenyObject),
    ]
}

fn arb_ace() -> impl Strategy<Value = Ace> {
    (
        arb_ace_type(),
        arb_trustee(),
        any::<u32>(),
        any::<u8>(),
        proptest::option::of(0..CLASSES.len()),
    )
        .prop_map(|(ace_type, trustee, mask, flags, class)| Ace {
            ace_type,
            trustee,
            mask: AccessMask::from_raw(mask),
            flags: AceFlags::from_raw(flags & KNOWN_ACE_FLAGS),
            object_type: class.map(|index| CLASSES[index]),
            inherited_object_type: None,
        })
}

/// ACEs with a concrete trustee and no generic rights.
fn arb_concrete_ace() -> impl Strategy<Value = Ace> {
    (
        arb_ace_type(),
        arb_concrete_sid(),
        any::<u32>(),
        any::<u8>(),
        proptest::option::of(0..CLASSES.len()),
    )
        .prop_map(|(ace_type, sid, mask, flags, class)| Ace {
            ace_type,
            trustee: Trustee::Sid(sid),
            mask: AccessMask::from_raw(mask).difference(AccessMask::GENERIC_MASK),
            flags: AceFlags::from_raw(flags & KNOWN_ACE_FLAGS),
            object_type: class.map(|index| CLASSES[index]),
            inherited_object_type: None,
        })
}

fn arb_acl() -> impl Strategy<Value = Acl> {
    proptest::collection::vec(arb_ace(), 0..8).prop_map(Acl::from_aces)
}

fn arb_nonempty_acl() -> impl Strategy<Value = Acl> {
    proptest::collection::vec(arb_ace(), 1..8).prop_map(Acl::from_aces)
}

fn arb_descriptor() -> impl Strategy<Value = SecurityDescriptor> {
    (
        proptest::option::of(arb_identity()),
        proptest::option::of(arb_identity()),
        proptest::option::of(arb_acl()),
        proptest::option::of(arb_acl()),
        any::<u16>(),
    )
        .prop_map(|(owner, group, dacl, sacl, control)| SecurityDescriptor {
            owner,
            group,
            dacl,
            sacl,
            control: DescriptorFlags::from_raw(control),
        })
}

fn arb_allowlist() -> impl Strategy<Value = Option<ObjectTypes>> {
    proptest::option::of(
        proptest::collection::vec(any::<bool>(), CLASSES.len()).prop_map(|keep| {
            CLASSES
                .iter()
                .zip(keep)
                .filter_map(|(guid, keep)| keep.then_some(*guid))
                .collect()
        }),
    )
}

fn token() -> SecurityToken {
    SecurityToken::new(Sid::new(5, &[21, 1, 2, 3, 1104]).expect("valid"))
        .with_primary_group(Sid::new(5, &[21, 1, 2, 3, 513]).expect("valid"))
}

fn target(is_container: bool) -> InheritTarget<'static> {
    InheritTarget::new(is_container, LOCAL_SYSTEM, AUTHENTICATED_USERS, &GenericMapping::DIRECTORY)
}

fn effective_entries(acl: Option<&Acl>) -> impl Iterator<Item = &Ace> {
    acl.into_iter().flat_map(Acl::iter).filter(|ace| !ace.is_inherit_only())
}

proptest! {
    #[test]
    fn owner_and_group_are_always_concrete(
        parent in proptest::option::of(arb_descriptor()),
        creator in proptest::option::of(arb_descriptor()),
        is_container in any::<bool>(),
        flags in any::<u8>(),
    ) {
        let token = token();
        let sd = InheritanceRequest::new(&token, &GenericMapping::DIRECTORY)
            .with_parent(parent.as_ref())
            .with_creator(creator.as_ref())
            .with_container(is_container)
            .with_flags(InheritFlags::from_raw(flags))
            .assemble()
            .expect("no allocation failure");

        let owner = sd.owner.expect("owner present");
        let group = sd.group.expect("group present");
        for sid in [owner, group] {
            prop_assert_ne!(sid, CREATOR_OWNER);
            prop_assert_ne!(sid, CREATOR_GROUP);
        }
        prop_assert!(sd.control.contains(DescriptorFlags::SELF_RELATIVE));
    }

    #[test]
    fn effective_entries_never_name_placeholders(
        parent in proptest::option::of(arb_descriptor()),
        creator in proptest::option::of(arb_descriptor()),
        is_container in any::<bool>(),
        allowlist in arb_allowlist(),
    ) {
        let token = token();
        let sd = InheritanceRequest::new(&token, &GenericMapping::DIRECTORY)
            .with_parent(parent.as_ref())
            .with_creator(creator.as_ref())
            .with_container(is_container)
            .with_object_types(allowlist.as_ref())
            .with_flags(InheritFlags::AUTO_INHERIT)
            .assemble()
            .expect("no allocation failure");

        for ace in effective_entries(sd.dacl.as_ref()).chain(effective_entries(sd.sacl.as_ref())) {
            prop_assert!(!ace.trustee.is_placeholder(), "placeholder in {:?}", ace);
            prop_assert!(!ace.mask.has_generic(), "generic rights in {:?}", ace);
        }
    }

    #[test]
    fn presence_bits_match_computed_acls(
        parent in proptest::option::of(arb_descriptor()),
        creator in proptest::option::of(arb_descriptor()),
        flags in any::<u8>(),
    ) {
        let token = token();
        let sd = InheritanceRequest::new(&token, &GenericMapping::DIRECTORY)
            .with_parent(parent.as_ref())
            .with_creator(creator.as_ref())
            .with_flags(InheritFlags::from_raw(flags))
            .assemble()
            .expect("no allocation failure");

        prop_assert_eq!(sd.control.contains(DescriptorFlags::DACL_PRESENT), sd.dacl.is_some());
        prop_assert_eq!(sd.control.contains(DescriptorFlags::SACL_PRESENT), sd.sacl.is_some());
    }

    #[test]
    fn non_inheritable_parent_contributes_nothing(
        aces in proptest::collection::vec(arb_ace(), 0..8),
        is_container in any::<bool>(),
    ) {
        let aces: Vec<Ace> = aces
            .into_iter()
            .map(|ace| Ace { flags: ace.flags.without(AceFlags::INHERITABLE), ..ace })
            .collect();
        let parent = SecurityDescriptor::new()
            .with_dacl(Acl::from_aces(aces.clone()))
            .with_sacl(Acl::from_aces(aces));
        let token = token();
        let sd = InheritanceRequest::new(&token, &GenericMapping::DIRECTORY)
            .with_parent(Some(&parent))
            .with_container(is_container)
            .with_flags(InheritFlags::AUTO_INHERIT)
            .assemble()
            .expect("no allocation failure");

        prop_assert_eq!(sd.dacl, None);
        prop_assert_eq!(sd.sacl, None);
        prop_assert!(!sd.control.contains(DescriptorFlags::DACL_AUTO_INHERITED));
        prop_assert!(!sd.control.contains(DescriptorFlags::SACL_AUTO_INHERITED));
    }

    #[test]
    fn protected_dacl_pulls_nothing_from_parent(
        parent in arb_descriptor(),
        dacl in arb_acl(),
        is_container in any::<bool>(),
    ) {
        let creator = SecurityDescriptor::new()
            .with_dacl(dacl)
            .with_control(DescriptorFlags::DACL_PROTECTED);
        let token = token();
        let sd = InheritanceRequest::new(&token, &GenericMapping::DIRECTORY)
            .with_parent(Some(&parent))
            .with_creator(Some(&creator))
            .with_container(is_container)
            .with_flags(InheritFlags::AUTO_INHERIT)
            .assemble()
            .expect("no allocation failure");

        let dacl = sd.dacl.expect("creator DACL present");
        prop_assert!(dacl.iter().all(|ace| !ace.is_inherited()));
        prop_assert!(sd.control.contains(DescriptorFlags::DACL_PROTECTED));
        prop_assert!(!sd.control.contains(DescriptorFlags::DACL_AUTO_INHERITED));
    }

    #[test]
    fn propagation_emits_at_most_two_entries_per_parent_entry(
        acl in arb_acl(),
        is_container in any::<bool>(),
        allowlist in arb_allowlist(),
    ) {
        let target = target(is_container).with_object_types(allowlist.as_ref());
        let inherited = propagate(&acl, &target).expect("no allocation failure");
        let emitted = inherited.as_ref().map_or(0, Acl::len);
        prop_assert!(emitted <= 2 * acl.len());
        if let Some(inherited) = inherited {
            prop_assert!(!inherited.is_empty());
            prop_assert_eq!(inherited.revision, acl.revision);
            prop_assert!(inherited.iter().all(Ace::is_inherited));
        }
    }

    #[test]
    fn expansion_is_idempotent(ace in arb_ace()) {
        let mapping = GenericMapping::DIRECTORY;
        let once = expand(&ace, LOCAL_SYSTEM, AUTHENTICATED_USERS, &mapping);
        prop_assert!(!needs_expansion(&once));
        prop_assert_eq!(expand(&once, LOCAL_SYSTEM, AUTHENTICATED_USERS, &mapping), once);
    }

    #[test]
    fn expanding_concrete_entries_only_normalises_flags(ace in arb_concrete_ace()) {
        prop_assert!(!needs_expansion(&ace));
        let expanded = expand(&ace, LOCAL_SYSTEM, AUTHENTICATED_USERS, &GenericMapping::FILE);
        prop_assert_eq!(expanded, Ace { flags: ace.flags.without(AceFlags::INHERITANCE), ..ace });
    }

    #[test]
    fn creator_processing_is_stable(acl in arb_acl(), is_protected in any::<bool>()) {
        let target = target(true);
        let once = process_creator(Some(&acl), &target, is_protected)
            .expect("no allocation failure")
            .expect("input present");
        let twice = process_creator(Some(&once), &target, is_protected)
            .expect("no allocation failure")
            .expect("input present");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn concatenation_keeps_user_entries_first(
        user in arb_nonempty_acl(),
        inherited in arb_nonempty_acl(),
    ) {
        let merged = concat(Some(user.clone()), Some(inherited.clone()))
            .expect("no allocation failure")
            .expect("fragments present");
        let expected: Vec<Ace> = user.aces.iter().chain(&inherited.aces).copied().collect();
        prop_assert_eq!(merged.aces, expected);
        prop_assert_eq!(merged.revision, user.revision);
    }
}

#[test]
fn bare_request_uses_token_identities() {
    let token = token();
    let sd = assemble(&InheritanceRequest::new(&token, &GenericMapping::DIRECTORY))
        .expect("no allocation failure");
    assert_eq!(sd.owner, Some(token.primary_user));
    assert_eq!(sd.group, token.primary_group);

    let anonymous = SecurityToken::new(descriptor::well_known::ANONYMOUS);
    let sd = assemble(&InheritanceRequest::new(&anonymous, &GenericMapping::DIRECTORY))
        .expect("no allocation failure");
    assert_eq!(sd.group, Some(descriptor::well_known::ANONYMOUS));
}
