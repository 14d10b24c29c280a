//! crates/inheritance/src/assemble.rs
//!
//! Builds the complete descriptor of a new object from an
//! [`InheritanceRequest`].
//!
//! # Owner and group
//!
//! The owner is the first of: the creator's owner, the parent's owner when
//! [`InheritFlags::OWNER_FROM_PARENT`] is set, the request's default owner
//! (which also sets `OWNER_DEFAULTED`), and the token's primary user. The
//! group follows the same chain with the `GROUP_*` counterparts, ending with
//! the token's primary group and then its primary user. A creator
//! placeholder SID (`S-1-3-0`, `S-1-3-1`) offered at any step is skipped, so
//! a placeholder never becomes the owner or group of a descriptor.
//!
//! # ACLs
//!
//! The DACL and SACL are computed independently. The inherited fragment comes
//! from the parent's ACL when a parent exists, the matching auto-inherit
//! option is set, and the creator does not protect that ACL. The explicit
//! fragment comes from the creator's ACL unless
//! [`InheritFlags::DEFAULT_DESCRIPTOR`] is set. The two are joined explicit
//! first.
//!
//! # Control flags
//!
//! The creator's control bits are carried over, except the presence and
//! auto-inherited bits, which always describe the computed ACLs:
//! `*_AUTO_INHERITED` is set when anything was inherited into that ACL.
//! `SELF_RELATIVE` is always set.

use descriptor::{Acl, DescriptorFlags, SecurityDescriptor, Sid};

use crate::concat::concat;
use crate::creator::process_creator;
use crate::debug_inherit::{
    Source, trace_descriptor_assembled, trace_group_resolved, trace_owner_resolved,
};
use crate::propagate::propagate;
use crate::{InheritFlags, InheritTarget, InheritanceError, InheritanceRequest};

/// Control bits that describe the computed ACLs and are never carried over.
const RECOMPUTED: DescriptorFlags = DescriptorFlags::PRESENCE
    .with(DescriptorFlags::DACL_AUTO_INHERITED)
    .with(DescriptorFlags::SACL_AUTO_INHERITED);

/// Derives the descriptor of a new object.
///
/// The result always has an owner and a group. The only error is allocation
/// failure, in which case nothing is returned.
pub fn assemble(request: &InheritanceRequest<'_>) -> Result<SecurityDescriptor, InheritanceError> {
    let (owner, owner_source) = resolve_owner(request);
    trace_owner_resolved(&owner, owner_source);
    let (group, group_source) = resolve_group(request);
    trace_group_resolved(&group, group_source);

    let mut control = request
        .creator()
        .map_or(DescriptorFlags::EMPTY, |sd| sd.control)
        .without(RECOMPUTED)
        .with(DescriptorFlags::SELF_RELATIVE);
    if owner_source == Source::Default {
        control |= DescriptorFlags::OWNER_DEFAULTED;
    }
    if group_source == Source::Default {
        control |= DescriptorFlags::GROUP_DEFAULTED;
    }

    let target = InheritTarget::new(request.is_container(), owner, group, request.mapper())
        .with_object_types(request.object_types());

    let dacl = build_acl(AclKind::Dacl, request, &target, &mut control)?;
    let sacl = build_acl(AclKind::Sacl, request, &target, &mut control)?;

    trace_descriptor_assembled(control, dacl.as_ref().map(Acl::len), sacl.as_ref().map(Acl::len));

    Ok(SecurityDescriptor {
        owner: Some(owner),
        group: Some(group),
        dacl,
        sacl,
        control,
    })
}

/// Drops creator placeholder SIDs, which cannot own anything.
fn concrete(sid: Option<Sid>) -> Option<Sid> {
    sid.filter(|sid| !sid.is_creator_placeholder())
}

fn resolve_owner(request: &InheritanceRequest<'_>) -> (Sid, Source) {
    if let Some(owner) = concrete(request.creator().and_then(|sd| sd.owner)) {
        return (owner, Source::Creator);
    }
    if request.flags().contains(InheritFlags::OWNER_FROM_PARENT)
        && let Some(owner) = concrete(request.parent().and_then(|sd| sd.owner))
    {
        return (owner, Source::Parent);
    }
    if let Some(owner) = concrete(request.default_owner()) {
        return (owner, Source::Default);
    }
    (request.token().primary_user, Source::Token)
}

fn resolve_group(request: &InheritanceRequest<'_>) -> (Sid, Source) {
    if let Some(group) = concrete(request.creator().and_then(|sd| sd.group)) {
        return (group, Source::Creator);
    }
    if request.flags().contains(InheritFlags::GROUP_FROM_PARENT)
        && let Some(group) = concrete(request.parent().and_then(|sd| sd.group))
    {
        return (group, Source::Parent);
    }
    if let Some(group) = concrete(request.default_group()) {
        return (group, Source::Default);
    }
    let token = request.token();
    let group = concrete(token.primary_group).unwrap_or(token.primary_user);
    (group, Source::Token)
}

/// The two ACL slots of a descriptor, which differ only in which flags and
/// field they use.
#[derive(Clone, Copy, Debug)]
enum AclKind {
    Dacl,
    Sacl,
}

impl AclKind {
    const fn auto_inherit(self) -> InheritFlags {
        match self {
            Self::Dacl => InheritFlags::DACL_AUTO_INHERIT,
            Self::Sacl => InheritFlags::SACL_AUTO_INHERIT,
        }
    }

    const fn present(self) -> DescriptorFlags {
        match self {
            Self::Dacl => DescriptorFlags::DACL_PRESENT,
            Self::Sacl => DescriptorFlags::SACL_PRESENT,
        }
    }

    const fn auto_inherited(self) -> DescriptorFlags {
        match self {
            Self::Dacl => DescriptorFlags::DACL_AUTO_INHERITED,
            Self::Sacl => DescriptorFlags::SACL_AUTO_INHERITED,
        }
    }

    const fn is_protected(self, sd: &SecurityDescriptor) -> bool {
        match self {
            Self::Dacl => sd.is_dacl_protected(),
            Self::Sacl => sd.is_sacl_protected(),
        }
    }

    const fn acl(self, sd: &SecurityDescriptor) -> Option<&Acl> {
        match self {
            Self::Dacl => sd.dacl.as_ref(),
            Self::Sacl => sd.sacl.as_ref(),
        }
    }
}

fn build_acl(
    kind: AclKind,
    request: &InheritanceRequest<'_>,
    target: &InheritTarget<'_>,
    control: &mut DescriptorFlags,
) -> Result<Option<Acl>, InheritanceError> {
    let flags = request.flags();
    let creator = request.creator();
    let is_protected = creator.is_some_and(|sd| kind.is_protected(sd));

    let inherited = match request.parent().and_then(|sd| kind.acl(sd)) {
        Some(parent_acl) if flags.contains(kind.auto_inherit()) && !is_protected => {
            propagate(parent_acl, target)?
        }
        _ => None,
    };

    let user = match creator {
        Some(sd) if !flags.contains(InheritFlags::DEFAULT_DESCRIPTOR) => {
            process_creator(kind.acl(sd), target, is_protected)?
        }
        _ => None,
    };

    if inherited.is_some() {
        *control |= kind.auto_inherited();
    }
    let acl = concat(user, inherited)?;
    if acl.is_some() {
        *control |= kind.present();
    }
    Ok(acl)
}
