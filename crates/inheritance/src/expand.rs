use descriptor::{Ace, AceFlags, MapGenericRights, Sid, Trustee};

/// Returns `true` when the ACE must be resolved before it can take effect:
/// its mask carries generic rights or its trustee is a creator placeholder.
#[must_use]
pub fn needs_expansion(ace: &Ace) -> bool {
    ace.mask.has_generic() || ace.trustee.is_placeholder()
}

/// Returns the effective, non-propagating form of `ace`.
///
/// The trustee is resolved against `owner`/`group`, the mask is passed
/// through `mapper`, and every inheritance flag (`OBJECT_INHERIT`,
/// `CONTAINER_INHERIT`, `NO_PROPAGATE_INHERIT`, `INHERIT_ONLY`) is cleared.
/// Other flags, such as `INHERITED` and the audit flags, are kept; callers
/// decide whether the result is tagged as inherited.
///
/// Expanding an already concrete ACE only normalises its flags.
#[must_use]
pub fn expand<M>(ace: &Ace, owner: Sid, group: Sid, mapper: &M) -> Ace
where
    M: MapGenericRights + ?Sized,
{
    Ace {
        trustee: Trustee::Sid(ace.trustee.resolve(owner, group)),
        mask: mapper.map_generic(ace.mask),
        flags: ace.flags.without(AceFlags::INHERITANCE),
        ..*ace
    }
}
