use std::fmt;

use crate::Sid;
use crate::well_known::{CREATOR_GROUP, CREATOR_OWNER};

/// The identity an ACE applies to.
///
/// Creator placeholders stand for the owner or group of the object being
/// created and are substituted by the inheritance engine. They may survive in
/// inherit-only ACEs, which exist only to propagate further down the tree,
/// but never in an ACE that is effective on its object.
///
/// `Trustee::Sid` holding `S-1-3-0` or `S-1-3-1` is treated exactly like the
/// matching placeholder variant; [`normalized`](Self::normalized) folds it.
/// Decoding always yields the placeholder variant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "TrusteeRepr")
)]
pub enum Trustee {
    /// A concrete principal.
    Sid(Sid),
    /// Substitute the new object's owner.
    CreatorOwner,
    /// Substitute the new object's group.
    CreatorGroup,
}

impl Trustee {
    /// Classifies a decoded SID, recognising the creator placeholders.
    ///
    /// Codecs call this when turning a stored ACE into a [`Trustee`].
    #[must_use]
    pub const fn from_sid(sid: Sid) -> Self {
        if sid.is_creator_owner() {
            Self::CreatorOwner
        } else if sid.is_creator_group() {
            Self::CreatorGroup
        } else {
            Self::Sid(sid)
        }
    }

    /// Folds a placeholder SID held in [`Sid`](Self::Sid) into its variant.
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Sid(sid) => Self::from_sid(sid),
            other => other,
        }
    }

    /// Returns the SID to store for this trustee, mapping placeholders back
    /// to their well-known values.
    #[must_use]
    pub const fn to_sid(self) -> Sid {
        match self {
            Self::Sid(sid) => sid,
            Self::CreatorOwner => CREATOR_OWNER,
            Self::CreatorGroup => CREATOR_GROUP,
        }
    }

    /// Returns the concrete SID, or `None` for a placeholder.
    #[must_use]
    pub const fn as_sid(&self) -> Option<&Sid> {
        match self {
            Self::Sid(sid) if !sid.is_creator_placeholder() => Some(sid),
            _ => None,
        }
    }

    /// Returns `true` for [`CreatorOwner`](Self::CreatorOwner),
    /// [`CreatorGroup`](Self::CreatorGroup) and their raw SIDs.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        match self {
            Self::Sid(sid) => sid.is_creator_placeholder(),
            Self::CreatorOwner | Self::CreatorGroup => true,
        }
    }

    /// Substitutes placeholders with the resolved owner and group.
    #[must_use]
    pub const fn resolve(self, owner: Sid, group: Sid) -> Sid {
        match self.normalized() {
            Self::Sid(sid) => sid,
            Self::CreatorOwner => owner,
            Self::CreatorGroup => group,
        }
    }
}

/// Wire shape of [`Trustee`]; decoding goes through [`Trustee::from_sid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
enum TrusteeRepr {
    Sid(Sid),
    CreatorOwner,
    CreatorGroup,
}

#[cfg(feature = "serde")]
impl From<TrusteeRepr> for Trustee {
    fn from(repr: TrusteeRepr) -> Self {
        match repr {
            TrusteeRepr::Sid(sid) => Self::from_sid(sid),
            TrusteeRepr::CreatorOwner => Self::CreatorOwner,
            TrusteeRepr::CreatorGroup => Self::CreatorGroup,
        }
    }
}

impl From<Sid> for Trustee {
    fn from(sid: Sid) -> Self {
        Self::from_sid(sid)
    }
}

impl fmt::Display for Trustee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sid(sid) => sid.fmt(f),
            Self::CreatorOwner => f.write_str("CREATOR OWNER"),
            Self::CreatorGroup => f.write_str("CREATOR GROUP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::well_known::{BUILTIN_ADMINISTRATORS, LOCAL_SYSTEM};

    #[test]
    fn placeholder_sids_classify_as_placeholders() {
        assert_eq!(Trustee::from_sid(CREATOR_OWNER), Trustee::CreatorOwner);
        assert_eq!(Trustee::from(CREATOR_GROUP), Trustee::CreatorGroup);
        assert_eq!(
            Trustee::from_sid(LOCAL_SYSTEM),
            Trustee::Sid(LOCAL_SYSTEM)
        );
    }

    #[test]
    fn to_sid_reverses_from_sid() {
        for sid in [CREATOR_OWNER, CREATOR_GROUP, BUILTIN_ADMINISTRATORS] {
            assert_eq!(Trustee::from_sid(sid).to_sid(), sid);
        }
    }

    #[test]
    fn resolve_substitutes_only_placeholders() {
        let owner: Sid = "S-1-5-21-1-2-3-1104".parse().unwrap();
        let group: Sid = "S-1-5-21-1-2-3-513".parse().unwrap();

        assert_eq!(Trustee::CreatorOwner.resolve(owner, group), owner);
        assert_eq!(Trustee::CreatorGroup.resolve(owner, group), group);
        assert_eq!(
            Trustee::Sid(LOCAL_SYSTEM).resolve(owner, group),
            LOCAL_SYSTEM
        );
    }

    #[test]
    fn raw_placeholder_sid_behaves_like_placeholder() {
        let owner: Sid = "S-1-5-21-1-2-3-1104".parse().unwrap();
        let group: Sid = "S-1-5-21-1-2-3-513".parse().unwrap();
        let raw_owner = Trustee::Sid(CREATOR_OWNER);
        let raw_group = Trustee::Sid(CREATOR_GROUP);

        assert!(raw_owner.is_placeholder());
        assert!(raw_group.is_placeholder());
        assert_eq!(raw_owner.as_sid(), None);
        assert_eq!(raw_owner.normalized(), Trustee::CreatorOwner);
        assert_eq!(raw_group.normalized(), Trustee::CreatorGroup);
        assert_eq!(raw_owner.resolve(owner, group), owner);
        assert_eq!(raw_group.resolve(owner, group), group);
        assert_eq!(
            Trustee::Sid(LOCAL_SYSTEM).normalized(),
            Trustee::Sid(LOCAL_SYSTEM)
        );
    }

    #[test]
    fn accessors() {
        assert!(Trustee::CreatorOwner.is_placeholder());
        assert!(Trustee::CreatorOwner.as_sid().is_none());
        assert!(!Trustee::Sid(LOCAL_SYSTEM).is_placeholder());
        assert_eq!(Trustee::Sid(LOCAL_SYSTEM).as_sid(), Some(&LOCAL_SYSTEM));
        assert_eq!(Trustee::CreatorGroup.to_string(), "CREATOR GROUP");
        assert_eq!(Trustee::Sid(LOCAL_SYSTEM).to_string(), "S-1-5-18");
    }
}
