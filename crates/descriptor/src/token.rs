use std::collections::BTreeSet;

use crate::Sid;

/// The requesting identity, resolved by the caller from its session.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecurityToken {
    /// The user the session acts as.
    pub primary_user: Sid,
    /// Primary group; absent for anonymous sessions.
    pub primary_group: Option<Sid>,
    /// Every group the user is a member of.
    pub group_sids: BTreeSet<Sid>,
}

impl SecurityToken {
    /// Creates a token with no primary group and no memberships.
    #[must_use]
    pub const fn new(primary_user: Sid) -> Self {
        Self {
            primary_user,
            primary_group: None,
            group_sids: BTreeSet::new(),
        }
    }

    /// Sets the primary group.
    #[must_use]
    pub const fn with_primary_group(mut self, group: Sid) -> Self {
        self.primary_group = Some(group);
        self
    }

    /// Adds group memberships.
    #[must_use]
    pub fn with_groups<I: IntoIterator<Item = Sid>>(mut self, groups: I) -> Self {
        self.group_sids.extend(groups);
        self
    }

    /// Group to assign when nothing else supplies one: the primary group, or
    /// the primary user for tokens without a group.
    #[must_use]
    pub fn default_group(&self) -> Sid {
        self.primary_group.unwrap_or(self.primary_user)
    }

    /// Returns `true` when `sid` is the user or one of the token's groups.
    #[must_use]
    pub fn contains(&self, sid: &Sid) -> bool {
        self.primary_user == *sid
            || self.primary_group.as_ref() == Some(sid)
            || self.group_sids.contains(sid)
    }
}
