//! crates/inheritance/src/policy.rs
//! Per-class inheritance options, loadable from the caller's configuration.

use std::collections::BTreeMap;

use descriptor::Sid;

use crate::{InheritFlags, InheritanceRequest};

/// Inheritance options and fallback identities for one class of objects.
///
/// The default enables DACL and SACL auto-inheritance and nothing else.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct InheritancePolicy {
    /// Take the owner from the parent when the creator names none.
    pub owner_from_parent: bool,
    /// Take the group from the parent when the creator names none.
    pub group_from_parent: bool,
    /// Ignore creator-supplied ACLs.
    pub default_descriptor: bool,
    /// Inherit DACL entries from the parent.
    pub dacl_auto_inherit: bool,
    /// Inherit SACL entries from the parent.
    pub sacl_auto_inherit: bool,
    /// Owner used when no other source supplies one.
    pub default_owner: Option<Sid>,
    /// Group used when no other source supplies one.
    pub default_group: Option<Sid>,
}

impl Default for InheritancePolicy {
    fn default() -> Self {
        Self {
            owner_from_parent: false,
            group_from_parent: false,
            default_descriptor: false,
            dacl_auto_inherit: true,
            sacl_auto_inherit: true,
            default_owner: None,
            default_group: None,
        }
    }
}

impl InheritancePolicy {
    /// Starts a builder from the default policy.
    #[must_use]
    pub fn builder() -> InheritancePolicyBuilder {
        InheritancePolicyBuilder::default()
    }

    /// Returns the option flags this policy selects.
    #[must_use]
    pub const fn flags(&self) -> InheritFlags {
        InheritFlags::EMPTY
            .set(InheritFlags::OWNER_FROM_PARENT, self.owner_from_parent)
            .set(InheritFlags::GROUP_FROM_PARENT, self.group_from_parent)
            .set(InheritFlags::DEFAULT_DESCRIPTOR, self.default_descriptor)
            .set(InheritFlags::DACL_AUTO_INHERIT, self.dacl_auto_inherit)
            .set(InheritFlags::SACL_AUTO_INHERIT, self.sacl_auto_inherit)
    }

    /// Writes the policy's flags and fallback identities into `request`,
    /// replacing what it held.
    #[must_use]
    pub fn apply<'a>(&self, request: InheritanceRequest<'a>) -> InheritanceRequest<'a> {
        request
            .with_flags(self.flags())
            .with_default_owner(self.default_owner)
            .with_default_group(self.default_group)
    }
}

/// Builder for [`InheritancePolicy`].
#[derive(Clone, Debug, Default)]
pub struct InheritancePolicyBuilder {
    policy: InheritancePolicy,
}

impl InheritancePolicyBuilder {
    /// Sets whether the owner may come from the parent.
    #[must_use]
    pub const fn owner_from_parent(mut self, enabled: bool) -> Self {
        self.policy.owner_from_parent = enabled;
        self
    }

    /// Sets whether the group may come from the parent.
    #[must_use]
    pub const fn group_from_parent(mut self, enabled: bool) -> Self {
        self.policy.group_from_parent = enabled;
        self
    }

    /// Sets whether creator-supplied ACLs are ignored.
    #[must_use]
    pub const fn default_descriptor(mut self, enabled: bool) -> Self {
        self.policy.default_descriptor = enabled;
        self
    }

    /// Sets DACL auto-inheritance.
    #[must_use]
    pub const fn dacl_auto_inherit(mut self, enabled: bool) -> Self {
        self.policy.dacl_auto_inherit = enabled;
        self
    }

    /// Sets SACL auto-inheritance.
    #[must_use]
    pub const fn sacl_auto_inherit(mut self, enabled: bool) -> Self {
        self.policy.sacl_auto_inherit = enabled;
        self
    }

    /// Sets the fallback owner.
    #[must_use]
    pub const fn default_owner(mut self, owner: Sid) -> Self {
        self.policy.default_owner = Some(owner);
        self
    }

    /// Sets the fallback group.
    #[must_use]
    pub const fn default_group(mut self, group: Sid) -> Self {
        self.policy.default_group = Some(group);
        self
    }

    /// Finishes the policy.
    #[must_use]
    pub fn build(self) -> InheritancePolicy {
        self.policy
    }
}

/// Policies keyed by object class name, with a fallback.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PolicyTable {
    /// Policy for classes without an entry.
    pub default: InheritancePolicy,
    /// Per-class overrides.
    pub classes: BTreeMap<String, InheritancePolicy>,
}

impl PolicyTable {
    /// Creates a table holding only `default`.
    #[must_use]
    pub const fn new(default: InheritancePolicy) -> Self {
        Self {
            default,
            classes: BTreeMap::new(),
        }
    }

    /// Adds or replaces the policy for `class`.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>, policy: InheritancePolicy) -> Self {
        self.classes.insert(class.into(), policy);
        self
    }

    /// Returns the policy for `class`, falling back to the default.
    #[must_use]
    pub fn policy_for(&self, class: &str) -> &InheritancePolicy {
        self.classes.get(class).unwrap_or(&self.default)
    }
}
