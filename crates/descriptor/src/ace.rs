//! crates/descriptor/src/ace.rs
//!
//! Access control entries.
//!
//! # Inheritance flags
//!
//! - `OBJECT_INHERIT` / `CONTAINER_INHERIT` select which children (leaf
//!   objects / containers) inherit the entry.
//! - `NO_PROPAGATE_INHERIT` limits inheritance to immediate children.
//! - `INHERIT_ONLY` marks an entry that does not apply to the object it is
//!   attached to and only exists to be inherited. Without `OBJECT_INHERIT` or
//!   `CONTAINER_INHERIT` such an entry does nothing at all.
//! - `INHERITED` records that the entry was produced by inheritance rather
//!   than set explicitly.
//!
//! Flag values follow MS-DTYP 2.4.4.1.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::{AccessMask, Trustee};

/// GUID carried by object-specific ACEs.
pub type Guid = uuid::Uuid;

/// ACE type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AceType {
    /// Access allowed.
    Allow,
    /// Access denied.
    Deny,
    /// Access allowed, optionally restricted to an object type.
    AllowObject,
    /// Access denied, optionally restricted to an object type.
    DenyObject,
    /// System audit.
    Audit,
    /// System audit, optionally restricted to an object type.
    AuditObject,
}

impl AceType {
    /// Returns `true` for the types that carry object-type GUIDs.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::AllowObject | Self::DenyObject | Self::AuditObject)
    }

    /// Returns `true` for the audit types, which belong in a SACL.
    #[must_use]
    pub const fn is_audit(self) -> bool {
        matches!(self, Self::Audit | Self::AuditObject)
    }
}

impl fmt::Display for AceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
            Self::AllowObject => "allow-object",
            Self::DenyObject => "deny-object",
            Self::Audit => "audit",
            Self::AuditObject => "audit-object",
        })
    }
}

/// ACE flags.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AceFlags(u8);

impl AceFlags {
    /// No flags.
    pub const EMPTY: Self = Self(0);
    /// Leaf children inherit the ACE.
    pub const OBJECT_INHERIT: Self = Self(0x01);
    /// Container children inherit the ACE.
    pub const CONTAINER_INHERIT: Self = Self(0x02);
    /// Only immediate children inherit the ACE.
    pub const NO_PROPAGATE_INHERIT: Self = Self(0x04);
    /// The ACE does not apply to its own object.
    pub const INHERIT_ONLY: Self = Self(0x08);
    /// The ACE was produced by inheritance.
    pub const INHERITED: Self = Self(0x10);
    /// Audit successful accesses.
    pub const SUCCESSFUL_ACCESS: Self = Self(0x40);
    /// Audit failed accesses.
    pub const FAILED_ACCESS: Self = Self(0x80);

    /// `OBJECT_INHERIT | CONTAINER_INHERIT`.
    pub const INHERITABLE: Self = Self(0x03);
    /// Every flag that controls propagation.
    pub const INHERITANCE: Self = Self(0x0F);

    /// Creates flags from their raw value.
    #[must_use]
    pub const fn from_raw(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw flags value.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self.0
    }

    /// Returns `true` when every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` when any bit of `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the flags with `other` added.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the flags with `other` removed.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for AceFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl BitOrAssign for AceFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for AceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(AceFlags, &str); 7] = [
            (AceFlags::OBJECT_INHERIT, "OI"),
            (AceFlags::CONTAINER_INHERIT, "CI"),
            (AceFlags::NO_PROPAGATE_INHERIT, "NP"),
            (AceFlags::INHERIT_ONLY, "IO"),
            (AceFlags::INHERITED, "ID"),
            (AceFlags::SUCCESSFUL_ACCESS, "SA"),
            (AceFlags::FAILED_ACCESS, "FA"),
        ];

        f.write_str("AceFlags(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

/// A single access control entry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ace {
    /// Entry type.
    pub ace_type: AceType,
    /// Identity the entry applies to.
    pub trustee: Trustee,
    /// Rights granted, denied or audited.
    pub mask: AccessMask,
    /// Inheritance and audit flags.
    pub flags: AceFlags,
    /// Object type (property, property set or extended right) for object ACEs.
    pub object_type: Option<Guid>,
    /// Object class allowed to inherit the entry, for object ACEs.
    pub inherited_object_type: Option<Guid>,
}

impl Ace {
    /// Creates an ACE with no flags and no object types.
    #[must_use]
    pub fn new(ace_type: AceType, trustee: impl Into<Trustee>, mask: AccessMask) -> Self {
        Self {
            ace_type,
            trustee: trustee.into(),
            mask,
            flags: AceFlags::EMPTY,
            object_type: None,
            inherited_object_type: None,
        }
    }

    /// Creates an access-allowed ACE.
    #[must_use]
    pub fn allow(trustee: impl Into<Trustee>, mask: AccessMask) -> Self {
        Self::new(AceType::Allow, trustee, mask)
    }

    /// Creates an access-denied ACE.
    #[must_use]
    pub fn deny(trustee: impl Into<Trustee>, mask: AccessMask) -> Self {
        Self::new(AceType::Deny, trustee, mask)
    }

    /// Creates a system-audit ACE.
    #[must_use]
    pub fn audit(trustee: impl Into<Trustee>, mask: AccessMask) -> Self {
        Self::new(AceType::Audit, trustee, mask)
    }

    /// Replaces the flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: AceFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the object type GUID.
    #[must_use]
    pub const fn with_object_type(mut self, guid: Guid) -> Self {
        self.object_type = Some(guid);
        self
    }

    /// Sets the inherited object type GUID.
    #[must_use]
    pub const fn with_inherited_object_type(mut self, guid: Guid) -> Self {
        self.inherited_object_type = Some(guid);
        self
    }

    /// Returns `true` when children inherit this entry.
    #[must_use]
    pub const fn is_inheritable(&self) -> bool {
        self.flags.intersects(AceFlags::INHERITABLE)
    }

    /// Returns `true` when the entry does not apply to its own object.
    #[must_use]
    pub const fn is_inherit_only(&self) -> bool {
        self.flags.contains(AceFlags::INHERIT_ONLY)
    }

    /// Returns `true` when the entry was produced by inheritance.
    #[must_use]
    pub const fn is_inherited(&self) -> bool {
        self.flags.contains(AceFlags::INHERITED)
    }

    /// Returns `true` for an inherit-only entry that nothing can inherit.
    #[must_use]
    pub const fn is_meaningless(&self) -> bool {
        self.is_inherit_only() && !self.is_inheritable()
    }
}
