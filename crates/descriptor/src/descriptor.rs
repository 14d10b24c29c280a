//! crates/descriptor/src/descriptor.rs
//!
//! Security descriptors and their control flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::{Acl, Sid};

/// Security descriptor control flags (MS-DTYP 2.4.6).
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DescriptorFlags(u16);

impl DescriptorFlags {
    /// No flags.
    pub const EMPTY: Self = Self(0);
    /// The owner came from a default rather than the creator.
    pub const OWNER_DEFAULTED: Self = Self(0x0001);
    /// The group came from a default rather than the creator.
    pub const GROUP_DEFAULTED: Self = Self(0x0002);
    /// The descriptor has a DACL.
    pub const DACL_PRESENT: Self = Self(0x0004);
    /// The DACL came from a default.
    pub const DACL_DEFAULTED: Self = Self(0x0008);
    /// The descriptor has a SACL.
    pub const SACL_PRESENT: Self = Self(0x0010);
    /// The SACL came from a default.
    pub const SACL_DEFAULTED: Self = Self(0x0020);
    /// The DACL was set up to support automatic inheritance.
    pub const DACL_AUTO_INHERITED: Self = Self(0x0400);
    /// The SACL was set up to support automatic inheritance.
    pub const SACL_AUTO_INHERITED: Self = Self(0x0800);
    /// The DACL does not receive inherited entries.
    pub const DACL_PROTECTED: Self = Self(0x1000);
    /// The SACL does not receive inherited entries.
    pub const SACL_PROTECTED: Self = Self(0x2000);
    /// The descriptor is stored in self-relative form.
    pub const SELF_RELATIVE: Self = Self(0x8000);

    /// Both presence bits.
    pub const PRESENCE: Self = Self(0x0014);

    /// Creates flags from their raw value.
    #[must_use]
    pub const fn from_raw(value: u16) -> Self {
        Self(value)
    }

    /// Returns the raw flags value.
    #[must_use]
    pub const fn as_raw(self) -> u16 {
        self.0
    }

    /// Returns `true` when every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
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

impl BitOr for DescriptorFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl BitOrAssign for DescriptorFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for DescriptorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DescriptorFlags({:#06x})", self.0)
    }
}

/// A security descriptor.
///
/// Owner and group are optional so that creator-supplied descriptors can omit
/// them. Descriptors produced by the inheritance engine always carry both.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecurityDescriptor {
    /// Owner SID.
    pub owner: Option<Sid>,
    /// Primary group SID.
    pub group: Option<Sid>,
    /// Discretionary ACL.
    pub dacl: Option<Acl>,
    /// System (audit) ACL.
    pub sacl: Option<Acl>,
    /// Control flags.
    pub control: DescriptorFlags,
}

impl SecurityDescriptor {
    /// Creates an empty descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            owner: None,
            group: None,
            dacl: None,
            sacl: None,
            control: DescriptorFlags::EMPTY,
        }
    }

    /// Sets the owner.
    #[must_use]
    pub const fn with_owner(mut self, owner: Sid) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Sets the group.
    #[must_use]
    pub const fn with_group(mut self, group: Sid) -> Self {
        self.group = Some(group);
        self
    }

    /// Sets the DACL and marks it present.
    #[must_use]
    pub fn with_dacl(mut self, dacl: Acl) -> Self {
        self.dacl = Some(dacl);
        self.control |= DescriptorFlags::DACL_PRESENT;
        self
    }

    /// Sets the SACL and marks it present.
    #[must_use]
    pub fn with_sacl(mut self, sacl: Acl) -> Self {
        self.sacl = Some(sacl);
        self.control |= DescriptorFlags::SACL_PRESENT;
        self
    }

    /// Adds control flags.
    #[must_use]
    pub fn with_control(mut self, flags: DescriptorFlags) -> Self {
        self.control |= flags;
        self
    }

    /// Returns `true` when the DACL refuses inherited entries.
    #[must_use]
    pub const fn is_dacl_protected(&self) -> bool {
        self.control.contains(DescriptorFlags::DACL_PROTECTED)
    }

    /// Returns `true` when the SACL refuses inherited entries.
    #[must_use]
    pub const fn is_sacl_protected(&self) -> bool {
        self.control.contains(DescriptorFlags::SACL_PROTECTED)
    }
}
