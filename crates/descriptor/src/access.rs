//! crates/descriptor/src/access.rs
//!
//! Access masks.
//!
//! The upper four bits are the generic rights. They have no meaning on their
//! own and must be translated by a [`GenericMapping`](crate::GenericMapping)
//! for the object model in use before an ACE becomes effective. The remaining
//! bits are concrete: standard rights shared by every object type, plus
//! object-specific rights in the low 16 bits whose meaning depends on the
//! object model (directory-service objects or files).

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Access rights bit-set.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccessMask(u32);

impl AccessMask {
    /// No rights.
    pub const EMPTY: Self = Self(0);

    // Generic rights.

    /// Generic read.
    pub const GENERIC_READ: Self = Self(0x8000_0000);
    /// Generic write.
    pub const GENERIC_WRITE: Self = Self(0x4000_0000);
    /// Generic execute.
    pub const GENERIC_EXECUTE: Self = Self(0x2000_0000);
    /// Generic all.
    pub const GENERIC_ALL: Self = Self(0x1000_0000);
    /// Union of the four generic bits.
    pub const GENERIC_MASK: Self = Self(0xF000_0000);

    // Special rights.

    /// Maximum allowed (access-check request bit).
    pub const MAXIMUM_ALLOWED: Self = Self(0x0200_0000);
    /// Read or write the SACL.
    pub const ACCESS_SYSTEM_SECURITY: Self = Self(0x0100_0000);

    // Standard rights.

    /// Delete the object.
    pub const DELETE: Self = Self(0x0001_0000);
    /// Read the security descriptor, excluding the SACL.
    pub const READ_CONTROL: Self = Self(0x0002_0000);
    /// Modify the DACL.
    pub const WRITE_DAC: Self = Self(0x0004_0000);
    /// Change the owner.
    pub const WRITE_OWNER: Self = Self(0x0008_0000);
    /// Synchronize.
    pub const SYNCHRONIZE: Self = Self(0x0010_0000);
    /// Standard rights granted by generic read/write/execute.
    pub const STANDARD_RIGHTS_READ: Self = Self::READ_CONTROL;
    /// Standard rights granted by generic write.
    pub const STANDARD_RIGHTS_WRITE: Self = Self::READ_CONTROL;
    /// Standard rights granted by generic execute.
    pub const STANDARD_RIGHTS_EXECUTE: Self = Self::READ_CONTROL;
    /// `DELETE | READ_CONTROL | WRITE_DAC | WRITE_OWNER`.
    pub const STANDARD_RIGHTS_REQUIRED: Self = Self(0x000F_0000);
    /// All standard rights including synchronize.
    pub const STANDARD_RIGHTS_ALL: Self = Self(0x001F_0000);

    // Directory-service object rights.

    /// Create child objects.
    pub const DS_CREATE_CHILD: Self = Self(0x0000_0001);
    /// Delete child objects.
    pub const DS_DELETE_CHILD: Self = Self(0x0000_0002);
    /// List children.
    pub const DS_LIST: Self = Self(0x0000_0004);
    /// Validated write.
    pub const DS_SELF: Self = Self(0x0000_0008);
    /// Read properties.
    pub const DS_READ_PROPERTY: Self = Self(0x0000_0010);
    /// Write properties.
    pub const DS_WRITE_PROPERTY: Self = Self(0x0000_0020);
    /// Delete the object and its subtree.
    pub const DS_DELETE_TREE: Self = Self(0x0000_0040);
    /// List the object itself.
    pub const DS_LIST_OBJECT: Self = Self(0x0000_0080);
    /// Extended (control-access) rights.
    pub const DS_CONTROL_ACCESS: Self = Self(0x0000_0100);

    // File object rights.

    /// Read data / list directory.
    pub const FILE_READ_DATA: Self = Self(0x0000_0001);
    /// Write data / add file.
    pub const FILE_WRITE_DATA: Self = Self(0x0000_0002);
    /// Append data / add subdirectory.
    pub const FILE_APPEND_DATA: Self = Self(0x0000_0004);
    /// Read extended attributes.
    pub const FILE_READ_EA: Self = Self(0x0000_0008);
    /// Write extended attributes.
    pub const FILE_WRITE_EA: Self = Self(0x0000_0010);
    /// Execute / traverse.
    pub const FILE_EXECUTE: Self = Self(0x0000_0020);
    /// Delete children.
    pub const FILE_DELETE_CHILD: Self = Self(0x0000_0040);
    /// Read attributes.
    pub const FILE_READ_ATTRIBUTES: Self = Self(0x0000_0080);
    /// Write attributes.
    pub const FILE_WRITE_ATTRIBUTES: Self = Self(0x0000_0100);

    /// Creates a mask from its raw value.
    #[must_use]
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw mask value.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns `true` when no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` when `self` and `other` share a bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Bits set in either mask.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Bits of `self` not set in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` when any generic bit is set.
    #[must_use]
    pub const fn has_generic(self) -> bool {
        self.intersects(Self::GENERIC_MASK)
    }

    /// Returns only the generic bits.
    #[must_use]
    pub const fn generic_bits(self) -> Self {
        Self(self.0 & Self::GENERIC_MASK.0)
    }
}

impl BitOr for AccessMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for AccessMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AccessMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for AccessMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for AccessMask {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::Debug for AccessMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessMask({:#010x})", self.0)
    }
}
