//! crates/descriptor/src/generic.rs
//!
//! Generic-rights mapping.
//!
//! Each object model defines what "read", "write", "execute" and "all" mean
//! for its objects. The inheritance engine is handed a mapper for the model
//! of the object being created and never interprets generic bits itself.

use crate::AccessMask;

/// Translates generic access bits into concrete, object-specific rights.
///
/// Implementations must be pure and total, and must leave a mask without
/// generic bits unchanged so that mapping is idempotent.
///
/// Any `Fn(AccessMask) -> AccessMask` closure is a mapper:
///
/// ```
/// use descriptor::{AccessMask, MapGenericRights};
///
/// let strip = |mask: AccessMask| mask.difference(AccessMask::GENERIC_MASK);
/// assert_eq!(strip.map_generic(AccessMask::GENERIC_ALL), AccessMask::EMPTY);
/// ```
pub trait MapGenericRights {
    /// Returns `mask` with its generic bits replaced by concrete rights.
    fn map_generic(&self, mask: AccessMask) -> AccessMask;
}

impl<F> MapGenericRights for F
where
    F: Fn(AccessMask) -> AccessMask,
{
    fn map_generic(&self, mask: AccessMask) -> AccessMask {
        self(mask)
    }
}

/// Table-driven mapper: each generic bit expands to a fixed set of rights.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericMapping {
    /// Rights granted by [`AccessMask::GENERIC_READ`].
    pub read: AccessMask,
    /// Rights granted by [`AccessMask::GENERIC_WRITE`].
    pub write: AccessMask,
    /// Rights granted by [`AccessMask::GENERIC_EXECUTE`].
    pub execute: AccessMask,
    /// Rights granted by [`AccessMask::GENERIC_ALL`].
    pub all: AccessMask,
}

impl GenericMapping {
    /// Mapping for directory-service objects.
    pub const DIRECTORY: Self = Self {
        read: AccessMask::from_raw(0x0002_0094),
        write: AccessMask::from_raw(0x0002_0028),
        execute: AccessMask::from_raw(0x0002_0004),
        all: AccessMask::from_raw(0x000F_01FF),
    };

    /// Mapping for filesystem objects.
    pub const FILE: Self = Self {
        read: AccessMask::from_raw(0x0012_0089),
        write: AccessMask::from_raw(0x0012_0116),
        execute: AccessMask::from_raw(0x0012_00A0),
        all: AccessMask::from_raw(0x001F_01FF),
    };

    /// Maps `mask` through the table.
    #[must_use]
    pub const fn map(&self, mask: AccessMask) -> AccessMask {
        let mut mapped = mask.difference(AccessMask::GENERIC_MASK);
        if mask.intersects(AccessMask::GENERIC_READ) {
            mapped = mapped.union(self.read);
        }
        if mask.intersects(AccessMask::GENERIC_WRITE) {
            mapped = mapped.union(self.write);
        }
        if mask.intersects(AccessMask::GENERIC_EXECUTE) {
            mapped = mapped.union(self.execute);
        }
        if mask.intersects(AccessMask::GENERIC_ALL) {
            mapped = mapped.union(self.all);
        }
        mapped
    }
}

impl MapGenericRights for GenericMapping {
    fn map_generic(&self, mask: AccessMask) -> AccessMask {
        self.map(mask)
    }
}
