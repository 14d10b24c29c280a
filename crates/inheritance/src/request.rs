use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use descriptor::{MapGenericRights, SecurityDescriptor, SecurityToken, Sid};

use crate::{InheritanceError, ObjectTypes};

/// Options controlling how a new descriptor is derived.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct InheritFlags(u8);

impl InheritFlags {
    /// No options.
    pub const EMPTY: Self = Self(0);
    /// Derive the DACL's inherited fragment from the parent.
    pub const DACL_AUTO_INHERIT: Self = Self(0x01);
    /// Derive the SACL's inherited fragment from the parent.
    pub const SACL_AUTO_INHERIT: Self = Self(0x02);
    /// Ignore the creator's ACLs; only inherited entries are used.
    pub const DEFAULT_DESCRIPTOR: Self = Self(0x04);
    /// Take the owner from the parent when the creator names none.
    pub const OWNER_FROM_PARENT: Self = Self(0x20);
    /// Take the group from the parent when the creator names none.
    pub const GROUP_FROM_PARENT: Self = Self(0x40);
    /// Both auto-inherit options.
    pub const AUTO_INHERIT: Self = Self(0x03);

    const NAMES: [(Self, &'static str); 5] = [
        (Self::DACL_AUTO_INHERIT, "DACL_AUTO_INHERIT"),
        (Self::SACL_AUTO_INHERIT, "SACL_AUTO_INHERIT"),
        (Self::DEFAULT_DESCRIPTOR, "DEFAULT_DESCRIPTOR"),
        (Self::OWNER_FROM_PARENT, "OWNER_FROM_PARENT"),
        (Self::GROUP_FROM_PARENT, "GROUP_FROM_PARENT"),
    ];

    /// Wraps raw option bits. Unknown bits are kept and ignored.
    #[must_use]
    pub const fn from_raw(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw option bits.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self.0
    }

    /// Returns `true` when every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns these options with `other` added.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns these options with `other` removed.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns these options with `other` added or removed.
    #[must_use]
    pub const fn set(self, other: Self, enabled: bool) -> Self {
        if enabled {
            self.with(other)
        } else {
            self.without(other)
        }
    }
}

impl BitOr for InheritFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl BitOrAssign for InheritFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.with(rhs);
    }
}

impl fmt::Debug for InheritFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InheritFlags(")?;
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("EMPTY")?;
        }
        f.write_str(")")
    }
}

/// Everything needed to derive the descriptor of a new object.
///
/// All inputs are borrowed from the caller; [`assemble`](Self::assemble)
/// allocates a fresh descriptor and leaves them untouched.
///
/// ```
/// use descriptor::{GenericMapping, SecurityToken, well_known};
/// use inheritance::{InheritFlags, InheritanceRequest};
///
/// let token = SecurityToken::new(well_known::LOCAL_SYSTEM);
/// let sd = InheritanceRequest::new(&token, &GenericMapping::DIRECTORY)
///     .with_container(true)
///     .with_flags(InheritFlags::AUTO_INHERIT)
///     .assemble()?;
/// assert_eq!(sd.owner, Some(well_known::LOCAL_SYSTEM));
/// assert_eq!(sd.group, Some(well_known::LOCAL_SYSTEM));
/// # Ok::<(), inheritance::InheritanceError>(())
/// ```
#[derive(Clone, Copy)]
pub struct InheritanceRequest<'a> {
    parent: Option<&'a SecurityDescriptor>,
    creator: Option<&'a SecurityDescriptor>,
    is_container: bool,
    object_types: Option<&'a ObjectTypes>,
    flags: InheritFlags,
    token: &'a SecurityToken,
    default_owner: Option<Sid>,
    default_group: Option<Sid>,
    mapper: &'a dyn MapGenericRights,
}

impl<'a> InheritanceRequest<'a> {
    /// Starts a request for a leaf object with no parent, no creator
    /// descriptor and no options.
    #[must_use]
    pub fn new(token: &'a SecurityToken, mapper: &'a dyn MapGenericRights) -> Self {
        Self {
            parent: None,
            creator: None,
            is_container: false,
            object_types: None,
            flags: InheritFlags::EMPTY,
            token,
            default_owner: None,
            default_group: None,
            mapper,
        }
    }

    /// Sets the parent object's descriptor.
    #[must_use]
    pub const fn with_parent(mut self, parent: Option<&'a SecurityDescriptor>) -> Self {
        self.parent = parent;
        self
    }

    /// Sets the descriptor supplied by the creator.
    #[must_use]
    pub const fn with_creator(mut self, creator: Option<&'a SecurityDescriptor>) -> Self {
        self.creator = creator;
        self
    }

    /// Marks the new object as able to have children.
    #[must_use]
    pub const fn with_container(mut self, is_container: bool) -> Self {
        self.is_container = is_container;
        self
    }

    /// Restricts object-specific entries to the given object types.
    #[must_use]
    pub const fn with_object_types(mut self, object_types: Option<&'a ObjectTypes>) -> Self {
        self.object_types = object_types;
        self
    }

    /// Replaces the option flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: InheritFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the owner used when neither the creator nor the parent supplies one.
    #[must_use]
    pub const fn with_default_owner(mut self, owner: Option<Sid>) -> Self {
        self.default_owner = owner;
        self
    }

    /// Sets the group used when neither the creator nor the parent supplies one.
    #[must_use]
    pub const fn with_default_group(mut self, group: Option<Sid>) -> Self {
        self.default_group = group;
        self
    }

    /// Parent descriptor, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&'a SecurityDescriptor> {
        self.parent
    }

    /// Creator descriptor, if any.
    #[must_use]
    pub const fn creator(&self) -> Option<&'a SecurityDescriptor> {
        self.creator
    }

    /// Whether the new object can have children.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.is_container
    }

    /// Accepted object types, `None` when unrestricted.
    #[must_use]
    pub const fn object_types(&self) -> Option<&'a ObjectTypes> {
        self.object_types
    }

    /// Option flags.
    #[must_use]
    pub const fn flags(&self) -> InheritFlags {
        self.flags
    }

    /// Security token of the requesting session.
    #[must_use]
    pub const fn token(&self) -> &'a SecurityToken {
        self.token
    }

    /// Fallback owner.
    #[must_use]
    pub const fn default_owner(&self) -> Option<Sid> {
        self.default_owner
    }

    /// Fallback group.
    #[must_use]
    pub const fn default_group(&self) -> Option<Sid> {
        self.default_group
    }

    /// Generic-rights mapper for the object model.
    #[must_use]
    pub fn mapper(&self) -> &'a dyn MapGenericRights {
        self.mapper
    }

    /// Derives the new object's descriptor. See [`assemble`](crate::assemble).
    pub fn assemble(&self) -> Result<SecurityDescriptor, InheritanceError> {
        crate::assemble(self)
    }
}

impl fmt::Debug for InheritanceRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InheritanceRequest")
            .field("parent", &self.parent)
            .field("creator", &self.creator)
            .field("is_container", &self.is_container)
            .field("object_types", &self.object_types)
            .field("flags", &self.flags)
            .field("token", &self.token)
            .field("default_owner", &self.default_owner)
            .field("default_group", &self.default_group)
            .finish_non_exhaustive()
    }
}
