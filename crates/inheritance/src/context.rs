use std::fmt;

use descriptor::{AceFlags, Guid, MapGenericRights, Sid};
use rustc_hash::FxHashSet;

/// Object-type GUIDs an object class accepts for object-specific ACEs.
pub type ObjectTypes = FxHashSet<Guid>;

/// What the ACL-level producers need to know about the object being created.
///
/// Built once per descriptor after owner and group are resolved, then shared
/// by the DACL and SACL passes.
#[derive(Clone, Copy)]
pub struct InheritTarget<'a> {
    /// Whether the new object can have children.
    pub is_container: bool,
    /// Resolved owner, substituted for [`Trustee::CreatorOwner`](descriptor::Trustee::CreatorOwner).
    pub owner: Sid,
    /// Resolved group, substituted for [`Trustee::CreatorGroup`](descriptor::Trustee::CreatorGroup).
    pub group: Sid,
    /// Accepted object types; `None` when the class does not restrict them.
    pub object_types: Option<&'a ObjectTypes>,
    /// Generic-rights mapper for the object model.
    pub mapper: &'a dyn MapGenericRights,
}

impl<'a> InheritTarget<'a> {
    /// Creates a target without object-type restrictions.
    #[must_use]
    pub fn new(
        is_container: bool,
        owner: Sid,
        group: Sid,
        mapper: &'a dyn MapGenericRights,
    ) -> Self {
        Self {
            is_container,
            owner,
            group,
            object_types: None,
            mapper,
        }
    }

    /// Restricts object-specific ACEs to `object_types`.
    #[must_use]
    pub fn with_object_types(mut self, object_types: Option<&'a ObjectTypes>) -> Self {
        self.object_types = object_types;
        self
    }

    /// Returns `true` when an object ACE for `object_type` may take effect on
    /// this object. ACEs without an object type and unrestricted classes are
    /// always accepted.
    #[must_use]
    pub fn accepts_object_type(&self, object_type: Option<&Guid>) -> bool {
        match (object_type, self.object_types) {
            (Some(guid), Some(allowed)) => allowed.contains(guid),
            _ => true,
        }
    }

    /// Returns `true` when an inheritable ACE with `flags` takes effect on the
    /// new object itself: containers take container-inherit entries, leaves
    /// take object-inherit entries.
    #[must_use]
    pub const fn applies_directly(&self, flags: AceFlags) -> bool {
        if self.is_container {
            flags.contains(AceFlags::CONTAINER_INHERIT)
        } else {
            flags.contains(AceFlags::OBJECT_INHERIT)
        }
    }
}

impl fmt::Debug for InheritTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InheritTarget")
            .field("is_container", &self.is_container)
            .field("owner", &self.owner)
            .field("group", &self.group)
            .field("object_types", &self.object_types)
            .finish_non_exhaustive()
    }
}
