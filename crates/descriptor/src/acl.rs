use crate::Ace;

/// An ordered access control list.
///
/// Entries keep insertion order; nothing in this workspace reorders them.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Acl {
    /// ACL revision.
    pub revision: u8,
    /// Entries in evaluation order.
    pub aces: Vec<Ace>,
}

impl Acl {
    /// Revision for ACLs without object ACEs.
    pub const REVISION: u8 = 2;
    /// Revision for ACLs that may carry object ACEs.
    pub const REVISION_DS: u8 = 4;

    /// Creates an empty ACL with [`Acl::REVISION`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_revision(Self::REVISION)
    }

    /// Creates an empty ACL with the given revision.
    #[must_use]
    pub const fn with_revision(revision: u8) -> Self {
        Self {
            revision,
            aces: Vec::new(),
        }
    }

    /// Creates an ACL from entries, picking [`Acl::REVISION_DS`] when any
    /// entry is object-specific.
    #[must_use]
    pub fn from_aces(aces: Vec<Ace>) -> Self {
        let revision = if aces.iter().any(|ace| ace.ace_type.is_object()) {
            Self::REVISION_DS
        } else {
            Self::REVISION
        };
        Self { revision, aces }
    }

    /// Appends an entry.
    pub fn push(&mut self, ace: Ace) {
        self.aces.push(ace);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aces.len()
    }

    /// Returns `true` when the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aces.is_empty()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Ace> {
        self.aces.iter()
    }
}

impl Default for Acl {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Acl {
    type Item = &'a Ace;
    type IntoIter = std::slice::Iter<'a, Ace>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Ace> for Acl {
    fn from_iter<I: IntoIterator<Item = Ace>>(iter: I) -> Self {
        Self::from_aces(iter.into_iter().collect())
    }
}
