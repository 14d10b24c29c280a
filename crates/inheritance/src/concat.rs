use descriptor::Acl;

use crate::error::{InheritanceError, reserve};

/// Joins the creator's entries and the inherited entries into one ACL.
///
/// Explicit entries come first, then inherited ones, each in their original
/// order. The revision is taken from `user` when present. Returns `Ok(None)`
/// only when both fragments are absent.
pub fn concat(user: Option<Acl>, inherited: Option<Acl>) -> Result<Option<Acl>, InheritanceError> {
    match (user, inherited) {
        (None, None) => Ok(None),
        (Some(acl), None) | (None, Some(acl)) => Ok(Some(acl)),
        (Some(mut user), Some(inherited)) => {
            reserve(&mut user.aces, inherited.len(), "merged ACL")?;
            user.aces.extend(inherited.aces);
            Ok(Some(user))
        }
    }
}
