//! Well-known SIDs referenced by the inheritance engine and its callers.

use crate::Sid;

/// `S-1-1-0`, Everyone.
pub const WORLD: Sid = Sid::well_known(1, [0]);
/// `S-1-3-0`, the creator-owner placeholder.
pub const CREATOR_OWNER: Sid = Sid::well_known(3, [0]);
/// `S-1-3-1`, the creator-group placeholder.
pub const CREATOR_GROUP: Sid = Sid::well_known(3, [1]);
/// `S-1-5-7`, the anonymous logon.
pub const ANONYMOUS: Sid = Sid::well_known(5, [7]);
/// `S-1-5-11`, Authenticated Users.
pub const AUTHENTICATED_USERS: Sid = Sid::well_known(5, [11]);
/// `S-1-5-18`, Local System.
pub const LOCAL_SYSTEM: Sid = Sid::well_known(5, [18]);
/// `S-1-5-32-544`, BUILTIN\Administrators.
pub const BUILTIN_ADMINISTRATORS: Sid = Sid::well_known(5, [32, 544]);
