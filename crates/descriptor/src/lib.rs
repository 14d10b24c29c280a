#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `descriptor` provides the value types that describe who may do what to a
//! directory object: security identifiers, access masks, access control
//! entries and lists, security descriptors and the security token of the
//! requesting session. The types model MS-DTYP section 2.4 closely enough that
//! an external codec can translate them to and from the stored attribute
//! format without losing information.
//!
//! # Design
//!
//! - [`Sid`] stores its sub-authorities inline, so it is `Copy` and can be
//!   built in `const` context (see [`well_known`]).
//! - [`Trustee`] separates concrete identities from the creator-owner and
//!   creator-group placeholders. Decoders classify stored SIDs once with
//!   [`Trustee::from_sid`]; nothing else compares against the placeholder
//!   values.
//! - [`AccessMask`], [`AceFlags`] and [`DescriptorFlags`] are bit-set
//!   newtypes carrying the protocol values.
//! - [`MapGenericRights`] is the seam for object-model specific generic
//!   rights. [`GenericMapping`] provides the directory-service and file
//!   tables; any closure works as well.
//! - [`Acl`] is a plain vector of [`Ace`] values in insertion order.
//!
//! # Invariants
//!
//! - Unused SID sub-authority slots are zero.
//! - Mapping generic rights leaves masks without generic bits unchanged.
//! - Nothing in this crate reorders ACL entries.
//!
//! # Errors
//!
//! Only SID construction can fail; it reports [`ParseSidError`].
//!
//! # Examples
//!
//! ```
//! use descriptor::{AccessMask, Ace, AceFlags, Acl, SecurityDescriptor, Trustee, well_known};
//!
//! let dacl = Acl::from_aces(vec![
//!     Ace::allow(well_known::BUILTIN_ADMINISTRATORS, AccessMask::GENERIC_ALL)
//!         .with_flags(AceFlags::CONTAINER_INHERIT | AceFlags::OBJECT_INHERIT),
//!     Ace::allow(well_known::CREATOR_OWNER, AccessMask::GENERIC_ALL)
//!         .with_flags(AceFlags::CONTAINER_INHERIT),
//! ]);
//! assert_eq!(dacl.aces[1].trustee, Trustee::CreatorOwner);
//!
//! let sd = SecurityDescriptor::new()
//!     .with_owner(well_known::BUILTIN_ADMINISTRATORS)
//!     .with_dacl(dacl);
//! assert!(sd.dacl.is_some());
//! ```

mod access;
mod ace;
mod acl;
mod descriptor;
mod error;
mod generic;
mod sid;
mod token;
mod trustee;
pub mod well_known;

pub use access::AccessMask;
pub use ace::{Ace, AceFlags, AceType, Guid};
pub use acl::Acl;
pub use descriptor::{DescriptorFlags, SecurityDescriptor};
pub use error::ParseSidError;
pub use generic::{GenericMapping, MapGenericRights};
pub use sid::{MAX_SUB_AUTHORITIES, Sid};
pub use token::SecurityToken;
pub use trustee::Trustee;
