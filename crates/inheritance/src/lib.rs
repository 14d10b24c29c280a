#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `inheritance` computes the security descriptor of a newly created directory
//! object from its parent's descriptor, an optional descriptor supplied by the
//! creator, the requesting session's [`SecurityToken`](descriptor::SecurityToken)
//! and per-class options. It resolves the owner and group, derives the
//! inherited entries of the DACL and SACL, prepares the creator's explicit
//! entries, and joins the two. The same machinery re-derives the descriptor of
//! an object moved under a new parent.
//!
//! # Design
//!
//! - [`InheritanceRequest`] borrows every input and is built with `with_*`
//!   setters. [`assemble`] (or [`InheritanceRequest::assemble`]) produces a
//!   fresh [`SecurityDescriptor`](descriptor::SecurityDescriptor).
//! - [`propagate`] derives the inherited fragment of one ACL, [`process_creator`]
//!   prepares the creator's fragment, and [`concat`] joins them. All three share
//!   an [`InheritTarget`] describing the new object.
//! - [`needs_expansion`] and [`expand`] turn generic rights and creator
//!   placeholders into concrete, non-propagating entries. They are the only
//!   place placeholders are resolved.
//! - Generic rights are mapped through the caller's
//!   [`MapGenericRights`](descriptor::MapGenericRights) implementation.
//! - [`InheritancePolicy`] and [`PolicyTable`] hold per-class options so callers
//!   can keep them in configuration (serialisable with the `serde` feature).
//! - With the `tracing` feature, each decision is reported on the targets
//!   exported by the `logging` crate.
//!
//! # Invariants
//!
//! - The output always has an owner and a group.
//! - Explicit entries precede inherited entries; neither group is reordered.
//! - No directly effective entry produced here names a creator placeholder.
//! - Each parent entry yields at most two child entries.
//! - A protected ACL receives nothing from the parent.
//!
//! # Errors
//!
//! The computation is total over its inputs. The only failure is running out of
//! memory while building an output ACL, reported as
//! [`InheritanceError::Allocation`]; no partial descriptor is returned.
//!
//! # Examples
//!
//! A container created under a parent that grants its creator full control:
//!
//! ```
//! use descriptor::{AccessMask, Ace, AceFlags, Acl, GenericMapping, SecurityDescriptor};
//! use descriptor::{SecurityToken, Sid, Trustee, well_known};
//! use inheritance::{InheritFlags, InheritanceRequest};
//!
//! let bob: Sid = "S-1-5-21-1-2-3-1104".parse()?;
//! let parent = SecurityDescriptor::new().with_dacl(Acl::from_aces(vec![
//!     Ace::allow(well_known::CREATOR_OWNER, AccessMask::GENERIC_ALL)
//!         .with_flags(AceFlags::CONTAINER_INHERIT),
//! ]));
//! let token = SecurityToken::new(bob);
//!
//! let sd = InheritanceRequest::new(&token, &GenericMapping::DIRECTORY)
//!     .with_parent(Some(&parent))
//!     .with_container(true)
//!     .with_flags(InheritFlags::AUTO_INHERIT)
//!     .assemble()?;
//!
//! let dacl = sd.dacl.expect("inherited");
//! assert_eq!(dacl.aces[0].trustee, Trustee::CreatorOwner);
//! assert!(dacl.aces[0].is_inherit_only());
//! assert_eq!(dacl.aces[1].trustee, Trustee::Sid(bob));
//! assert_eq!(dacl.aces[1].mask, GenericMapping::DIRECTORY.all);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod assemble;
mod concat;
mod context;
mod creator;
mod debug_inherit;
mod error;
mod expand;
mod policy;
mod propagate;
mod reparent;
mod request;

pub use assemble::assemble;
pub use concat::concat;
pub use context::{InheritTarget, ObjectTypes};
pub use creator::process_creator;
pub use error::InheritanceError;
pub use expand::{expand, needs_expansion};
pub use policy::{InheritancePolicy, InheritancePolicyBuilder, PolicyTable};
pub use propagate::propagate;
pub use reparent::reinherit;
pub use request::{InheritFlags, InheritanceRequest};

#[cfg(test)]
mod tests;
