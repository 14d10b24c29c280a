use std::collections::TryReserveError;

use thiserror::Error;

/// Error produced while computing an inherited security descriptor.
///
/// Every branch of the inheritance algorithm is total over well-formed input;
/// the only failure is running out of memory while growing an output ACL.
/// No partially built descriptor is ever returned.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InheritanceError {
    /// Reserving space for output entries failed.
    #[error("out of memory while building the {context}")]
    Allocation {
        /// Which output was being built.
        context: &'static str,
        /// The allocator's report.
        #[source]
        source: TryReserveError,
    },
}

/// Reserves room for `additional` more elements, reporting failure instead of
/// aborting.
pub(crate) fn reserve<T>(
    items: &mut Vec<T>,
    additional: usize,
    context: &'static str,
) -> Result<(), InheritanceError> {
    items
        .try_reserve(additional)
        .map_err(|source| InheritanceError::Allocation { context, source })
}
