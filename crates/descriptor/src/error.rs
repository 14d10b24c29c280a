use thiserror::Error;

/// Error produced when a SID cannot be constructed or parsed from text.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseSidError {
    /// The text does not start with the `S-` prefix.
    #[error("SID '{input}' does not start with 'S-'")]
    MissingPrefix {
        /// The rejected input.
        input: String,
    },
    /// A dash-separated component is empty or not a number.
    #[error("SID '{input}' has an invalid component '{component}'")]
    InvalidComponent {
        /// The rejected input.
        input: String,
        /// The component that failed to parse.
        component: String,
    },
    /// Only revision 1 SIDs exist.
    #[error("unsupported SID revision {0}")]
    UnsupportedRevision(u8),
    /// The identifier authority does not fit in 48 bits.
    #[error("SID identifier authority {0:#x} exceeds 48 bits")]
    AuthorityOutOfRange(u64),
    /// More than fifteen sub-authorities were supplied. Parsing stops at the
    /// first excess component, so the count is a lower bound.
    #[error("SID has at least {0} sub-authorities; at most 15 are allowed")]
    TooManySubAuthorities(usize),
}
