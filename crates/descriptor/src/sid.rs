//! crates/descriptor/src/sid.rs
//!
//! Security identifiers.
//!
//! A SID names a concrete principal: a revision byte, a 48-bit identifier
//! authority and up to fifteen 32-bit sub-authorities. The textual form is
//! `S-<revision>-<authority>-<sub>-<sub>...`, with authorities of 2^32 and
//! above written in `0x` hexadecimal.
//!
//! Sub-authorities are stored inline so a [`Sid`] is `Copy` and can be built
//! in `const` context for well-known identities.

use std::fmt;
use std::str::FromStr;

use crate::ParseSidError;

/// Maximum number of sub-authorities a SID may carry.
pub const MAX_SUB_AUTHORITIES: usize = 15;

/// A concrete security identifier.
///
/// Unused sub-authority slots are always zero, so derived equality, ordering
/// and hashing only depend on the meaningful components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sid {
    revision: u8,
    authority: u64,
    count: u8,
    sub_authorities: [u32; MAX_SUB_AUTHORITIES],
}

impl Sid {
    /// The only SID revision in use.
    pub const REVISION: u8 = 1;
    /// Largest identifier authority representable in the 6-byte field.
    pub const MAX_AUTHORITY: u64 = (1 << 48) - 1;

    /// Builds a SID from constant parts.
    ///
    /// Intended for well-known identities; evaluation fails at compile time
    /// when more than [`MAX_SUB_AUTHORITIES`] are given or the authority does
    /// not fit in 48 bits.
    ///
    /// ```
    /// use descriptor::Sid;
    ///
    /// const ADMINS: Sid = Sid::well_known(5, [32, 544]);
    /// assert_eq!(ADMINS.to_string(), "S-1-5-32-544");
    /// ```
    #[must_use]
    pub const fn well_known<const N: usize>(authority: u64, subs: [u32; N]) -> Self {
        assert!(N <= MAX_SUB_AUTHORITIES, "too many SID sub-authorities");
        assert!(authority <= Self::MAX_AUTHORITY, "SID authority exceeds 48 bits");

        let mut sub_authorities = [0u32; MAX_SUB_AUTHORITIES];
        let mut index = 0;
        while index < N {
            sub_authorities[index] = subs[index];
            index += 1;
        }

        Self {
            revision: Self::REVISION,
            authority,
            count: N as u8,
            sub_authorities,
        }
    }

    /// Builds a SID from an authority and a runtime list of sub-authorities.
    pub fn new(authority: u64, subs: &[u32]) -> Result<Self, ParseSidError> {
        if authority > Self::MAX_AUTHORITY {
            return Err(ParseSidError::AuthorityOutOfRange(authority));
        }
        if subs.len() > MAX_SUB_AUTHORITIES {
            return Err(ParseSidError::TooManySubAuthorities(subs.len()));
        }

        let mut sub_authorities = [0u32; MAX_SUB_AUTHORITIES];
        sub_authorities[..subs.len()].copy_from_slice(subs);

        Ok(Self {
            revision: Self::REVISION,
            authority,
            count: subs.len() as u8,
            sub_authorities,
        })
    }

    /// Returns the SID revision.
    #[must_use]
    pub const fn revision(&self) -> u8 {
        self.revision
    }

    /// Returns the 48-bit identifier authority.
    #[must_use]
    pub const fn identifier_authority(&self) -> u64 {
        self.authority
    }

    /// Returns `true` for `S-1-3-0`, the creator-owner placeholder.
    #[must_use]
    pub const fn is_creator_owner(&self) -> bool {
        self.is_creator_rid(0)
    }

    /// Returns `true` for `S-1-3-1`, the creator-group placeholder.
    #[must_use]
    pub const fn is_creator_group(&self) -> bool {
        self.is_creator_rid(1)
    }

    /// Returns `true` for either creator placeholder. Such a SID never names
    /// a real principal.
    #[must_use]
    pub const fn is_creator_placeholder(&self) -> bool {
        self.is_creator_owner() || self.is_creator_group()
    }

    const fn is_creator_rid(&self, rid: u32) -> bool {
        self.authority == 3 && self.count == 1 && self.sub_authorities[0] == rid
    }

    /// Returns the sub-authorities in order.
    #[must_use]
    pub fn sub_authorities(&self) -> &[u32] {
        &self.sub_authorities[..usize::from(self.count)]
    }

    /// Returns the relative identifier (the last sub-authority), if any.
    #[must_use]
    pub fn rid(&self) -> Option<u32> {
        self.sub_authorities().last().copied()
    }

    /// Appends a relative identifier, turning a domain SID into an account SID.
    ///
    /// ```
    /// use descriptor::Sid;
    ///
    /// let domain: Sid = "S-1-5-21-1-2-3".parse().unwrap();
    /// let bob = domain.with_rid(1104).unwrap();
    /// assert_eq!(bob.to_string(), "S-1-5-21-1-2-3-1104");
    /// ```
    pub fn with_rid(&self, rid: u32) -> Result<Self, ParseSidError> {
        let count = usize::from(self.count);
        if count == MAX_SUB_AUTHORITIES {
            return Err(ParseSidError::TooManySubAuthorities(count + 1));
        }
        let mut sid = *self;
        sid.sub_authorities[count] = rid;
        sid.count += 1;
        Ok(sid)
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}-", self.revision)?;
        if self.authority >> 32 == 0 {
            write!(f, "{}", self.authority)?;
        } else {
            write!(f, "0x{:012X}", self.authority)?;
        }
        for sub in self.sub_authorities() {
            write!(f, "-{sub}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sid({self})")
    }
}

impl FromStr for Sid {
    type Err = ParseSidError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rest = input
            .strip_prefix("S-")
            .or_else(|| input.strip_prefix("s-"))
            .ok_or_else(|| ParseSidError::MissingPrefix {
                input: input.to_owned(),
            })?;

        let invalid = |component: &str| ParseSidError::InvalidComponent {
            input: input.to_owned(),
            component: component.to_owned(),
        };

        let mut components = rest.split('-');

        let revision_text = components.next().unwrap_or_default();
        let revision: u8 = revision_text.parse().map_err(|_| invalid(revision_text))?;
        if revision != Self::REVISION {
            return Err(ParseSidError::UnsupportedRevision(revision));
        }

        let authority_text = components.next().ok_or_else(|| invalid(""))?;
        let authority = match authority_text
            .strip_prefix("0x")
            .or_else(|| authority_text.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => authority_text.parse(),
        }
        .map_err(|_| invalid(authority_text))?;

        let mut subs = [0u32; MAX_SUB_AUTHORITIES];
        let mut count = 0;
        for component in components {
            if count == MAX_SUB_AUTHORITIES {
                return Err(ParseSidError::TooManySubAuthorities(count + 1));
            }
            subs[count] = component.parse().map_err(|_| invalid(component))?;
            count += 1;
        }

        Self::new(authority, &subs[..count])
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
