//! Error taxonomy for the HashedRPZ hashing pipeline.

use thiserror::Error;

/// Errors that [`crate::Hasher::hash`] and [`crate::Hasher::hash_with_wildcard`] may return.
///
/// The numbering mirrors the original C edition's `enum HRPZ_ERR` (see
/// [`HashedRpzErrorCode`]), so operators diagnosing a batch of failures from a log can match a
/// code back to this list without needing the Rust source at hand.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HashedRpzError {
    /// The output buffer is missing or its capacity is below the minimum of 5 bytes (a TLD needs
    /// at least one hashed label).
    #[error("Invalid Inputs provided")]
    InvalidInputs,

    /// The origin domain is empty, the DNS root, or starts with a dot.
    #[error("Invalid Origin Domain (empty/root/leading-dot)")]
    InvalidOriginDomain,

    /// The left-hand-side to hash is empty (hashing the DNS root would block everything).
    #[error("Empty Label provided (RPZ the root?)")]
    EmptyLabel,

    /// A `*` appeared somewhere other than alone in the leftmost label.
    #[error("Wildcard (*) not at start of left hand side")]
    WildcardNotAtStart,

    /// The hashed name would exceed the 255-byte ownername budget left by the origin.
    #[error("Domain too long to hash")]
    TooLong,

    /// The input contains an empty sublabel, e.g. `dom..example.com`.
    #[error("Empty Sub Label (eg. dom..example.com)")]
    EmptySubLabel,
}

impl HashedRpzError {
    /// Returns this error's stable numeric code, as used by [`errstr`].
    pub fn code(self) -> HashedRpzErrorCode {
        match self {
            HashedRpzError::InvalidInputs => HashedRpzErrorCode::InvalidInputs,
            HashedRpzError::InvalidOriginDomain => HashedRpzErrorCode::InvalidOriginDomain,
            HashedRpzError::EmptyLabel => HashedRpzErrorCode::EmptyLabel,
            HashedRpzError::WildcardNotAtStart => HashedRpzErrorCode::WildcardNotAtStart,
            HashedRpzError::TooLong => HashedRpzErrorCode::TooLong,
            HashedRpzError::EmptySubLabel => HashedRpzErrorCode::EmptySubLabel,
        }
    }
}

/// The stable numeric error codes for HashedRPZ hashing failures.
///
/// Kept as a standalone enum (rather than folded into [`HashedRpzError`]) so that [`errstr`] can
/// accept a raw code the way the original `hrpz_errstr(hrpz_err_t)` does, including values that
/// don't correspond to any known error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum HashedRpzErrorCode {
    None = 0,
    InvalidInputs = 1,
    InvalidOriginDomain = 2,
    EmptyLabel = 3,
    WildcardNotAtStart = 4,
    TooLong = 5,
    EmptySubLabel = 6,
}

impl HashedRpzErrorCode {
    fn from_u32(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::InvalidInputs),
            2 => Some(Self::InvalidOriginDomain),
            3 => Some(Self::EmptyLabel),
            4 => Some(Self::WildcardNotAtStart),
            5 => Some(Self::TooLong),
            6 => Some(Self::EmptySubLabel),
            _ => None,
        }
    }
}

/// Returns a human-readable English string for a given HashedRPZ error code.
///
/// Unknown codes (including any value outside the six defined variants) return `"Unknown Error"`,
/// matching the original `hrpz_errstr()`'s behavior for out-of-range input.
pub fn errstr(code: u32) -> &'static str {
    match HashedRpzErrorCode::from_u32(code) {
        Some(HashedRpzErrorCode::None) => "No Error",
        Some(HashedRpzErrorCode::InvalidInputs) => "Invalid Inputs provided",
        Some(HashedRpzErrorCode::InvalidOriginDomain) => {
            "Invalid Origin Domain (empty/root/leading-dot)"
        }
        Some(HashedRpzErrorCode::EmptyLabel) => "Empty Label provided (RPZ the root?)",
        Some(HashedRpzErrorCode::WildcardNotAtStart) => {
            "Wildcard (*) not at start of left hand side"
        }
        Some(HashedRpzErrorCode::TooLong) => "Domain too long to hash",
        Some(HashedRpzErrorCode::EmptySubLabel) => "Empty Sub Label (eg. dom..example.com)",
        None => "Unknown Error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errstr_matches_display() {
        assert_eq!(errstr(1), HashedRpzError::InvalidInputs.to_string());
        assert_eq!(errstr(6), HashedRpzError::EmptySubLabel.to_string());
    }

    #[test]
    fn errstr_unknown_code() {
        assert_eq!(errstr(99), "Unknown Error");
    }

    #[test]
    fn code_roundtrips() {
        assert_eq!(
            HashedRpzErrorCode::from_u32(HashedRpzError::TooLong.code() as u32),
            Some(HashedRpzErrorCode::TooLong)
        );
    }
}
