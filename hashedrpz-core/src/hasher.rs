//! The [`Hasher`]: right-to-left label walk, cumulative keyed hashing, and the wildcard overlay.

use data_encoding::Encoding;

use crate::buffer::HashBuf;
use crate::digest::{base32hex_lower, digest_size_for, MAX_DIGEST_LEN};
use crate::error::HashedRpzError;

/// DNS's own ownername limit, per RFC 1035.
const DNS_OWNERNAME_LIMIT: usize = 255;

/// Bytes reserved for the largest possible label digest, plus slack for a `*.` wildcard prefix.
const DIGEST_RESERVE: usize = 16;

/// The dot joining the hashed left-hand-side to the origin.
const ORIGIN_SEPARATOR: usize = 1;

/// Derives hashed, per-label digests of a domain name's left-hand-side under a shared secret key.
///
/// A `Hasher` owns its key and its own BLAKE3 key-derivation state; it has no interior mutability
/// shared with any other `Hasher`, so distinct instances may be driven from distinct threads
/// without coordination (see the crate-level docs for why no global lock is needed here, unlike
/// the C edition this crate is modeled on).
pub struct Hasher {
    key: String,
    digest: blake3::Hasher,
    encoding: Encoding,
}

impl Hasher {
    /// Creates a new `Hasher` keyed with `key`.
    ///
    /// The key is retained for the lifetime of the `Hasher`, since every label hash re-derives the
    /// digest state from scratch via [`blake3::Hasher::new_derive_key`].
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let digest = blake3::Hasher::new_derive_key(&key);
        Self {
            key,
            digest,
            encoding: base32hex_lower(),
        }
    }

    /// Hashes `lhs` into `out`, invoking `callback` once per emitted label (right-to-left, i.e.
    /// TLD first).
    ///
    /// `origin` is used only to compute the DNS ownername budget left for the hashed labels;
    /// its bytes are never hashed. See the module docs for the full label-walk algorithm.
    pub fn hash(
        &mut self,
        lhs: &str,
        origin: &str,
        out: &mut HashBuf,
        mut callback: Option<&mut dyn FnMut(&str, &str)>,
    ) -> Result<(), HashedRpzError> {
        out.clear();

        if out.capacity() < 5 {
            return Err(HashedRpzError::InvalidInputs);
        }
        if origin.is_empty() || origin.starts_with('.') {
            return Err(HashedRpzError::InvalidOriginDomain);
        }

        let bytes = lhs.as_bytes();
        if bytes.is_empty() {
            return Err(HashedRpzError::EmptyLabel);
        }

        let max_domain_len = DNS_OWNERNAME_LIMIT
            .saturating_sub(DIGEST_RESERVE)
            .saturating_sub(ORIGIN_SEPARATOR)
            .saturating_sub(origin.len());

        // A single trailing dot (fully-qualified input) is tolerated and stripped; a second one
        // right behind it means an empty final sublabel.
        let mut input_end = bytes.len();
        if bytes[input_end - 1] == b'.' {
            input_end -= 1;
            if input_end == 0 {
                return Err(HashedRpzError::EmptyLabel);
            }
            if bytes[input_end - 1] == b'.' {
                return Err(HashedRpzError::EmptySubLabel);
            }
        }

        let mut i = input_end - 1;
        let mut lhs_start = i;
        let mut label_end = input_end;

        loop {
            let c = bytes[i];
            if c != b'.' {
                lhs_start = i;
            }

            if c == b'*' {
                if i != 0 || label_end != lhs_start + 1 {
                    return Err(HashedRpzError::WildcardNotAtStart);
                }

                out.prepend_wildcard()?;
                if let Some(cb) = callback.as_deref_mut() {
                    cb(&lhs[lhs_start..input_end], out.as_str());
                }
                return Ok(());
            }

            if c != b'.' && i != 0 {
                i -= 1;
                continue;
            }

            // Reached a label separator (or the start of the input): emit the label.
            if lhs_start >= label_end {
                return Err(HashedRpzError::EmptySubLabel);
            }

            let label_chars = label_end - lhs_start;
            let digest_size = digest_size_for(label_chars);
            let suffix = &lhs[lhs_start..input_end];

            let mut digest_bytes = [0u8; MAX_DIGEST_LEN];
            self.digest = blake3::Hasher::new_derive_key(&self.key);
            self.digest.update(suffix.as_bytes());
            self.digest
                .finalize_xof()
                .fill(&mut digest_bytes[..digest_size]);
            let encoded = self.encoding.encode(&digest_bytes[..digest_size]);

            out.prepend_label(&encoded)?;

            if out.len() >= max_domain_len {
                return Err(HashedRpzError::TooLong);
            }

            if let Some(cb) = callback.as_deref_mut() {
                cb(suffix, out.as_str());
            }

            label_end = lhs_start.checked_sub(1).unwrap_or(0);

            if i == 0 {
                break;
            }
            i -= 1;
        }

        Ok(())
    }

    /// Like [`Hasher::hash`], but converts a [`HashedRpzError::TooLong`] into a wildcard: whatever
    /// prefix fit is kept, prepended with a literal `*.` label covering the labels that didn't.
    ///
    /// Returns whether the wildcard overlay was applied. All other errors (and the `Ok` case) are
    /// passed through unchanged, with `is_wildcard = false`.
    pub fn hash_with_wildcard(
        &mut self,
        lhs: &str,
        origin: &str,
        out: &mut HashBuf,
        callback: Option<&mut dyn FnMut(&str, &str)>,
    ) -> Result<bool, HashedRpzError> {
        match self.hash(lhs, origin, out, callback) {
            Ok(()) => Ok(false),
            Err(HashedRpzError::TooLong) => {
                out.prepend_wildcard()?;
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    const ORIGIN: &str = "rpz.example.net";

    fn label() -> impl Strategy<Value = String> {
        "[a-z0-9]{1,10}"
    }

    fn domain() -> impl Strategy<Value = String> {
        prop::collection::vec(label(), 1..5).prop_map(|labels| labels.join("."))
    }

    proptest! {
        #[test]
        fn determinism(key in "[a-z0-9]{8,32}", lhs in domain()) {
            let mut buf_a = HashBuf::with_capacity(1024);
            let mut buf_b = HashBuf::with_capacity(1024);
            Hasher::new(key.clone()).hash(&lhs, ORIGIN, &mut buf_a, None).unwrap();
            Hasher::new(key).hash(&lhs, ORIGIN, &mut buf_b, None).unwrap();
            prop_assert_eq!(buf_a.as_str(), buf_b.as_str());
        }

        #[test]
        fn key_separation(
            key_a in "[a-z0-9]{8,32}",
            key_b in "[a-z0-9]{8,32}",
            lhs in domain(),
        ) {
            prop_assume!(key_a != key_b);
            let mut buf_a = HashBuf::with_capacity(1024);
            let mut buf_b = HashBuf::with_capacity(1024);
            Hasher::new(key_a).hash(&lhs, ORIGIN, &mut buf_a, None).unwrap();
            Hasher::new(key_b).hash(&lhs, ORIGIN, &mut buf_b, None).unwrap();
            prop_assert_ne!(buf_a.as_str(), buf_b.as_str());
        }

        #[test]
        fn cumulative_suffix_is_stable(
            key in "[a-z0-9]{8,32}",
            extra in label(),
            suffix in domain(),
        ) {
            let full = format!("{extra}.{suffix}");
            let mut buf_full = HashBuf::with_capacity(1024);
            let mut buf_suffix = HashBuf::with_capacity(1024);
            Hasher::new(key.clone()).hash(&full, ORIGIN, &mut buf_full, None).unwrap();
            Hasher::new(key).hash(&suffix, ORIGIN, &mut buf_suffix, None).unwrap();

            // The leading label hashes `extra`; everything after its dot must match the
            // suffix hashed on its own, since each label's digest only ever covers the
            // cumulative suffix of the original input.
            let (_leading, rest) = buf_full
                .as_str()
                .split_once('.')
                .expect("full has at least two labels");
            prop_assert_eq!(rest, buf_suffix.as_str());
        }

        #[test]
        fn length_bound_holds_on_success(key in "[a-z0-9]{8,32}", lhs in domain()) {
            let mut buf = HashBuf::with_capacity(255);
            let mut hasher = Hasher::new(key);
            if hasher.hash(&lhs, ORIGIN, &mut buf, None).is_ok() {
                prop_assert!(buf.len() <= buf.capacity() - 1);
                prop_assert!(buf.len() + 1 + ORIGIN.len() <= 255);
            }
        }

        #[test]
        fn callback_count_matches_label_count(key in "[a-z0-9]{8,32}", lhs in domain()) {
            let expected = lhs.split('.').count();
            let mut buf = HashBuf::with_capacity(1024);
            let mut hasher = Hasher::new(key);
            let mut count = 0;
            let mut cb = |_s: &str, _h: &str| count += 1;
            hasher.hash(&lhs, ORIGIN, &mut buf, Some(&mut cb)).unwrap();
            prop_assert_eq!(count, expected);
        }

        #[test]
        fn wildcard_overlay_matches_plain_hash_when_it_fits(key in "[a-z0-9]{8,32}", lhs in domain()) {
            let mut buf_plain = HashBuf::with_capacity(1024);
            let mut buf_wild = HashBuf::with_capacity(1024);
            Hasher::new(key.clone()).hash(&lhs, ORIGIN, &mut buf_plain, None).unwrap();
            let is_wildcard = Hasher::new(key)
                .hash_with_wildcard(&lhs, ORIGIN, &mut buf_wild, None)
                .unwrap();
            prop_assert!(!is_wildcard);
            prop_assert_eq!(buf_plain.as_str(), buf_wild.as_str());
        }
    }
}
