//! Per-label digest sizing and base32-hex-lowercase encoding.

use data_encoding::{Encoding, Specification};

/// Largest digest BLAKE3 is ever asked to produce for a single label.
pub(crate) const MAX_DIGEST_LEN: usize = 16;

/// Selects the digest size for a label of the given character length.
///
/// Shorter labels carry less entropy to preserve, so a short digest suffices; longer labels get
/// more collision resistance. Output length therefore only leaks a coarse length bucket, not the
/// exact input length.
pub(crate) fn digest_size_for(label_chars: usize) -> usize {
    if label_chars < 4 {
        4
    } else if label_chars < 8 {
        8
    } else {
        MAX_DIGEST_LEN
    }
}

/// Builds the RFC 4648 §7 base32-hex alphabet, lowercased and unpadded.
///
/// `data_encoding` already ships an uppercase `BASE32HEX`; HashedRPZ wants it lowercased and
/// without `=` padding (digests are always hashed and re-derived at a known byte length, so
/// padding carries no information).
pub(crate) fn base32hex_lower() -> Encoding {
    let mut spec = Specification::new();
    spec.symbols.push_str("0123456789abcdefghijklmnopqrstuv");
    spec.encoding().expect("base32hex-lower spec is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_size_thresholds() {
        assert_eq!(digest_size_for(0), 4);
        assert_eq!(digest_size_for(3), 4);
        assert_eq!(digest_size_for(4), 8);
        assert_eq!(digest_size_for(7), 8);
        assert_eq!(digest_size_for(8), 16);
        assert_eq!(digest_size_for(64), 16);
    }

    #[test]
    fn encoding_is_lowercase_unpadded() {
        let enc = base32hex_lower();
        let encoded = enc.encode(&[0xff, 0x00, 0xaa, 0x55]);
        assert!(encoded.chars().all(|c| !c.is_ascii_uppercase() && c != '='));
    }
}
