//! The caller-owned output buffer that [`crate::Hasher`] writes hashed names into.

use crate::error::HashedRpzError;

/// A fixed-capacity accumulator for a hashed left-hand-side.
///
/// This plays the role of the `final`/`finallen` out-parameter pair from the original C edition:
/// the caller picks a capacity up front, and every label written into the buffer is checked
/// against it. Internally labels are prepended (new labels are closer to the input's TLD, which
/// ends up rightmost in the published name), mirroring the `memmove`-based shift-and-prepend in
/// `hashedrpz.c` but via `Vec::splice` rather than raw pointer arithmetic.
#[derive(Debug, Clone)]
pub struct HashBuf {
    bytes: Vec<u8>,
    capacity: usize,
}

impl HashBuf {
    /// Creates an empty buffer with the given capacity (the original C edition's `finallen`).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The buffer's contents as a string; always valid ASCII/UTF-8 since only base32-hex-lowercase
    /// output, dots, and `*` are ever written into it.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes).expect("HashBuf only ever holds ASCII")
    }

    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Prepends an encoded label, adding a separating dot if the buffer is already non-empty.
    ///
    /// Reserves one byte of slack beyond what's actually written, whether or not a dot is needed
    /// this call, so that `len() <= capacity() - 1` holds after every successful write (the spot
    /// a C caller would keep the NUL terminator in).
    ///
    /// Returns [`HashedRpzError::TooLong`] without modifying the buffer if there isn't room.
    pub(crate) fn prepend_label(&mut self, encoded: &str) -> Result<(), HashedRpzError> {
        if self.bytes.len() + encoded.len() + 1 > self.capacity {
            return Err(HashedRpzError::TooLong);
        }

        if self.bytes.is_empty() {
            self.bytes.extend_from_slice(encoded.as_bytes());
        } else {
            let mut prefix = Vec::with_capacity(encoded.len() + 1);
            prefix.extend_from_slice(encoded.as_bytes());
            prefix.push(b'.');
            self.bytes.splice(0..0, prefix);
        }

        Ok(())
    }

    /// Prepends the literal wildcard label `*.`, used only by the wildcard overlay paths.
    ///
    /// Reserves the same one byte of slack as [`Self::prepend_label`].
    ///
    /// Returns [`HashedRpzError::TooLong`] without modifying the buffer if there isn't room.
    pub(crate) fn prepend_wildcard(&mut self) -> Result<(), HashedRpzError> {
        if self.bytes.len() + 2 + 1 > self.capacity {
            return Err(HashedRpzError::TooLong);
        }
        self.bytes.splice(0..0, [b'*', b'.']);
        Ok(())
    }
}
