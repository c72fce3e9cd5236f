//! Keyed label-hashing for publishing DNS Response Policy Zones without leaking plaintext names.
//!
//! RPZ blocklists are ordinary DNS zones: their owner names are the very domains being policed.
//! Publishing one to a third party (a resolver vendor, a shared feed) leaks every name on the
//! list. `hashedrpz-core` derives, label by label, a hashed left-hand-side that preserves RPZ's
//! zone-walking semantics (a query for `www.evil.example` still matches a blocked
//! `evil.example`) without ever putting the plaintext name on the wire.
//!
//! The core primitive is [`Hasher`]: construct one with a shared secret key, then call
//! [`Hasher::hash`] or [`Hasher::hash_with_wildcard`] for each left-hand-side, writing into a
//! caller-owned [`HashBuf`].
//!
//! ```
//! use hashedrpz_core::{HashBuf, Hasher};
//!
//! let mut hasher = Hasher::new(
//!     "teststring: 0KjULoiv d2VFuNPc RVabpOq3 eN6bmK0Z 2gwjCgDf fU2HVN5A 1Bz08wW4 Uy0JTMX0",
//! );
//! let mut out = HashBuf::with_capacity(255);
//! hasher.hash("www.example.com", "rpz.example.net", &mut out, None).unwrap();
//! assert_eq!(out.as_str(), "qtr7pq8.slhf50h8dgst0.8r4m02g");
//! ```

mod buffer;
mod digest;
mod error;
mod hasher;

pub use buffer::HashBuf;
pub use error::{errstr, HashedRpzError, HashedRpzErrorCode};
pub use hasher::Hasher;
