//! Password digest helpers.
//!
//! Passwords are stored as the lowercase hex encoding of a single, unsalted SHA-256 digest, and
//! login compares digests for equality. The lack of a per-user salt is a known weakness that is
//! kept for compatibility with the existing user table; everything that touches the digest goes
//! through this module so that a salted KDF can be swapped in with a single change (plus a data
//! migration).

use sha2::{Digest, Sha256};

/// Returns the lowercase hex encoding of the SHA-256 digest of `password`.
pub fn sha256_hex(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}
