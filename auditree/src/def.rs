//! Core definitions and constants for auditree.
//!
//! The constants here fix the defaults shared by the hasher, the tree builder
//! and the configuration layer.

use crate::utils::hasher::HashAlgorithm;

/// Hash algorithm used when none is configured explicitly.
pub const DEFAULT_HASH_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha512;

/// Largest digest produced by any supported algorithm (SHA-512, BLAKE2b-512).
/// Digests up to this size are stored inline without a heap allocation.
pub const MAX_DIGEST_LEN: usize = 64;
