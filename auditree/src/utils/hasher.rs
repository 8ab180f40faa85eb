//! Hashing utilities for auditree.
//!
//! This module is the only place that touches a concrete hash function. It provides:
//! - [`HashAlgorithm`]: the set of supported algorithms
//! - [`Digest`]: an opaque, fixed-length hash value
//! - [`hash`], [`hash2`], [`hash2x`]: hashing of single values and of node pairs
//! - [`Hashable`]: the byte serialization a leaf value is hashed from
//!
//! Pairs are always combined by concatenating the raw digest bytes, never their
//! hex text.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use blake2::{Blake2b512, Blake2s256};
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha512};
use smallvec::SmallVec;
use strum::{Display, EnumIter, EnumString};

use crate::def::MAX_DIGEST_LEN;
use crate::error::HasherError;

/// Supported hash algorithms.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha256,
    #[default]
    Sha512,
    Blake2b512,
    Blake2s256,
}

impl HashAlgorithm {
    /// Parses an algorithm name such as `"sha512"` or `"blake2s256"`.
    pub fn from_name(name: &str) -> Result<Self, HasherError> {
        name.parse()
            .map_err(|_| HasherError::UnknownAlgorithm(name.to_owned()))
    }

    /// Length in bytes of the digests this algorithm produces.
    pub fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 | HashAlgorithm::Blake2s256 => 32,
            HashAlgorithm::Sha512 | HashAlgorithm::Blake2b512 => 64,
        }
    }
}

/// A hash value. Comparable, concatenable and opaque to the tree logic.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest(SmallVec<[u8; MAX_DIGEST_LEN]>);

impl Digest {
    pub fn from_slice(bz: &[u8]) -> Self {
        Digest(SmallVec::from_slice(bz))
    }

    /// Parses a hex-encoded digest of at most [`MAX_DIGEST_LEN`] bytes.
    pub fn from_hex<T: AsRef<[u8]>>(s: T) -> Result<Self, HasherError> {
        let bz = hex::decode(s)?;
        if bz.is_empty() || bz.len() > MAX_DIGEST_LEN {
            return Err(HasherError::InvalidLength {
                actual: bz.len(),
                max: MAX_DIGEST_LEN,
            });
        }
        Ok(Digest::from_slice(&bz))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

fn finalize_parts<D: sha2::Digest>(parts: &[&[u8]]) -> Digest {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    Digest::from_slice(&hasher.finalize())
}

fn hash_parts(algorithm: HashAlgorithm, parts: &[&[u8]]) -> Digest {
    match algorithm {
        HashAlgorithm::Sha256 => finalize_parts::<Sha256>(parts),
        HashAlgorithm::Sha512 => finalize_parts::<Sha512>(parts),
        HashAlgorithm::Blake2b512 => finalize_parts::<Blake2b512>(parts),
        HashAlgorithm::Blake2s256 => finalize_parts::<Blake2s256>(parts),
    }
}

/// Computes the digest of a single value.
///
/// # Arguments
/// * `algorithm` - Hash algorithm to apply
/// * `a` - Value to hash
///
/// # Returns
/// The digest of the input, `algorithm.output_len()` bytes long
pub fn hash<T: AsRef<[u8]>>(algorithm: HashAlgorithm, a: T) -> Digest {
    hash_parts(algorithm, &[a.as_ref()])
}

/// Computes the digest of `a || b`.
///
/// This is how an internal node combines its children: left bytes first,
/// then right bytes.
///
/// # Arguments
/// * `algorithm` - Hash algorithm to apply
/// * `a` - First value, hashed first
/// * `b` - Second value, appended after `a`
///
/// # Returns
/// The digest of both values concatenated
pub fn hash2<T: AsRef<[u8]>>(algorithm: HashAlgorithm, a: T, b: T) -> Digest {
    hash_parts(algorithm, &[a.as_ref(), b.as_ref()])
}

/// Computes the digest of two values with optional order swapping.
///
/// Similar to [`hash2`], but the order of the inputs is swapped when
/// `exchange_ab` is set. Proof verification uses this to place a sibling
/// on its recorded side.
///
/// # Arguments
/// * `algorithm` - Hash algorithm to apply
/// * `a` - First value to hash
/// * `b` - Second value to hash
/// * `exchange_ab` - Whether to swap the order of a and b
///
/// # Returns
/// The digest of `b || a` if `exchange_ab` is set, otherwise of `a || b`
pub fn hash2x<T: AsRef<[u8]>>(algorithm: HashAlgorithm, a: T, b: T, exchange_ab: bool) -> Digest {
    if exchange_ab {
        hash2(algorithm, b, a)
    } else {
        hash2(algorithm, a, b)
    }
}

/// A value that can be placed in a tree leaf.
///
/// `hash_bytes` must be deterministic: equal values must always yield equal bytes.
pub trait Hashable {
    fn hash_bytes(&self) -> Cow<'_, [u8]>;

    fn digest(&self, algorithm: HashAlgorithm) -> Digest {
        hash(algorithm, self.hash_bytes())
    }
}

impl Hashable for str {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Hashable for String {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Hashable for [u8] {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Hashable for Vec<u8> {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<const N: usize> Hashable for [u8; N] {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl Hashable for Digest {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

macro_rules! impl_hashable_for_uint {
    ($($t:ty),*) => {
        $(
            impl Hashable for $t {
                fn hash_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_le_bytes().to_vec())
                }
            }
        )*
    };
}

impl_hashable_for_uint!(u8, u16, u32, u64, u128, usize);

impl<T: Hashable + ?Sized> Hashable for &T {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        (**self).hash_bytes()
    }
}

impl<T: Hashable + ?Sized> Hashable for Box<T> {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        (**self).hash_bytes()
    }
}

impl<T: Hashable + ?Sized> Hashable for Arc<T> {
    fn hash_bytes(&self) -> Cow<'_, [u8]> {
        (**self).hash_bytes()
    }
}
