//! Error types shared by the tree, proof and hashing layers.

use crate::utils::hasher::Digest;

/// Failure while constructing a tree.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("TreeError: cannot build a Merkle tree from zero elements")]
    EmptyInput,
}

/// Failure while encoding, decoding or checking an audit proof.
#[derive(thiserror::Error, Debug)]
pub enum ProofError {
    #[error("ProofError: bincode: {0}")]
    Codec(#[from] bincode::Error),

    #[error("ProofError: root mismatch, expected {expected} computed {computed}")]
    RootMismatch { expected: Digest, computed: Digest },
}

/// Failure while parsing hashing parameters supplied as text.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HasherError {
    #[error("HasherError: unknown hash algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error("HasherError: invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("HasherError: digest length {actual} out of range 1..={max}")]
    InvalidLength { actual: usize, max: usize },
}

/// A node whose cached digest does not match its content.
/// `pos` is the node's index in a depth-first pre-order walk from the root.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CheckError {
    #[error("CheckError: leaf #{pos} stores {stored}, value hashes to {computed}")]
    LeafMismatch {
        pos: usize,
        stored: Digest,
        computed: Digest,
    },

    #[error("CheckError: internal node #{pos} stores {stored}, children hash to {computed}")]
    InternalMismatch {
        pos: usize,
        stored: Digest,
        computed: Digest,
    },
}
