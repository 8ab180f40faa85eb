//! Balanced binary Merkle tree with audit proofs.
//!
//! - [`Node`]: the recursive tree, leaf or internal, each with a cached digest
//! - [`tree`]: construction by balanced partition, plus the [`MerkleTree`] wrapper
//! - [`proof`]: audit proof generation and the standalone verifier
//! - [`check`]: recomputation of every cached digest
//!
//! A tree is immutable once built. Producing a different tree means building
//! a new one from the full element list.

pub mod check;
pub mod node;
pub mod proof;
pub mod tree;

pub use node::Node;
pub use proof::{verify, AuditProof, ProofNode, Side};
pub use tree::MerkleTree;
