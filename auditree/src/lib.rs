//! auditree builds a binary Merkle tree over an ordered list of elements and
//! produces audit proofs that one element belongs to it.
//!
//! # Overview
//! - [`Node`]: the immutable tree. Each leaf caches the digest of its value,
//!   each internal node the digest of its children's digests concatenated
//! - [`MerkleTree`]: a tree plus the [`HashAlgorithm`] it was built with
//! - [`AuditProof`]: sibling digests, tagged with their [`Side`], from a leaf to the root
//! - [`verify`]: recomputes a root from a leaf digest and a proof, with no tree at hand
//!
//! # Example Usage
//! ```
//! use auditree::{config::Config, utils::hasher::{hash, HashAlgorithm}, verify, MerkleTree};
//!
//! let tree = MerkleTree::new(vec!["a", "b", "c", "d", "e", "f", "g"], &Config::default()).unwrap();
//! assert_eq!(tree.depth(), 4);
//!
//! let leaf = hash(HashAlgorithm::Sha512, "d");
//! let proof = tree.audit_proof(&leaf).unwrap();
//! assert_eq!(proof.len(), 3);
//!
//! // anyone holding the root can check the proof
//! let root = tree.root_hash().clone();
//! assert!(verify(&leaf, &root, proof.nodes(), HashAlgorithm::Sha512));
//! ```
//!
//! # Thread Safety
//! Trees are never mutated after construction, so `Node<T>` is `Send + Sync`
//! whenever `T` is and needs no locking.

pub mod config;
pub mod def;
pub mod error;
pub mod merkletree;
pub mod utils;

pub use error::{CheckError, HasherError, ProofError, TreeError};
pub use merkletree::{verify, AuditProof, MerkleTree, Node, ProofNode, Side};
pub use utils::hasher::{Digest, HashAlgorithm, Hashable};
