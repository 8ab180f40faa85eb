//! Tree construction.
//!
//! Elements are split recursively: a slice of `n > 2` elements puts the first
//! `n / 2` in the left subtree and the remaining `n - n / 2` in the right one.
//! One and two elements are the two terminal cases. Depth of the resulting tree
//! is `ceil(log2(n)) + 1`.

use log::debug;

use super::node::Node;
use super::proof::{self, AuditProof};
use crate::config::Config;
use crate::error::TreeError;
use crate::utils::hasher::{self, Digest, HashAlgorithm, Hashable};

impl<T: Hashable> Node<T> {
    /// Builds a tree whose leaves are `elements`, in order.
    ///
    /// `algorithm` is used for every leaf and every internal node.
    pub fn build(elements: Vec<T>, algorithm: HashAlgorithm) -> Result<Self, TreeError> {
        if elements.is_empty() {
            return Err(TreeError::EmptyInput);
        }
        let count = elements.len();
        let node = Self::build_nonempty(elements, algorithm);
        debug!(
            "built merkle tree: elements={} depth={} algorithm={} root={}",
            count,
            node.depth(),
            algorithm,
            node.hash()
        );
        Ok(node)
    }

    fn build_nonempty(mut elements: Vec<T>, algorithm: HashAlgorithm) -> Self {
        debug_assert!(!elements.is_empty());
        match elements.len() {
            1 => {
                let value = elements.swap_remove(0);
                Self::leaf(value, algorithm)
            }
            2 => {
                let r = elements.swap_remove(1);
                let l = elements.swap_remove(0);
                let lh = l.digest(algorithm);
                let rh = r.digest(algorithm);
                let h = hasher::hash2(algorithm, &lh, &rh);
                Node::Internal {
                    left: Box::new(Node::Leaf { value: l, hash: lh }),
                    right: Box::new(Node::Leaf { value: r, hash: rh }),
                    hash: h,
                }
            }
            count => {
                let right = elements.split_off(count / 2);
                let l = Self::build_nonempty(elements, algorithm);
                let r = Self::build_nonempty(right, algorithm);
                Self::internal(l, r, algorithm)
            }
        }
    }

    fn leaf(value: T, algorithm: HashAlgorithm) -> Self {
        let hash = value.digest(algorithm);
        Node::Leaf { value, hash }
    }

    fn internal(left: Node<T>, right: Node<T>, algorithm: HashAlgorithm) -> Self {
        let hash = hasher::hash2(algorithm, left.hash(), right.hash());
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            hash,
        }
    }
}

/// A built tree together with the algorithm it was built with.
///
/// Convenience layer over [`Node`]: proofs produced here can be checked with
/// [`proof::verify`] by anyone holding the root digest and the algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree<T> {
    root: Node<T>,
    algorithm: HashAlgorithm,
}

impl<T: Hashable> MerkleTree<T> {
    pub fn new(elements: Vec<T>, config: &Config) -> Result<Self, TreeError> {
        Self::with_algorithm(elements, config.algorithm)
    }

    pub fn with_algorithm(elements: Vec<T>, algorithm: HashAlgorithm) -> Result<Self, TreeError> {
        Ok(Self {
            root: Node::build(elements, algorithm)?,
            algorithm,
        })
    }

    /// Audit proof for `value`, hashed with this tree's algorithm.
    pub fn proof_of(&self, value: &T) -> Option<AuditProof> {
        self.root.audit_proof(&value.digest(self.algorithm))
    }
}

impl<T> MerkleTree<T> {
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn into_root(self) -> Node<T> {
        self.root
    }

    pub fn root_hash(&self) -> &Digest {
        self.root.hash()
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn leaves(&self) -> Vec<&T> {
        self.root.leaves()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn audit_proof(&self, leaf_hash: &Digest) -> Option<AuditProof> {
        self.root.audit_proof(leaf_hash)
    }

    /// Checks `proof` for `leaf_hash` against this tree's root.
    pub fn verify(&self, leaf_hash: &Digest, proof: &AuditProof) -> bool {
        proof::verify(leaf_hash, self.root_hash(), proof.nodes(), self.algorithm)
    }
}

impl<T: PartialEq> MerkleTree<T> {
    pub fn find(&self, target: &T) -> bool {
        self.root.find(target)
    }
}
