//! Verification utilities for Merkle tree consistency checking.
//!
//! The checks recompute every cached digest from scratch:
//! 1. Each leaf digest matches the digest of its value
//! 2. Each internal digest matches the digest of its children's digests
//!
//! Nodes are numbered in depth-first pre-order, the root being #0.

use log::debug;

use super::node::Node;
use crate::error::CheckError;
use crate::utils::hasher::{self, HashAlgorithm, Hashable};

/// Recomputes all digests of `node` under `algorithm` and reports the first
/// node whose cached digest differs.
pub fn check_hash_consistency<T: Hashable>(
    node: &Node<T>,
    algorithm: HashAlgorithm,
) -> Result<(), CheckError> {
    let mut pos = 0;
    check_node(node, algorithm, &mut pos)
}

fn check_node<T: Hashable>(
    node: &Node<T>,
    algorithm: HashAlgorithm,
    pos: &mut usize,
) -> Result<(), CheckError> {
    let here = *pos;
    *pos += 1;
    match node {
        Node::Leaf { value, hash } => {
            let computed = value.digest(algorithm);
            if &computed != hash {
                debug!("leaf #{} hash mismatch", here);
                return Err(CheckError::LeafMismatch {
                    pos: here,
                    stored: hash.clone(),
                    computed,
                });
            }
        }
        Node::Internal { left, right, hash } => {
            check_node(left, algorithm, pos)?;
            check_node(right, algorithm, pos)?;
            let computed = hasher::hash2(algorithm, left.hash(), right.hash());
            if &computed != hash {
                debug!("internal node #{} hash mismatch", here);
                return Err(CheckError::InternalMismatch {
                    pos: here,
                    stored: hash.clone(),
                    computed,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::hasher::hash;

    #[test]
    fn test_consistent_tree() {
        let tree = Node::build((0u64..9).collect(), HashAlgorithm::Sha256).unwrap();
        check_hash_consistency(&tree, HashAlgorithm::Sha256).unwrap();
    }

    #[test]
    fn test_tampered_leaf() {
        let alg = HashAlgorithm::Sha256;
        let mut tree = Node::build(vec!["a", "b", "c"], alg).unwrap();
        // tree is (a (b c)); swap the value of leaf b, numbered #3
        if let Node::Internal { right, .. } = &mut tree {
            if let Node::Internal { left, .. } = right.as_mut() {
                if let Node::Leaf { value, .. } = left.as_mut() {
                    *value = "x";
                }
            }
        }
        assert_eq!(
            check_hash_consistency(&tree, alg),
            Err(CheckError::LeafMismatch {
                pos: 3,
                stored: hash(alg, "b"),
                computed: hash(alg, "x"),
            })
        );
    }

    #[test]
    fn test_tampered_root() {
        let alg = HashAlgorithm::Blake2b512;
        let mut tree = Node::build(vec!["a", "b", "c", "d"], alg).unwrap();
        if let Node::Internal { hash: h, .. } = &mut tree {
            *h = hash(alg, "forged");
        }
        match check_hash_consistency(&tree, alg) {
            Err(CheckError::InternalMismatch { pos, .. }) => assert_eq!(pos, 0),
            other => panic!("unexpected {:?}", other),
        }
    }
}
