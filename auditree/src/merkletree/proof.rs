//! Audit proofs: generation from a tree and standalone verification.
//!
//! A proof lists one sibling digest per level, ordered from the leaf up to the
//! root. Each entry carries the side its sibling sits on, so the verifier knows
//! whether to hash `sibling || running` or `running || sibling`.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use strum::Display;

use super::node::Node;
use crate::error::ProofError;
use crate::utils::hasher::{self, Digest, HashAlgorithm};

/// Position of a sibling relative to the path being proven.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofNode {
    pub peer_hash: Digest,
    pub side: Side,
}

impl ProofNode {
    pub fn new(peer_hash: Digest, side: Side) -> Self {
        Self { peer_hash, side }
    }
}

/// Sibling digests from a leaf to the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditProof {
    nodes: Vec<ProofNode>,
}

impl AuditProof {
    pub fn new(nodes: Vec<ProofNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[ProofNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<ProofNode> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProofNode> {
        self.nodes.iter()
    }

    /// Root digest implied by this proof for `leaf_hash`.
    pub fn compute_root(&self, leaf_hash: &Digest, algorithm: HashAlgorithm) -> Digest {
        compute_root(leaf_hash, &self.nodes, algorithm)
    }

    pub fn verify(&self, leaf_hash: &Digest, root: &Digest, algorithm: HashAlgorithm) -> bool {
        verify(leaf_hash, root, &self.nodes, algorithm)
    }

    /// Like [`AuditProof::verify`], but reports the computed root on mismatch.
    pub fn check(
        &self,
        leaf_hash: &Digest,
        root: &Digest,
        algorithm: HashAlgorithm,
    ) -> Result<(), ProofError> {
        let computed = self.compute_root(leaf_hash, algorithm);
        if &computed != root {
            return Err(ProofError::RootMismatch {
                expected: root.clone(),
                computed,
            });
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ProofError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bz: &[u8]) -> Result<Self, ProofError> {
        Ok(bincode::deserialize(bz)?)
    }
}

impl<'a> IntoIterator for &'a AuditProof {
    type Item = &'a ProofNode;
    type IntoIter = std::slice::Iter<'a, ProofNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<T> Node<T> {
    /// Finds the leaf whose digest is `leaf_hash` and returns its audit proof,
    /// or `None` if no leaf has that digest. Left subtrees are searched first,
    /// so with duplicate leaves the leftmost one is proven.
    pub fn audit_proof(&self, leaf_hash: &Digest) -> Option<AuditProof> {
        let proof = self.collect_proof(leaf_hash).map(AuditProof::new);
        match &proof {
            Some(p) => debug!("audit proof for {}: {} nodes", leaf_hash, p.len()),
            None => debug!("audit proof for {}: leaf not found", leaf_hash),
        }
        proof
    }

    fn collect_proof(&self, leaf_hash: &Digest) -> Option<Vec<ProofNode>> {
        match self {
            Node::Leaf { hash, .. } => (hash == leaf_hash).then(Vec::new),
            Node::Internal { left, right, .. } => {
                if let Some(mut nodes) = left.collect_proof(leaf_hash) {
                    nodes.push(ProofNode::new(right.hash().clone(), Side::Right));
                    return Some(nodes);
                }
                if let Some(mut nodes) = right.collect_proof(leaf_hash) {
                    nodes.push(ProofNode::new(left.hash().clone(), Side::Left));
                    return Some(nodes);
                }
                None
            }
        }
    }
}

/// Folds `proof` over `leaf_hash`, in the order given.
pub fn compute_root(leaf_hash: &Digest, proof: &[ProofNode], algorithm: HashAlgorithm) -> Digest {
    proof.iter().fold(leaf_hash.clone(), |running, node| {
        hasher::hash2x(
            algorithm,
            &running,
            &node.peer_hash,
            node.side == Side::Left,
        )
    })
}

/// Returns true if `proof` links `leaf_hash` to `root`.
///
/// Needs no tree: a party holding the leaf digest, the claimed root and the
/// proof can run it alone. A proof of the wrong length or for another tree
/// yields `false`.
pub fn verify(
    leaf_hash: &Digest,
    root: &Digest,
    proof: &[ProofNode],
    algorithm: HashAlgorithm,
) -> bool {
    let ok = &compute_root(leaf_hash, proof, algorithm) == root;
    trace!("verify leaf={} root={} len={} ok={}", leaf_hash, root, proof.len(), ok);
    ok
}
