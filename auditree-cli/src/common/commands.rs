use anyhow::{bail, Context, Result};
use auditree::{
    utils::hasher::{hash, Digest, HashAlgorithm},
    verify, MerkleTree, ProofNode, Side,
};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootReport {
    pub algorithm: HashAlgorithm,
    pub root: String,
    pub leaves: usize,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofEntry {
    pub hash: String,
    pub side: Side,
}

/// Self-contained proof: everything a verifier needs besides trust in `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofDocument {
    pub algorithm: HashAlgorithm,
    pub leaf: String,
    pub root: String,
    pub proof: Vec<ProofEntry>,
}

fn build_tree(elements: Vec<String>, algorithm: HashAlgorithm) -> Result<MerkleTree<String>> {
    MerkleTree::with_algorithm(elements, algorithm).context("cannot build tree from input")
}

pub fn root_report(elements: Vec<String>, algorithm: HashAlgorithm) -> Result<RootReport> {
    let tree = build_tree(elements, algorithm)?;
    Ok(RootReport {
        algorithm,
        root: tree.root_hash().to_hex(),
        leaves: tree.leaf_count(),
        depth: tree.depth(),
    })
}

pub fn prove(
    elements: Vec<String>,
    element: &str,
    algorithm: HashAlgorithm,
) -> Result<ProofDocument> {
    let tree = build_tree(elements, algorithm)?;
    let leaf = hash(algorithm, element);
    let Some(proof) = tree.audit_proof(&leaf) else {
        bail!("element {:?} is not in the tree", element);
    };
    info!("proof for {:?} has {} nodes", element, proof.len());
    Ok(ProofDocument {
        algorithm,
        leaf: leaf.to_hex(),
        root: tree.root_hash().to_hex(),
        proof: proof
            .iter()
            .map(|n| ProofEntry {
                hash: n.peer_hash.to_hex(),
                side: n.side,
            })
            .collect(),
    })
}

/// Runs the standalone verifier over `doc`. Returns an error only when the
/// document itself cannot be decoded.
pub fn verify_document(doc: &ProofDocument, element: Option<&str>) -> Result<bool> {
    let leaf = match element {
        Some(e) => hash(doc.algorithm, e),
        None => Digest::from_hex(&doc.leaf).context("bad leaf digest")?,
    };
    let root = Digest::from_hex(&doc.root).context("bad root digest")?;
    let nodes = doc
        .proof
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let peer_hash =
                Digest::from_hex(&e.hash).with_context(|| format!("bad digest in entry {}", i))?;
            Ok::<_, anyhow::Error>(ProofNode::new(peer_hash, e.side))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(verify(&leaf, &root, &nodes, doc.algorithm))
}
