//! The tree node type and read-only traversals over it.
//!
//! Every query here is computed by walking the tree; apart from the per-node
//! digest nothing derived is stored.

use std::fmt;

use crate::utils::hasher::Digest;

/// A node of a Merkle tree. Each node exclusively owns its children.
#[derive(Clone, Debug)]
pub enum Node<T> {
    /// `hash = digest(value)`
    Leaf { value: T, hash: Digest },
    /// `hash = digest(left.hash || right.hash)`
    Internal {
        left: Box<Node<T>>,
        right: Box<Node<T>>,
        hash: Digest,
    },
}

impl<T> Node<T> {
    pub fn hash(&self) -> &Digest {
        match self {
            Node::Leaf { hash, .. } => hash,
            Node::Internal { hash, .. } => hash,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn left(&self) -> Option<&Node<T>> {
        match self {
            Node::Internal { left, .. } => Some(left),
            Node::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<&Node<T>> {
        match self {
            Node::Internal { right, .. } => Some(right),
            Node::Leaf { .. } => None,
        }
    }

    /// Values of all leaves, left to right. This is the order they were built from.
    pub fn leaves(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a T>) {
        match self {
            Node::Leaf { value, .. } => out.push(value),
            Node::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Consumes the tree and returns the leaf values in order.
    pub fn into_leaves(self) -> Vec<T> {
        let mut out = Vec::new();
        self.drain_leaves(&mut out);
        out
    }

    fn drain_leaves(self, out: &mut Vec<T>) {
        match self {
            Node::Leaf { value, .. } => out.push(value),
            Node::Internal { left, right, .. } => {
                left.drain_leaves(out);
                right.drain_leaves(out);
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of levels; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl<T: PartialEq> Node<T> {
    /// Returns true if any leaf holds `target`. Left subtrees are searched first.
    pub fn find(&self, target: &T) -> bool {
        match self {
            Node::Leaf { value, .. } => value == target,
            Node::Internal { left, right, .. } => left.find(target) || right.find(target),
        }
    }
}

/// Two nodes are equal when their digests are equal. Shape and leaf values
/// are not compared.
impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.hash() == other.hash()
    }
}

impl<T> Eq for Node<T> {}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf { value, .. } => write!(f, "{}", value),
            Node::Internal { left, right, .. } => write!(f, "{} {}", left, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::hasher::{hash, hash2, HashAlgorithm};

    const ALG: HashAlgorithm = HashAlgorithm::Sha256;

    fn leaf(v: &'static str) -> Node<&'static str> {
        Node::Leaf {
            value: v,
            hash: hash(ALG, v),
        }
    }

    fn join(left: Node<&'static str>, right: Node<&'static str>) -> Node<&'static str> {
        let hash = hash2(ALG, left.hash(), right.hash());
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            hash,
        }
    }

    #[test]
    fn test_leaf_queries() {
        let n = leaf("x");
        assert!(n.is_leaf());
        assert_eq!(n.depth(), 1);
        assert_eq!(n.leaf_count(), 1);
        assert_eq!(n.leaves(), vec![&"x"]);
        assert!(n.left().is_none() && n.right().is_none());
        assert!(n.find(&"x"));
        assert!(!n.find(&"y"));
    }

    #[test]
    fn test_unbalanced_depth() {
        // a (b c)
        let n = join(leaf("a"), join(leaf("b"), leaf("c")));
        assert_eq!(n.depth(), 3);
        assert_eq!(n.left().unwrap().depth(), 1);
        assert_eq!(n.leaf_count(), 3);
        assert_eq!(n.to_string(), "a b c");
        assert_eq!(n.clone().into_leaves(), vec!["a", "b", "c"]);
        assert!(n.find(&"c"));
        assert!(!n.find(&"d"));
    }

    #[test]
    fn test_equality_is_hash_only() {
        let a = leaf("a");
        // same digest, different variant and value
        let forged: Node<&'static str> = Node::Internal {
            left: Box::new(leaf("p")),
            right: Box::new(leaf("q")),
            hash: a.hash().clone(),
        };
        assert_eq!(a, forged);
        assert_ne!(leaf("a"), leaf("b"));
        assert_eq!(
            join(leaf("a"), leaf("b")),
            join(leaf("a"), leaf("b"))
        );
    }

    /// Variants are not compared: only the cached digests are.
    #[test]
    fn test_leaf_equals_internal_with_same_digest() {
        let pair = Node::build(vec!["a", "b"], ALG).unwrap();
        assert!(!pair.is_leaf());
        let lone: Node<&'static str> = Node::Leaf {
            value: "ab",
            hash: pair.hash().clone(),
        };
        assert_eq!(lone, pair);
        assert_eq!(pair, lone);
        assert_ne!(Node::build(vec!["a"], ALG).unwrap(), pair);
    }
}
