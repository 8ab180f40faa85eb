//! Utility types and functions for auditree.
//!
//! Currently this only holds the hashing layer; see [`hasher`].

pub mod hasher;
