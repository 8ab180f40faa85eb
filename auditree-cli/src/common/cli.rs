use auditree::utils::hasher::HashAlgorithm;
use clap::{Parser, Subcommand};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the root digest, leaf count and depth of the tree
    Root {
        /// File with one element per line
        #[arg(long)]
        input: String,
    },
    /// Print the audit proof of one element as JSON
    Prove {
        /// File with one element per line
        #[arg(long)]
        input: String,

        #[arg(long)]
        element: String,
    },
    /// Check a proof document produced by `prove`
    Verify {
        /// Path to the JSON proof document
        #[arg(long)]
        proof: String,

        /// If set, the leaf digest is recomputed from this element instead of
        /// being taken from the document
        #[arg(long)]
        element: Option<String>,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(name = "auditree", about = "Merkle tree roots and audit proofs")]
pub struct AuditreeCli {
    #[command(subcommand)]
    pub command: Command,

    /// One of sha256, sha512, blake2b512, blake2s256
    #[arg(long, default_value = "sha512", value_parser = HashAlgorithm::from_name)]
    pub algorithm: HashAlgorithm,

    #[arg(long, default_value = "info")]
    pub log_level: String,
}
