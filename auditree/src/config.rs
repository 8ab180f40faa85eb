//! Configuration for building Merkle trees.
//!
//! The only tunable is the hash algorithm. It is chosen once per tree and
//! applies at every level of that tree.
//!
//! # Usage Examples
//! ```
//! use auditree::config::Config;
//! use auditree::utils::hasher::HashAlgorithm;
//!
//! // SHA-512 unless told otherwise
//! let config = Config::default();
//! assert_eq!(config.algorithm, HashAlgorithm::Sha512);
//!
//! let mut config = Config::new(HashAlgorithm::Blake2b512);
//! config.set_algorithm(HashAlgorithm::Sha256);
//! ```

use serde::{Deserialize, Serialize};

use crate::def::DEFAULT_HASH_ALGORITHM;
use crate::error::HasherError;
use crate::utils::hasher::HashAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hash algorithm for leaves and internal nodes
    pub algorithm: HashAlgorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_HASH_ALGORITHM,
        }
    }
}

impl Config {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Builds a config from an algorithm name such as `"sha256"`.
    pub fn from_algorithm_name(name: &str) -> Result<Self, HasherError> {
        Ok(Self::new(HashAlgorithm::from_name(name)?))
    }

    pub fn set_algorithm(&mut self, algorithm: HashAlgorithm) {
        self.algorithm = algorithm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(Config::default().algorithm, HashAlgorithm::Sha512);
    }

    #[test]
    fn test_from_algorithm_name() {
        assert_eq!(
            Config::from_algorithm_name("blake2s256").unwrap(),
            Config::new(HashAlgorithm::Blake2s256)
        );
        assert!(Config::from_algorithm_name("crc32").is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = Config::new(HashAlgorithm::Blake2b512);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"algorithm":"blake2b512"}"#);
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
