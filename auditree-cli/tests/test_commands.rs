use std::io::Write;

use auditree::utils::hasher::{hash, HashAlgorithm};
use auditree_cli::common::{commands, utils};

fn letters_file() -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new()
        .prefix("auditree-letters")
        .tempfile()
        .unwrap();
    write!(f, "a\nb\nc\r\nd\ne\nf\ng\n").unwrap();
    f
}

#[test]
fn test_read_elements() {
    let f = letters_file();
    let elements = utils::read_elements(f.path().to_str().unwrap()).unwrap();
    assert_eq!(elements, vec!["a", "b", "c", "d", "e", "f", "g"]);
    assert!(utils::read_elements("/nonexistent/auditree/input").is_err());
}

#[test]
fn test_root_report() {
    let f = letters_file();
    let elements = utils::read_elements(f.path().to_str().unwrap()).unwrap();
    let report = commands::root_report(elements, HashAlgorithm::Sha512).unwrap();
    assert_eq!(report.leaves, 7);
    assert_eq!(report.depth, 4);
    assert_eq!(report.root.len(), 128);

    assert!(commands::root_report(vec![], HashAlgorithm::Sha512).is_err());
}

#[test]
fn test_prove_then_verify() {
    let elements: Vec<String> = ["a", "b", "c", "d", "e", "f", "g"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let alg = HashAlgorithm::Blake2s256;
    let doc = commands::prove(elements.clone(), "d", alg).unwrap();
    assert_eq!(doc.proof.len(), 3);
    assert_eq!(doc.leaf, hash(alg, "d").to_hex());

    // through JSON, as the binary does
    let json = serde_json::to_string(&doc).unwrap();
    assert!(json.contains(r#""algorithm":"blake2s256""#));
    let doc: commands::ProofDocument = serde_json::from_str(&json).unwrap();

    assert!(commands::verify_document(&doc, None).unwrap());
    assert!(commands::verify_document(&doc, Some("d")).unwrap());
    assert!(!commands::verify_document(&doc, Some("e")).unwrap());

    let mut tampered = doc.clone();
    tampered.root = hash(alg, "x").to_hex();
    assert!(!commands::verify_document(&tampered, None).unwrap());

    let mut garbled = doc.clone();
    garbled.proof[1].hash = "not hex".to_owned();
    assert!(commands::verify_document(&garbled, None).is_err());

    assert!(commands::prove(elements, "h", alg).is_err());
}
