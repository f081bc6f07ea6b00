//! Deterministischer Secret-Fingerprint
//!
//! SHA-256-Hex-Digest zum Vergleich vorgelegter Secrets gegen die auf
//! Tokens und Sessions gespeicherten Fingerprints. Bewusst ohne Salt und
//! Kostenfaktor, weil Session-Pruefungen hochfrequent sind – fuer
//! Passwoerter ist ausschliesslich die `HashRegistry` zustaendig.

use sha2::{Digest, Sha256};

/// Berechnet den SHA-256-Fingerprint eines Secrets (Hex, Kleinbuchstaben)
pub fn fingerprint(geheimnis: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(geheimnis.as_bytes());
    format!("{:x}", hasher.finalize())
}
