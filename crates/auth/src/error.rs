//! Fehlertypen fuer den Auth-Kern
//!
//! Wichtig: negative Verifikationsergebnisse (falsches Passwort,
//! abgelaufener Token, unlesbares Credential) sind KEINE Fehler – sie
//! werden als `false` bzw. `None` zurueckgegeben. Fehler signalisieren
//! ausschliesslich eine Fehlkonfiguration oder einen Systemausfall, damit
//! Aufrufer beide Faelle niemals verwechseln koennen.

use thiserror::Error;

/// Alle moeglichen Fehler im Auth-Kern
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Konfiguration ---
    #[error("Hash-Algorithmus nicht unterstuetzt: {0}")]
    AlgorithmusNichtUnterstuetzt(String),

    // --- Passwort ---
    #[error("Passwort-Hashing fehlgeschlagen: {0}")]
    PasswortHashing(String),

    // --- Zufallsquelle ---
    #[error("Entropie-Quelle fehlgeschlagen: {0}")]
    EntropieErschoepft(String),
}

/// Result-Alias fuer den Auth-Kern
pub type AuthResult<T> = Result<T, AuthError>;
