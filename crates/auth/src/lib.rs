//! atrium-auth – Authentifizierungs-Kern fuer Atrium
//!
//! Dieses Crate implementiert:
//! - Algorithmus-Registry fuer Passwort-Hashing (Argon2id eingebaut,
//!   weitere Algorithmen registrierbar)
//! - SHA-256-Fingerprints fuer Token- und Session-Secrets
//! - Codec fuer opake Session-Credentials (Base64 + JSON)
//! - Generator fuer kryptografisch zufaellige Secrets und Einmal-Codes
//! - Ablauf-bewussten Token-/Session-Abgleich
//! - Aufloesung des Rollen-Satzes eines Prinzipals
//!
//! Persistenz, HTTP-/Cookie-Transport und die Autorisierungs-Engine sind
//! bewusst externe Kollaborateure: dieses Crate prueft Secrets und
//! berechnet Rollen, es erzwingt keinen Zugriff und loescht keine
//! abgelaufenen Eintraege.

pub mod config;
pub mod credential;
pub mod digest;
pub mod error;
pub mod hash;
pub mod roles;
pub mod secret;
pub mod verifier;

// Bequeme Re-Exporte
pub use config::{cookie_name, cookie_name_setzen};
pub use credential::{dekodieren, kodieren, Zugangsdaten};
pub use digest::fingerprint;
pub use error::{AuthError, AuthResult};
pub use hash::{
    Algorithmus, Argon2Hasher, HashOptionen, HashRegistry, Hasher, HasherFabrik,
    STANDARD_ALGORITHMUS,
};
pub use roles::{
    ist_app_prinzipal, ist_privilegiert, rollen_aufloesen, Benutzer, Mitgliedschaft, ROLLE_APP,
    ROLLE_GAST, ROLLE_MITGLIED,
};
pub use secret::{code_generieren, geheimnis_generieren, PASSWORT_BYTES, TOKEN_BYTES};
pub use verifier::{
    session_abgleichen, token_abgleichen, Session, SessionAnbieter, Token, TokenTyp,
};
