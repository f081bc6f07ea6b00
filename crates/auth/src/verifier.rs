//! Ablauf-bewusster Abgleich vorgelegter Secrets
//!
//! Prueft ein vorgelegtes Secret gegen die gespeicherten Token- bzw.
//! Session-Listen eines Benutzers. Typ-Mismatch, Digest-Mismatch und
//! Ablauf kollabieren bewusst zum selben Ergebnis `None`: nach aussen ist
//! nicht erkennbar, WARUM ein Credential abgelehnt wurde. Abgelaufene
//! Eintraege werden hier niemals geloescht – Lifecycle-Bereinigung ist
//! Sache der Persistenzschicht.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::digest::fingerprint;

/// Zweck eines kurzlebigen Tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenTyp {
    #[serde(rename = "verification")]
    Verifizierung,
    #[serde(rename = "recovery")]
    Wiederherstellung,
    #[serde(rename = "invite")]
    Einladung,
    #[serde(rename = "magic-url")]
    MagicUrl,
    #[serde(rename = "legacy-login")]
    LegacyLogin,
}

/// Provider ueber den eine Session erstellt wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAnbieter {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "anonymous")]
    Anonym,
    #[serde(rename = "magic-url")]
    MagicUrl,
}

/// Zeitlich begrenzter, secret-gestuetzter Token eines Benutzers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub typ: TokenTyp,
    /// Fingerprint des Token-Secrets (siehe `digest::fingerprint`)
    pub secret_digest: String,
    pub laeuft_ab_am: DateTime<Utc>,
}

/// Aktive Login-Session eines Benutzers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub secret_digest: String,
    pub laeuft_ab_am: DateTime<Utc>,
    /// Muss gesetzt sein, sonst ist die Session nicht abgleichbar
    pub anbieter: Option<SessionAnbieter>,
}

/// Sucht den ersten Token der Typ, Digest und Ablauf erfuellt
///
/// Der Digest des vorgelegten Secrets wird genau einmal berechnet, dann
/// wird die Liste in gegebener Reihenfolge durchsucht. Kein Treffer
/// (egal aus welchem Grund) ergibt `None`.
pub fn token_abgleichen(
    tokens: &[Token],
    typ: TokenTyp,
    vorgelegtes_secret: &str,
) -> Option<String> {
    let digest = fingerprint(vorgelegtes_secret);
    let jetzt = Utc::now();

    for token in tokens {
        if token.typ == typ && token.secret_digest == digest && token.laeuft_ab_am >= jetzt {
            tracing::debug!(token_id = %token.id, "Token-Abgleich erfolgreich");
            return Some(token.id.clone());
        }
    }

    None
}

/// Sucht die erste Session mit passendem Digest und gueltigem Ablauf
///
/// Sessions ohne gesetzten Anbieter gelten als strukturell unvollstaendig
/// und matchen nie, unabhaengig von Digest und Ablauf.
pub fn session_abgleichen(sessions: &[Session], vorgelegtes_secret: &str) -> Option<String> {
    let digest = fingerprint(vorgelegtes_secret);
    let jetzt = Utc::now();

    for session in sessions {
        if session.anbieter.is_some()
            && session.secret_digest == digest
            && session.laeuft_ab_am >= jetzt
        {
            tracing::debug!(session_id = %session.id, "Session-Abgleich erfolgreich");
            return Some(session.id.clone());
        }
    }

    None
}
