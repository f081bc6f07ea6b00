//! Codec fuer opake Session-Credentials
//!
//! Ein Credential transportiert Session-ID und Secret als einzelnen
//! Base64-String (JSON-serialisiert). `dekodieren` schlaegt niemals fehl:
//! unlesbare oder strukturell falsche Eingaben ergeben ein leeres
//! Credential – ein ungueltiger Cookie ist ein normaler Fall, kein Fehler.

use serde::{Deserialize, Serialize};

/// Session-ID plus Secret als Bearer-Nachweis
///
/// Das Secret ist immer ein zufaellig generierter String (siehe
/// `secret::geheimnis_generieren`), niemals ein Benutzerpasswort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zugangsdaten {
    /// ID der Session; `None` wenn die Eingabe nicht dekodierbar war
    #[serde(default)]
    pub id: Option<String>,
    /// Vorgelegtes Secret; leer wenn die Eingabe nicht dekodierbar war
    #[serde(default)]
    pub secret: String,
}

/// Kodiert ID und Secret zu einem transportierbaren String
pub fn kodieren(id: &str, secret: &str) -> String {
    let json = serde_json::json!({ "id": id, "secret": secret });
    base64::Engine::encode(&base64::engine::general_purpose::STANDARD, json.to_string())
}

/// Dekodiert einen Credential-String
///
/// Fehlende Felder werden durch die Defaults ersetzt (`id` -> `None`,
/// `secret` -> `""`); unbekannte Felder werden ignoriert.
pub fn dekodieren(roh: &str) -> Zugangsdaten {
    let Ok(bytes) = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, roh) else {
        return Zugangsdaten::default();
    };

    // Nur ein JSON-Objekt ist ein Credential; Arrays, Strings und andere
    // Formen ergeben das leere Credential (serde wuerde z.B. eine
    // Sequenz-Form sonst durchlassen).
    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(wert @ serde_json::Value::Object(_)) => {
            serde_json::from_value(wert).unwrap_or_default()
        }
        _ => Zugangsdaten::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let kodiert = kodieren("u1", "s3cr3t");
        let dekodiert = dekodieren(&kodiert);

        assert_eq!(
            dekodiert,
            Zugangsdaten {
                id: Some("u1".to_string()),
                secret: "s3cr3t".to_string(),
            }
        );
    }

    #[test]
    fn roundtrip_mit_leeren_strings() {
        let dekodiert = dekodieren(&kodieren("", ""));
        assert_eq!(dekodiert.id, Some(String::new()));
        assert_eq!(dekodiert.secret, "");
    }

    #[test]
    fn ungueltiges_base64_gibt_leeres_credential() {
        let dekodiert = dekodieren("not-valid-base64!!");
        assert_eq!(dekodiert, Zugangsdaten::default());
        assert_eq!(dekodiert.id, None);
        assert_eq!(dekodiert.secret, "");
    }

    #[test]
    fn base64_ohne_json_gibt_leeres_credential() {
        let roh = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, "kein json");
        assert_eq!(dekodieren(&roh), Zugangsdaten::default());
    }

    #[test]
    fn json_ohne_mapping_gibt_leeres_credential() {
        // Auch die Array-Form mit zwei Strings darf nicht als
        // (id, secret)-Sequenz durchrutschen.
        for payload in [
            "[1, 2, 3]",
            r#"["s42", "geheim"]"#,
            "\"nur-ein-string\"",
            "42",
            "null",
        ] {
            let roh =
                base64::Engine::encode(&base64::engine::general_purpose::STANDARD, payload);
            assert_eq!(dekodieren(&roh), Zugangsdaten::default(), "Payload: {payload}");
        }
    }

    #[test]
    fn fehlende_felder_bekommen_defaults() {
        let roh = base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            r#"{"id": "s42", "extra": true}"#,
        );
        let dekodiert = dekodieren(&roh);
        assert_eq!(dekodiert.id, Some("s42".to_string()));
        assert_eq!(dekodiert.secret, "");

        let roh = base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            r#"{"secret": "geheim"}"#,
        );
        let dekodiert = dekodieren(&roh);
        assert_eq!(dekodiert.id, None);
        assert_eq!(dekodiert.secret, "geheim");
    }
}
