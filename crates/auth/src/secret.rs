//! Generator fuer kryptografisch zufaellige Secrets
//!
//! Alle Werte stammen aus der OS-Zufallsquelle (`OsRng`). Deren Ausfall
//! ist fatal und wird nicht wiederholt.

use rand::{rngs::OsRng, TryRngCore};

use crate::error::{AuthError, AuthResult};

/// Standard-Laenge generierter Passwoerter (Bytes vor Hex-Kodierung)
pub const PASSWORT_BYTES: usize = 20;

/// Standard-Laenge fuer Token- und Session-Secrets (Bytes vor Hex-Kodierung)
pub const TOKEN_BYTES: usize = 128;

/// Standard-Stellenzahl numerischer Einmal-Codes
pub const CODE_STELLEN: usize = 6;

/// Generiert ein zufaelliges Secret als Hex-String (Kleinbuchstaben)
///
/// Liest `byte_laenge` Bytes aus der OS-Zufallsquelle; die Ausgabe ist
/// doppelt so lang. Schlaegt nur fehl wenn die Quelle selbst versagt.
pub fn geheimnis_generieren(byte_laenge: usize) -> AuthResult<String> {
    let bytes = zufalls_bytes(byte_laenge)?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Generiert einen numerischen Einmal-Code (z.B. fuer Magic-URL-Logins)
///
/// Bytes ab 250 werden verworfen (Rueckweisungs-Sampling), sonst waeren
/// die Ziffern 0-5 leicht ueberrepraesentiert (256 % 10 != 0).
pub fn code_generieren(stellen: usize) -> AuthResult<String> {
    const OBERGRENZE: u8 = 250;

    let mut code = String::with_capacity(stellen);
    while code.len() < stellen {
        for byte in zufalls_bytes(stellen - code.len())? {
            if byte < OBERGRENZE {
                code.push(char::from(b'0' + byte % 10));
            }
        }
    }

    Ok(code)
}

fn zufalls_bytes(laenge: usize) -> AuthResult<Vec<u8>> {
    let mut bytes = vec![0u8; laenge];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::EntropieErschoepft(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn geheimnis_hat_doppelte_laenge_in_hex() {
        let geheimnis = geheimnis_generieren(PASSWORT_BYTES).expect("Generierung fehlgeschlagen");
        assert_eq!(geheimnis.len(), 40);
        assert!(geheimnis
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn token_secret_laenge() {
        let geheimnis = geheimnis_generieren(TOKEN_BYTES).unwrap();
        assert_eq!(geheimnis.len(), 256);
    }

    #[test]
    fn leere_laenge_gibt_leeren_string() {
        assert_eq!(geheimnis_generieren(0).unwrap(), "");
    }

    #[test]
    fn keine_kollisionen_ueber_viele_samples() {
        let mut gesehen = HashSet::new();
        for _ in 0..10_000 {
            let geheimnis = geheimnis_generieren(PASSWORT_BYTES).unwrap();
            assert!(gesehen.insert(geheimnis), "Kollision bei 160 Bit Entropie");
        }
    }

    #[test]
    fn code_besteht_nur_aus_ziffern() {
        let code = code_generieren(CODE_STELLEN).expect("Code-Generierung fehlgeschlagen");
        assert_eq!(code.len(), CODE_STELLEN);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        assert_eq!(code_generieren(0).unwrap(), "");
    }

    #[test]
    fn code_ziffern_sind_gleichverteilt() {
        // Grobe Verteilungs-Pruefung: ueber 2000 Ziffern muss jede der
        // zehn Ziffern vorkommen, auch wenn Bytes verworfen werden.
        let mut haeufigkeit = [0usize; 10];
        for _ in 0..200 {
            let code = code_generieren(10).unwrap();
            assert_eq!(code.len(), 10);
            for ziffer in code.bytes() {
                haeufigkeit[(ziffer - b'0') as usize] += 1;
            }
        }

        assert!(
            haeufigkeit.iter().all(|&anzahl| anzahl > 0),
            "Jede Ziffer muss vorkommen: {haeufigkeit:?}"
        );
    }
}
