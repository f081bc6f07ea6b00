//! Aufloesung des Rollen-Satzes eines Prinzipals
//!
//! Das Ergebnis ist eine GEORDNETE Folge von Rollen-Strings fuer die
//! nachgelagerte Autorisierungs-Engine. Doppelte Eintraege werden bewusst
//! nicht entfernt – identische Mehrfach-Mitgliedschaften bleiben sichtbar
//! und die Reihenfolge-Semantik bleibt stabil.
//!
//! Namensraeume: `role:<name>` (globale Faehigkeit), `user:<id>`
//! (Identitaet), `team:<teamId>` (Team-Zugehoerigkeit),
//! `team:<teamId>/<rolle>` (Team-Faehigkeit).

use serde::{Deserialize, Serialize};

/// Rolle anonymer Prinzipale
pub const ROLLE_GAST: &str = "role:guest";

/// Rolle identifizierter Benutzer
pub const ROLLE_MITGLIED: &str = "role:member";

/// Rolle von Server-zu-Server-Prinzipalen (API-Key-Kontext)
pub const ROLLE_APP: &str = "role:app";

/// Rollen die einen bereits erhoehten Umgebungs-Kontext signalisieren
const PRIVILEGIERTE_ROLLEN: [&str; 3] = ["role:owner", "role:developer", "role:admin"];

/// Team-Mitgliedschaft eines Benutzers
///
/// Aus der Persistenz geladene Dokumente koennen unvollstaendig sein;
/// fehlende Felder sind `None` und die Mitgliedschaft wird beim
/// Aufloesen uebersprungen statt einen Fehler auszuloesen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mitgliedschaft {
    pub team_id: Option<String>,
    pub rollen: Option<Vec<String>>,
}

/// Prinzipal dessen Rollen aufgeloest werden
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Benutzer {
    /// Leere oder fehlende ID bedeutet: anonymer Prinzipal
    pub id: Option<String>,
    pub mitgliedschaften: Vec<Mitgliedschaft>,
}

/// Prueft ob der Umgebungs-Kontext bereits erhoehte Rechte traegt
pub fn ist_privilegiert(umgebungs_rollen: &[String]) -> bool {
    umgebungs_rollen
        .iter()
        .any(|rolle| PRIVILEGIERTE_ROLLEN.contains(&rolle.as_str()))
}

/// Prueft ob der Umgebungs-Kontext ein App-Prinzipal ist
pub fn ist_app_prinzipal(umgebungs_rollen: &[String]) -> bool {
    umgebungs_rollen.iter().any(|rolle| rolle == ROLLE_APP)
}

/// Loest den Rollen-Satz eines Benutzers auf
///
/// `umgebungs_rollen` ist der bereits aktive Rollen-Satz der Ausfuehrung
/// (z.B. Owner- oder Server-Kontext) und wird explizit uebergeben statt
/// aus globalem Zustand gelesen.
///
/// - Nicht erhoehter Kontext, identifizierter Benutzer: `user:<id>` und
///   `role:member` werden vorangestellt.
/// - Nicht erhoehter Kontext, anonymer Benutzer: sofort `[role:guest]`,
///   Mitgliedschaften werden nicht konsultiert.
/// - Erhoehter Kontext (privilegiert oder App): Identitaets-Rollen
///   entfallen, nur die Team-Rollen werden aufgebaut.
pub fn rollen_aufloesen(benutzer: &Benutzer, umgebungs_rollen: &[String]) -> Vec<String> {
    let mut rollen = Vec::new();

    if !ist_privilegiert(umgebungs_rollen) && !ist_app_prinzipal(umgebungs_rollen) {
        match benutzer.id.as_deref() {
            Some(id) if !id.is_empty() => {
                rollen.push(format!("user:{id}"));
                rollen.push(ROLLE_MITGLIED.to_string());
            }
            _ => return vec![ROLLE_GAST.to_string()],
        }
    }

    for mitgliedschaft in &benutzer.mitgliedschaften {
        // Unvollstaendige Mitgliedschaften werden uebersprungen
        let (Some(team_id), Some(team_rollen)) = (&mitgliedschaft.team_id, &mitgliedschaft.rollen)
        else {
            continue;
        };

        rollen.push(format!("team:{team_id}"));
        for rolle in team_rollen {
            rollen.push(format!("team:{team_id}/{rolle}"));
        }
    }

    rollen
}
