//! Algorithmus-Registry fuer Passwort-Hashing
//!
//! Jeder Algorithmus ist eine austauschbare Hasher-Faehigkeit die ueber
//! `registrieren` in die Registry eingehaengt wird. Neue Algorithmen
//! brauchen keine Aenderung an den Aufrufstellen. Argon2id ist als
//! Standard-Implementierung eingebaut (empfohlen gemaess OWASP); die
//! uebrigen Algorithmen (bcrypt, scrypt, Legacy-Varianten wie md5 oder
//! phpass) werden von externen Crates beigesteuert und hier registriert.

use std::collections::HashMap;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Unterstuetzte Hash-Algorithmen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithmus {
    Argon2,
    Bcrypt,
    Md5,
    Sha,
    Phpass,
    Scrypt,
    ScryptMod,
    /// Kein echter Algorithmus: ein Legacy-Alias der vor dem Dispatch auf
    /// den Standard-Algorithmus samt Standard-Optionen aufgeloest wird.
    Plaintext,
}

/// Standard-Algorithmus auf den der Plaintext-Alias aufgeloest wird
pub const STANDARD_ALGORITHMUS: Algorithmus = Algorithmus::Argon2;

impl Algorithmus {
    /// Gibt den Tag-Namen des Algorithmus zurueck
    pub fn als_str(&self) -> &'static str {
        match self {
            Self::Argon2 => "argon2",
            Self::Bcrypt => "bcrypt",
            Self::Md5 => "md5",
            Self::Sha => "sha",
            Self::Phpass => "phpass",
            Self::Scrypt => "scrypt",
            Self::ScryptMod => "scryptMod",
            Self::Plaintext => "plaintext",
        }
    }
}

impl std::str::FromStr for Algorithmus {
    type Err = AuthError;

    /// Parst einen Algorithmus-Tag (z.B. aus einem Benutzer-Dokument)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "argon2" => Ok(Self::Argon2),
            "bcrypt" => Ok(Self::Bcrypt),
            "md5" => Ok(Self::Md5),
            "sha" => Ok(Self::Sha),
            "phpass" => Ok(Self::Phpass),
            "scrypt" => Ok(Self::Scrypt),
            "scryptMod" => Ok(Self::ScryptMod),
            "plaintext" => Ok(Self::Plaintext),
            unbekannt => Err(AuthError::AlgorithmusNichtUnterstuetzt(
                unbekannt.to_string(),
            )),
        }
    }
}

/// Algorithmus-spezifische Optionen als freies Schluessel/Wert-Bag
///
/// Jede Hasher-Implementierung liest nur die Schluessel die sie kennt.
/// Unbekannte Schluessel werden ignoriert, fehlende durch die Defaults
/// des jeweiligen Algorithmus ersetzt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashOptionen(serde_json::Map<String, serde_json::Value>);

impl HashOptionen {
    /// Erstellt ein leeres Optionen-Bag (alle Defaults)
    pub fn leer() -> Self {
        Self::default()
    }

    /// Setzt einen Options-Wert (Builder-Stil)
    pub fn setzen(mut self, schluessel: &str, wert: impl Into<serde_json::Value>) -> Self {
        self.0.insert(schluessel.to_string(), wert.into());
        self
    }

    /// Liest einen numerischen Wert oder faellt auf den Default zurueck
    pub fn zahl_oder(&self, schluessel: &str, default: u32) -> u32 {
        self.0
            .get(schluessel)
            .and_then(|wert| wert.as_u64())
            .and_then(|wert| u32::try_from(wert).ok())
            .unwrap_or(default)
    }
}

/// Austauschbare Hasher-Faehigkeit eines einzelnen Algorithmus
///
/// Implementierungen werden aus einem `HashOptionen`-Bag konstruiert und
/// muessen das Verify-Gesetz erfuellen: `verifizieren(p, hash(p)?)` ist
/// fuer jeden Klartext `p` wahr.
pub trait Hasher: Send + Sync {
    /// Hasht einen Klartext und gibt den kodierten Hash zurueck
    fn hash(&self, klartext: &str) -> AuthResult<String>;

    /// Prueft einen Klartext gegen einen kodierten Hash
    ///
    /// Gibt `false` zurueck wenn der Hash unlesbar ist oder aus dem Format
    /// eines anderen Algorithmus stammt – niemals einen Fehler.
    fn verifizieren(&self, klartext: &str, kodiert: &str) -> bool;
}

/// Fabrik die aus einem Optionen-Bag einen Hasher konstruiert
pub type HasherFabrik = Box<dyn Fn(&HashOptionen) -> Box<dyn Hasher> + Send + Sync>;

/// Registry: Algorithmus-Tag -> Hasher-Fabrik
///
/// Wird einmal beim Start aufgebaut und danach nur noch gelesen.
pub struct HashRegistry {
    fabriken: HashMap<Algorithmus, HasherFabrik>,
}

impl HashRegistry {
    /// Erstellt eine leere Registry ohne Algorithmen
    pub fn leer() -> Self {
        Self {
            fabriken: HashMap::new(),
        }
    }

    /// Erstellt die Standard-Registry mit eingebautem Argon2id
    pub fn standard() -> Self {
        let mut registry = Self::leer();
        registry.registrieren(
            Algorithmus::Argon2,
            Box::new(|optionen| Box::new(Argon2Hasher::neu(optionen))),
        );
        registry
    }

    /// Registriert eine Hasher-Fabrik fuer einen Algorithmus
    ///
    /// Eine bestehende Registrierung wird ersetzt.
    pub fn registrieren(&mut self, algorithmus: Algorithmus, fabrik: HasherFabrik) {
        tracing::debug!(algorithmus = algorithmus.als_str(), "Hasher registriert");
        self.fabriken.insert(algorithmus, fabrik);
    }

    /// Hasht einen Klartext mit dem angegebenen Algorithmus
    ///
    /// Der Plaintext-Alias wird vorher auf den Standard-Algorithmus
    /// aufgeloest. Nicht registrierte Algorithmen ergeben
    /// `AuthError::AlgorithmusNichtUnterstuetzt`.
    pub fn hash(
        &self,
        klartext: &str,
        algorithmus: Algorithmus,
        optionen: &HashOptionen,
    ) -> AuthResult<String> {
        self.hasher_bauen(algorithmus, optionen)?.hash(klartext)
    }

    /// Prueft einen Klartext gegen einen kodierten Hash
    ///
    /// `Ok(false)` ist das normale negative Ergebnis (falscher Klartext
    /// oder unlesbarer Hash); `Err` nur bei unbekanntem Algorithmus.
    pub fn verifizieren(
        &self,
        klartext: &str,
        kodiert: &str,
        algorithmus: Algorithmus,
        optionen: &HashOptionen,
    ) -> AuthResult<bool> {
        Ok(self
            .hasher_bauen(algorithmus, optionen)?
            .verifizieren(klartext, kodiert))
    }

    /// Loest den Alias auf und konstruiert den passenden Hasher
    fn hasher_bauen(
        &self,
        algorithmus: Algorithmus,
        optionen: &HashOptionen,
    ) -> AuthResult<Box<dyn Hasher>> {
        // Plaintext-Alias: Standard-Algorithmus MIT Standard-Optionen,
        // die uebergebenen Optionen werden bewusst verworfen.
        let standard_optionen;
        let (konkret, optionen) = match algorithmus {
            Algorithmus::Plaintext => {
                standard_optionen = HashOptionen::leer();
                (STANDARD_ALGORITHMUS, &standard_optionen)
            }
            andere => (andere, optionen),
        };

        let fabrik = self.fabriken.get(&konkret).ok_or_else(|| {
            AuthError::AlgorithmusNichtUnterstuetzt(konkret.als_str().to_string())
        })?;

        Ok(fabrik(optionen))
    }
}

impl Default for HashRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Argon2id-Parameter: Defaults gemaess OWASP-Empfehlungen (Stand 2024)
const ARGON2_SPEICHER_KIB: u32 = 64 * 1024;
const ARGON2_ITERATIONEN: u32 = 3;
const ARGON2_PARALLELISMUS: u32 = 1;

/// Eingebauter Argon2id-Hasher
///
/// Bekannte Options-Schluessel: `memoryCost` (KiB), `timeCost`, `threads`.
pub struct Argon2Hasher {
    speicher_kib: u32,
    iterationen: u32,
    parallelismus: u32,
}

impl Argon2Hasher {
    /// Konstruiert den Hasher aus dem Optionen-Bag
    pub fn neu(optionen: &HashOptionen) -> Self {
        Self {
            speicher_kib: optionen.zahl_oder("memoryCost", ARGON2_SPEICHER_KIB),
            iterationen: optionen.zahl_oder("timeCost", ARGON2_ITERATIONEN),
            parallelismus: optionen.zahl_oder("threads", ARGON2_PARALLELISMUS),
        }
    }

    fn instanz(&self) -> AuthResult<Argon2<'static>> {
        let params = Params::new(self.speicher_kib, self.iterationen, self.parallelismus, None)
            .map_err(|e| AuthError::PasswortHashing(e.to_string()))?;

        Ok(Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Hasher for Argon2Hasher {
    /// Hasht mit zufaelligem Salt, gibt den PHC-String zurueck
    fn hash(&self, klartext: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.instanz()?
            .hash_password(klartext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswortHashing(e.to_string()))
    }

    fn verifizieren(&self, klartext: &str, kodiert: &str) -> bool {
        // Unlesbares Format ist ein normales Negativ-Ergebnis
        let Ok(geparst) = PasswordHash::new(kodiert) else {
            return false;
        };

        match self.instanz() {
            Ok(argon2) => argon2.verify_password(klartext.as_bytes(), &geparst).is_ok(),
            Err(_) => false,
        }
    }
}
