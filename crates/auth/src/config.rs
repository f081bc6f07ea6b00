//! Prozessweite Konfiguration des Auth-Kerns
//!
//! Einzig der Name des Session-Cookies ist prozessweit: er wird einmal
//! beim Start gesetzt und danach nur noch gelesen. Alles andere (Rollen-
//! Kontext, Optionen, Record-Listen) wird explizit als Parameter
//! uebergeben.

use std::sync::OnceLock;

/// Standard-Name des Session-Cookies
const STANDARD_COOKIE_NAME: &str = "a_session";

static COOKIE_NAME: OnceLock<String> = OnceLock::new();

/// Setzt den Namen des Session-Cookies (einmalig beim Start)
///
/// Gibt `false` zurueck wenn der Name bereits gesetzt war; der erste
/// Aufruf gewinnt.
pub fn cookie_name_setzen(name: impl Into<String>) -> bool {
    COOKIE_NAME.set(name.into()).is_ok()
}

/// Gibt den konfigurierten Cookie-Namen zurueck
pub fn cookie_name() -> &'static str {
    COOKIE_NAME
        .get()
        .map(String::as_str)
        .unwrap_or(STANDARD_COOKIE_NAME)
}
