//! Handler für Darstellungs-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt das Style-Template.
pub fn set_style_template(state: &mut AppState, name: &str) {
    use_cases::view::set_style_template(state, name);
}
