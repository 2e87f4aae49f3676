//! Darstellungs-Einstellungen zur Laufzeit.

use crate::app::AppState;

/// Wechselt das aktive Style-Template. Unbekannte Namen werden abgelehnt.
pub fn set_style_template(state: &mut AppState, name: &str) {
    if state.options.find_template(name).is_none() {
        log::warn!("Style-Template '{}' unbekannt", name);
        state.ui.set_status(format!("Unbekanntes Style-Template: {name}"));
        return;
    }
    state.options.style_template = name.to_string();
    log::info!("Style-Template: {}", name);
}
