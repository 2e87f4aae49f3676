//! Handler für Exporte. I/O-Fehler brechen keinen Editor-Ablauf ab.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Exportiert die Canvas als PNG.
pub fn image(state: &mut AppState, path: &Path) {
    let result = use_cases::export::export_image(state, path);
    report(state, "Bild", result);
}

/// Exportiert das Layer-Dokument als JSON.
pub fn json(state: &mut AppState, path: &Path) {
    let result = use_cases::export::export_json(state, path);
    report(state, "JSON", result);
}

/// Exportiert die Raumliste als CSV.
pub fn csv(state: &mut AppState, path: &Path) {
    let result = use_cases::export::export_csv(state, path);
    report(state, "CSV", result);
}

fn report(state: &mut AppState, label: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("{}-Export fehlgeschlagen: {:#}", label, e);
        state
            .ui
            .set_status(format!("{label}-Export fehlgeschlagen: {e}"));
    }
}
