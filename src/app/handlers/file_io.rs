//! Handler für Grundriss- und Dokument-Laden.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::FloorPlanRef;
use std::path::Path;

/// Öffnet einen Grundriss inklusive Hintergrundbild.
pub fn open_floor_plan(state: &mut AppState, floor_plan: FloorPlanRef) {
    use_cases::file_io::open_floor_plan(state, floor_plan);
}

/// Lädt ein JSON-Dokument. Fehler werden geloggt und als Status gemeldet,
/// der bisherige Editor-Inhalt bleibt erhalten.
pub fn load_document(state: &mut AppState, path: &Path) {
    if let Err(e) = use_cases::file_io::load_document(state, path) {
        log::error!("Dokument laden fehlgeschlagen: {:#}", e);
        state.ui.set_status(format!("Laden fehlgeschlagen: {e}"));
    }
}
