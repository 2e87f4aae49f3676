//! Handler für Werkzeugwechsel, Kalibrierung und Zeichen-Gesten.

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LayerId;
use glam::Vec2;

/// Armiert ein Werkzeug.
pub fn arm(state: &mut AppState, tool: EditorTool) {
    use_cases::tool_mode::arm_tool(state, tool);
}

/// Kehrt in den Idle-Modus zurück.
pub fn reset(state: &mut AppState) {
    use_cases::tool_mode::reset_tool_mode(state);
}

/// ManualScale: setzt einen Referenzpunkt.
pub fn manual_scale_pick(state: &mut AppState, pos: Vec2) {
    use_cases::calibration::manual_scale_pick_point(state, pos);
}

/// Wendet die Distanzeingabe an.
pub fn apply_scale_distance(state: &mut AppState, input: &str) {
    use_cases::calibration::apply_scale_distance(state, input);
}

/// Schließt den Distanz-Dialog.
pub fn close_scale_prompt(state: &mut AppState) {
    use_cases::calibration::close_scale_prompt(state);
}

/// AutoScale: liest die Maßangabe aus einem Layer.
pub fn auto_scale_extract(state: &mut AppState, layer_id: &LayerId) {
    use_cases::calibration::auto_scale_extract_dimension(state, layer_id);
}

/// AutoScale: setzt einen Referenzpunkt.
pub fn auto_scale_pick(state: &mut AppState, pos: Vec2) {
    use_cases::calibration::auto_scale_pick_point(state, pos);
}

/// DrawRoom: setzt Anker bzw. erzeugt den Raum.
pub fn draw_room_pick(state: &mut AppState, pos: Vec2) {
    use_cases::drawing::draw_room_pick_point(state, pos);
}

/// Hängt einen Lasso-Punkt an.
pub fn lasso_add(state: &mut AppState, pos: Vec2) {
    use_cases::drawing::lasso_add_point(state, pos);
}

/// Schließt das Lasso ab.
pub fn lasso_commit(state: &mut AppState) {
    use_cases::drawing::lasso_commit(state);
}
