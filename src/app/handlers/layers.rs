//! Handler für Selektion, Umbenennung und Löschen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LayerId;
use glam::Vec2;

/// Hebt die aktuelle Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    use_cases::layers::clear_selection(state);
}

/// Selektiert einen Layer.
pub fn select(state: &mut AppState, layer_id: &LayerId) {
    use_cases::layers::select_layer(state, layer_id);
}

/// Öffnet das Umbenennungs-Feld am Zeiger.
pub fn open_rename(state: &mut AppState, layer_id: &LayerId, anchor: Vec2) {
    use_cases::layers::open_rename_affordance(state, layer_id, anchor);
}

/// Schließt das Umbenennungs-Feld.
pub fn close_rename(state: &mut AppState) {
    use_cases::layers::close_rename_affordance(state);
}

/// Benennt einen Layer um.
pub fn rename(state: &mut AppState, layer_id: &LayerId, name: String) {
    use_cases::layers::rename_layer(state, layer_id, name);
}

/// Löscht den selektierten Layer.
pub fn delete_selected(state: &mut AppState) {
    use_cases::layers::delete_selected_layer(state);
}
