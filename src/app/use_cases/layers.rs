//! Selektion, Umbenennung und Löschen von Layern.

use crate::app::state::RenameAffordance;
use crate::app::AppState;
use crate::core::LayerId;
use glam::Vec2;

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.layers.select(None);
}

/// Selektiert einen Layer (unbekannte IDs heben die Selektion auf).
pub fn select_layer(state: &mut AppState, layer_id: &LayerId) {
    state.layers.select(Some(layer_id));
    log::info!("Layer selektiert: {:?}", state.layers.selected());
}

/// Öffnet das Umbenennungs-Feld, vorbelegt mit dem aktuellen Namen.
pub fn open_rename_affordance(state: &mut AppState, layer_id: &LayerId, anchor: Vec2) {
    let Some(layer) = state.layers.find(layer_id) else {
        log::debug!("Umbenennung für unbekannten Layer {} ignoriert", layer_id);
        return;
    };
    state.ui.rename = Some(RenameAffordance {
        layer_id: layer_id.clone(),
        draft: layer.name.clone(),
        anchor,
    });
}

/// Schließt das Umbenennungs-Feld.
pub fn close_rename_affordance(state: &mut AppState) {
    state.ui.rename = None;
}

/// Benennt einen Layer um.
pub fn rename_layer(state: &mut AppState, layer_id: &LayerId, name: String) {
    if state.layers.rename(layer_id, name.as_str()) {
        log::info!("Layer {} umbenannt in '{}'", layer_id, name);
    } else {
        log::debug!("Layer {} existiert nicht, Umbenennung ignoriert", layer_id);
    }
}

/// Entfernt den selektierten Layer.
pub fn delete_selected_layer(state: &mut AppState) {
    let Some(id) = state.layers.selected().cloned() else {
        return;
    };
    if let Some(layer) = state.layers.remove(&id) {
        log::info!("Layer '{}' ({}) gelöscht", layer.name, id);
    }
}
