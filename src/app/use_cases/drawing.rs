//! Zeichen-Gesten: Raum per Zwei-Klick-Rechteck, Freiform-Region per Lasso.

use crate::app::state::ToolMode;
use crate::app::AppState;
use crate::core::{Layer, LayerKind};
use glam::Vec2;

/// Mindestanzahl Punkte für eine CustomRegion.
pub const MIN_LASSO_POINTS: usize = 3;

/// DrawRoom: erster Klick setzt den Anker, zweiter erzeugt den Raum.
pub fn draw_room_pick_point(state: &mut AppState, pos: Vec2) {
    let ToolMode::DrawRoom { anchor } = &mut state.editor.mode else {
        log::debug!("Raum-Punkt außerhalb von DrawRoom ignoriert");
        return;
    };

    let Some(start) = anchor.take() else {
        *anchor = Some(pos);
        return;
    };

    let origin = start.min(pos);
    let size = (pos - start).abs();
    let name = state.layers.next_name(LayerKind::Room);
    let id = state.layers.add(Layer::room(name.clone(), origin, size));
    state.editor.mode = ToolMode::Idle;
    log::info!(
        "Raum '{}' ({}) erstellt: {:.1},{:.1} {:.1}×{:.1}",
        name,
        id,
        origin.x,
        origin.y,
        size.x,
        size.y
    );
}

/// Lasso: hängt einen Punkt an, ohne abzuschließen.
pub fn lasso_add_point(state: &mut AppState, pos: Vec2) {
    match &mut state.editor.mode {
        ToolMode::Lasso { points } => points.push(pos),
        _ => log::debug!("Lasso-Punkt außerhalb des Lasso-Modus ignoriert"),
    }
}

/// Lasso: übernimmt die Punkte als CustomRegion, sofern genügend vorhanden.
pub fn lasso_commit(state: &mut AppState) {
    let points = match &state.editor.mode {
        ToolMode::Lasso { points } if points.len() >= MIN_LASSO_POINTS => points.clone(),
        _ => {
            log::debug!("Lasso-Abschluss ohne ausreichende Punkte ignoriert");
            return;
        }
    };

    let name = state.layers.next_name(LayerKind::CustomRegion);
    let id = state.layers.add(Layer::custom_region(name.clone(), &points));
    state.editor.mode = ToolMode::Idle;
    log::info!("Region '{}' ({}) mit {} Punkten erstellt", name, id, points.len());
}
