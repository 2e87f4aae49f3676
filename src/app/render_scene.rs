//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::{AutoScalePhase, ToolMode};
use crate::app::AppState;
use crate::shared::{RenderScene, ToolOverlay};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        layers: state.layers.shared(),
        selected: state.layers.selected().cloned(),
        style: state.options.active_style(),
        overlay: tool_overlay(state),
        canvas_size: state.options.canvas_size,
        options: state.options.clone(),
    }
}

/// Zwischenstände des aktiven Werkzeugs plus offener Distanz-Dialog.
fn tool_overlay(state: &AppState) -> ToolOverlay {
    let mut overlay = ToolOverlay::default();

    match &state.editor.mode {
        ToolMode::ManualScale { first: Some(p) }
        | ToolMode::AutoScale(AutoScalePhase::AwaitingPoints { first: Some(p), .. }) => {
            overlay.scale_points.push(*p)
        }
        ToolMode::DrawRoom { anchor } => overlay.draw_anchor = *anchor,
        ToolMode::Lasso { points } => overlay.lasso_points = points.clone(),
        _ => {}
    }

    // Dialog offen: beide Punkte samt Linie bleiben sichtbar
    if let Some(prompt) = &state.ui.scale_prompt {
        overlay.scale_points = prompt.points.to_vec();
    }

    overlay
}
