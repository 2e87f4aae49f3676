//! Maßstab-Kalibrierung über ManualScale und AutoScale.

use crate::app::state::{AutoScalePhase, ScalePrompt, ToolMode};
use crate::app::AppState;
use crate::core::{calibrate, extract_dimension, parse_real_distance, LayerId, LayerKind};
use glam::Vec2;

/// ManualScale: sammelt zwei Punkte. Beim zweiten wird der Distanz-Dialog
/// geöffnet und der Modus kehrt nach Idle zurück.
pub fn manual_scale_pick_point(state: &mut AppState, pos: Vec2) {
    let ToolMode::ManualScale { first } = &mut state.editor.mode else {
        log::debug!("ManualScale-Punkt außerhalb des ManualScale-Modus ignoriert");
        return;
    };

    match first.take() {
        None => {
            *first = Some(pos);
            log::info!("Erster Kalibrierpunkt: ({:.1}, {:.1})", pos.x, pos.y);
        }
        Some(p1) => {
            let pixel_distance = p1.distance(pos);
            state.editor.mode = ToolMode::Idle;
            state.ui.scale_prompt = Some(ScalePrompt {
                points: [p1, pos],
                pixel_distance,
            });
            log::info!(
                "Zweiter Kalibrierpunkt gesetzt, Pixeldistanz {:.2}",
                pixel_distance
            );
        }
    }
}

/// Wendet die eingegebene reale Distanz auf den offenen Dialog an.
///
/// Ungültige Eingaben lassen die bisherige Kalibrierung unverändert.
pub fn apply_scale_distance(state: &mut AppState, input: &str) {
    let Some(prompt) = state.ui.scale_prompt.as_ref() else {
        log::debug!("Keine offene Distanzabfrage");
        return;
    };
    let [p1, p2] = prompt.points;

    match parse_real_distance(input).and_then(|real| calibrate(p1, p2, real)) {
        Ok(ratio) => {
            state.calibration.set(ratio);
            state.ui.set_status(format!("Maßstab gesetzt: {ratio:.3} px/Einheit"));
            log::info!("Manuelle Kalibrierung: {:.4} px/Einheit", ratio);
        }
        Err(e) => {
            log::warn!("Kalibrierung abgebrochen: {}", e);
            state.ui.set_status(e.to_string());
        }
    }
}

/// Schließt den Distanz-Dialog.
pub fn close_scale_prompt(state: &mut AppState) {
    state.ui.scale_prompt = None;
}

/// AutoScale: liest eine Maßangabe aus einem Text-Layer.
/// Andere Layer-Typen oder Fehlschläge ändern den Modus nicht.
pub fn auto_scale_extract_dimension(state: &mut AppState, layer_id: &LayerId) {
    if !matches!(
        state.editor.mode,
        ToolMode::AutoScale(AutoScalePhase::AwaitingDimension)
    ) {
        log::debug!("Maß-Extraktion außerhalb von AutoScale ignoriert");
        return;
    }
    let Some(layer) = state.layers.find(layer_id) else {
        return;
    };
    if layer.kind() != LayerKind::Text {
        log::debug!("Layer {} ist kein Text-Label, kein Maß", layer_id);
        return;
    }
    let Some(real_value) = extract_dimension(&layer.name) else {
        log::debug!("Keine Maßangabe in '{}'", layer.name);
        return;
    };

    log::info!("Maßangabe erkannt: {} (aus '{}')", real_value, layer.name);
    state.editor.mode = ToolMode::AutoScale(AutoScalePhase::AwaitingPoints {
        real_value,
        first: None,
    });
}

/// AutoScale: sammelt zwei Punkte und kalibriert mit dem erkannten Maß.
pub fn auto_scale_pick_point(state: &mut AppState, pos: Vec2) {
    let ToolMode::AutoScale(AutoScalePhase::AwaitingPoints { real_value, first }) =
        &mut state.editor.mode
    else {
        log::debug!("AutoScale-Punkt ohne erkanntes Maß ignoriert");
        return;
    };
    let real_value = *real_value;

    let Some(p1) = first.take() else {
        *first = Some(pos);
        return;
    };

    state.editor.mode = ToolMode::Idle;
    match calibrate(p1, pos, real_value) {
        Ok(ratio) => {
            state.calibration.set(ratio);
            state.ui.set_status(format!("Maßstab gesetzt: {ratio:.3} px/Einheit"));
            log::info!("Automatische Kalibrierung: {:.4} px/Einheit", ratio);
        }
        Err(e) => {
            log::warn!("Kalibrierung abgebrochen: {}", e);
            state.ui.set_status(e.to_string());
        }
    }
}
