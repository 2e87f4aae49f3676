//! Export-Use-Cases: PNG, JSON und Raum-CSV.
//!
//! Exporte lesen den Zustand nur; lediglich die Statusmeldung wird gesetzt.

use crate::app::{render_scene, AppState};
use crate::export::{rasterize, rooms_csv, FloorPlanDocument};
use crate::render::build_primitives;
use anyhow::{Context, Result};
use std::path::Path;

/// Rendert Hintergrund, Layer und Overlays mit `export_pixel_ratio` als PNG.
pub fn export_image(state: &mut AppState, path: &Path) -> Result<()> {
    let scene = render_scene::build(state);
    let primitives = build_primitives(&scene);
    let image = rasterize(
        &primitives,
        state.view.background.as_deref(),
        scene.canvas_size,
        state.options.export_pixel_ratio,
    )?;
    image
        .save(path)
        .with_context(|| format!("PNG '{}' konnte nicht geschrieben werden", path.display()))?;

    log::info!(
        "Bild exportiert: {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    state.ui.set_status(format!("Bild exportiert: {}", path.display()));
    Ok(())
}

/// Schreibt `{ floorPlan, layers, scale }` als formatiertes JSON.
pub fn export_json(state: &mut AppState, path: &Path) -> Result<()> {
    let json = document_json(state)?;
    std::fs::write(path, json)
        .with_context(|| format!("JSON '{}' konnte nicht geschrieben werden", path.display()))?;

    log::info!("JSON exportiert: {} ({} Layer)", path.display(), state.layers.len());
    state.ui.set_status(format!("JSON exportiert: {}", path.display()));
    Ok(())
}

/// JSON-Projektion des aktuellen Zustands.
pub fn document_json(state: &AppState) -> Result<String> {
    FloorPlanDocument::snapshot(state.floor_plan.as_ref(), &state.layers, &state.calibration)
        .to_json()
}

/// Schreibt die Raumliste als CSV.
pub fn export_csv(state: &mut AppState, path: &Path) -> Result<()> {
    let csv = rooms_csv(state.layers.iter());
    std::fs::write(path, csv)
        .with_context(|| format!("CSV '{}' konnte nicht geschrieben werden", path.display()))?;

    log::info!("CSV exportiert: {}", path.display());
    state.ui.set_status(format!("CSV exportiert: {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Layer;
    use glam::Vec2;

    #[test]
    fn document_json_is_deterministic() {
        let mut state = AppState::new();
        state.layers.add(Layer::room("A", Vec2::ZERO, Vec2::ONE));
        state.calibration.set(4.0);

        let first = document_json(&state).expect("JSON erwartet");
        let second = document_json(&state).expect("JSON erwartet");

        assert_eq!(first, second);
        assert!(first.contains("\"scale\": 4.0"));
    }

    #[test]
    fn write_failure_leaves_state_untouched() {
        let mut state = AppState::new();
        state.layers.add(Layer::room("A", Vec2::ZERO, Vec2::ONE));

        let result = export_csv(&mut state, Path::new("/nonexistent-dir/rooms.csv"));

        assert!(result.is_err());
        assert_eq!(state.layers.len(), 1);
        assert!(state.ui.status_message.is_none());
    }
}
