//! Grundriss öffnen und gespeicherte Dokumente laden.

use crate::app::AppState;
use crate::core::{resolve_image_path, FloorPlanRef};
use crate::export::FloorPlanDocument;
use anyhow::{Context, Result};
use image::RgbaImage;
use std::path::Path;
use std::sync::Arc;

/// Öffnet einen Grundriss und lädt, falls lokal auflösbar, das Hintergrundbild.
///
/// Ein fehlendes oder defektes Bild ist kein Fehler: der Grundriss bleibt
/// geöffnet, der Export zeichnet dann auf weißem Grund.
pub fn open_floor_plan(state: &mut AppState, floor_plan: FloorPlanRef) {
    log::info!("Öffne Grundriss '{}' ({})", floor_plan.name, floor_plan.id);

    state.view.background =
        match resolve_image_path(&floor_plan.image_url, &state.options.uploads_dir) {
            Some(path) => match load_background(&path) {
                Ok(image) => Some(Arc::new(image)),
                Err(e) => {
                    log::warn!("{:#}", e);
                    state
                        .ui
                        .set_status(format!("Grundriss-Bild nicht lesbar: {}", path.display()));
                    None
                }
            },
            None => {
                log::info!(
                    "Bild-URL '{}' ist nicht lokal, kein Hintergrund",
                    floor_plan.image_url
                );
                None
            }
        };

    state.floor_plan = Some(floor_plan);
}

fn load_background(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)
        .with_context(|| format!("Hintergrundbild '{}' konnte nicht geladen werden", path.display()))?
        .to_rgba8();
    log::info!(
        "Hintergrundbild geladen: {}x{} Pixel",
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Lädt ein zuvor exportiertes JSON-Dokument und ersetzt den Editor-Inhalt.
pub fn load_document(state: &mut AppState, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Dokument '{}' konnte nicht gelesen werden", path.display()))?;
    let document = FloorPlanDocument::from_json(&content)?;

    let count = state.layers.replace_all(document.layers);
    state.calibration = crate::core::ScaleCalibration::from_ratio(document.scale);
    match document.floor_plan {
        Some(floor_plan) => open_floor_plan(state, floor_plan),
        None => {
            state.floor_plan = None;
            state.view.background = None;
        }
    }

    log::info!("Dokument geladen: {} ({} Layer)", path.display(), count);
    state
        .ui
        .set_status(format!("Dokument geladen: {count} Layer"));
    Ok(())
}
