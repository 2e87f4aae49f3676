use super::super::state::EditorTool;
use crate::core::{FloorPlanRef, LayerId};
use glam::Vec2;
use std::path::PathBuf;
use std::time::Instant;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Toolbar-Schalter betätigt (gleiches Werkzeug erneut = ausschalten)
    ToolToggled { tool: EditorTool },
    /// Klick auf freie Canvas-Fläche (Canvas-Koordinaten)
    CanvasClicked { pos: Vec2 },
    /// Doppelklick auf die Canvas
    CanvasDoubleClicked { pos: Vec2 },
    /// Klick auf einen Layer, `pointer` ist die Zeigerposition
    LayerClicked { layer_id: LayerId, pointer: Vec2 },
    /// Umbenennung bestätigt
    RenameCommitted { name: String },
    /// Umbenennung abgebrochen
    RenameCancelled,
    /// Reale Distanz im ManualScale-Dialog eingegeben
    ScaleDistanceEntered { input: String },
    /// ManualScale-Dialog abgebrochen
    ScaleDistanceCancelled,
    /// Selektierten Layer löschen (Entf-Taste)
    DeleteSelectedLayerRequested,
    /// Automatische Segmentierung anstoßen
    SegmentationRequested,
    /// Periodischer Takt (Frame-Update)
    Tick { now: Instant },
    /// Style-Template wechseln
    StyleTemplateSelected { name: String },
    /// Grundriss aus dem Katalog geöffnet
    FloorPlanOpened { floor_plan: FloorPlanRef },
    /// Gespeichertes JSON-Dokument laden
    DocumentOpenRequested { path: PathBuf },
    /// Canvas als PNG exportieren
    ExportImageRequested { path: PathBuf },
    /// Layer-Dokument als JSON exportieren
    ExportJsonRequested { path: PathBuf },
    /// Räume als CSV exportieren
    ExportCsvRequested { path: PathBuf },
}
