use crate::app::segmentation::SegmentationState;
use crate::core::{FloorPlanRef, LayerStore, ScaleCalibration};
use crate::shared::EditorOptions;

use super::{EditorToolState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geöffneter Grundriss (None = noch keiner gewählt)
    pub floor_plan: Option<FloorPlanRef>,
    /// Alle Layer inklusive Selektion
    pub layers: LayerStore,
    /// Pixel pro realer Einheit
    pub calibration: ScaleCalibration,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// UI-State
    pub ui: UiState,
    /// View-State
    pub view: ViewState,
    /// Lebenszyklus der automatischen Segmentierung
    pub segmentation: SegmentationState,
    /// Laufzeit-Optionen (Farben, Größen, Templates)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            floor_plan: None,
            layers: LayerStore::new(),
            calibration: ScaleCalibration::default(),
            editor: EditorToolState::new(),
            ui: UiState::new(),
            view: ViewState::new(),
            segmentation: SegmentationState::default(),
            options,
        }
    }

    /// Gibt die Anzahl der Layer zurück (für UI-Anzeige)
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
