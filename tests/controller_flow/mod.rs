//! Gemeinsame Helfer für die Controller-Flow-Tests.

mod calibration;
mod drawing;
mod layers_and_segmentation;

use floorplan_editor::app::{PendingSegmentation, SegmentationError, SegmentationRequest};
use floorplan_editor::{
    AppController, AppIntent, AppState, EditorTool, Layer, SegmentationService,
};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

pub fn toggle(controller: &mut AppController, state: &mut AppState, tool: EditorTool) {
    controller
        .handle_intent(state, AppIntent::ToolToggled { tool })
        .expect("ToolToggled sollte durchlaufen");
}

pub fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::CanvasClicked {
                pos: Vec2::new(x, y),
            },
        )
        .expect("CanvasClicked sollte durchlaufen");
}

pub fn double_click(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::CanvasDoubleClicked { pos: Vec2::ZERO })
        .expect("CanvasDoubleClicked sollte durchlaufen");
}

/// Segmentierungsdienst mit sofort verfügbarem, festem Ergebnis.
/// Zählt die Aufrufe über einen geteilten Zähler.
pub struct FixedSegmentation {
    result: Result<Vec<Layer>, SegmentationError>,
    calls: Rc<Cell<usize>>,
}

impl FixedSegmentation {
    pub fn new(result: Result<Vec<Layer>, SegmentationError>) -> Self {
        Self {
            result,
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Zähler, der nach dem Verschieben in den Controller lesbar bleibt.
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl SegmentationService for FixedSegmentation {
    fn segment(&self, _request: SegmentationRequest) -> PendingSegmentation {
        self.calls.set(self.calls.get() + 1);
        PendingSegmentation::ready(self.result.clone())
    }
}
