//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod segmentation;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Layer, Werkzeug, UI).
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use segmentation::{
    CannedSegmentation, PendingSegmentation, SegmentationError, SegmentationRequest,
    SegmentationService, SegmentationStatus,
};
pub use state::{AppState, AutoScalePhase, EditorTool, EditorToolState, ToolMode, UiState, ViewState};
