//! Grundriss-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CannedSegmentation, EditorTool,
    EditorToolState, SegmentationService, SegmentationStatus, ToolMode, UiState, ViewState,
};
pub use core::{
    FloorPlanCatalog, FloorPlanRef, JsonCatalog, Layer, LayerGeometry, LayerId, LayerKind,
    LayerStore, ScaleCalibration, SessionContext,
};
pub use export::FloorPlanDocument;
pub use render::{build_primitives, DrawPrimitive};
pub use shared::{EditorOptions, RenderScene, StyleTemplate};
