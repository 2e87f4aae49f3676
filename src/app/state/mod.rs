//! Application State: Werkzeug-Modus, UI-Affordanzen, Hintergrund und Segmentierung.

mod app_state;
mod editor;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::{AutoScalePhase, EditorTool, EditorToolState, ToolMode};
pub use ui::{RenameAffordance, ScalePrompt, UiState};
pub use view::ViewState;
