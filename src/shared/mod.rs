//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `export` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod style;

pub use options::EditorOptions;
pub use render_scene::{RenderScene, ToolOverlay};
pub use style::{LayerStyle, StyleTemplate};
