//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render`/`export` sie konsumieren.

use super::options::EditorOptions;
use super::style::StyleTemplate;
use crate::core::{LayerId, LayerMap};
use std::sync::Arc;

/// Nicht persistierte Zwischenstände des aktiven Werkzeugs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolOverlay {
    /// Gesammelte Kalibrier-Punkte (0–2); ab zwei Punkten wird die Verbindungslinie gezeichnet
    pub scale_points: Vec<glam::Vec2>,
    /// Erster Eckpunkt eines Raums im DrawRoom-Modus
    pub draw_anchor: Option<glam::Vec2>,
    /// Gesammelte Lasso-Punkte
    pub lasso_points: Vec<glam::Vec2>,
}

impl ToolOverlay {
    pub fn is_empty(&self) -> bool {
        self.scale_points.is_empty() && self.draw_anchor.is_none() && self.lasso_points.is_empty()
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Alle Layer in Zeichenreihenfolge (Arc für O(1)-Clone pro Frame)
    pub layers: Arc<LayerMap>,
    /// ID des selektierten Layers
    pub selected: Option<LayerId>,
    /// Aufgelöstes Style-Template
    pub style: StyleTemplate,
    /// Werkzeug-Overlay, wird über den Layern gezeichnet
    pub overlay: ToolOverlay,
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Laufzeit-Optionen für Overlay-Farben und -Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob der Layer selektiert ist.
    pub fn is_selected(&self, id: &LayerId) -> bool {
        self.selected.as_ref() == Some(id)
    }
}
