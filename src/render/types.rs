//! Zeichenprimitive als Ausgabe des Renderers.

use crate::core::LayerId;

/// Ein zeichenbares Element in Canvas-Koordinaten.
///
/// `layer_id` ist bei Overlay-Elementen `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// Achsenparalleles Rechteck (Room, Furniture)
    Rect {
        layer_id: Option<LayerId>,
        origin: glam::Vec2,
        size: glam::Vec2,
        fill: Option<[f32; 4]>,
        stroke: [f32; 4],
        stroke_width: f32,
    },
    /// Offene Linie (Wall, Overlay-Verbindungen)
    Polyline {
        layer_id: Option<LayerId>,
        points: Vec<glam::Vec2>,
        stroke: [f32; 4],
        stroke_width: f32,
    },
    /// Geschlossenes Polygon (CustomRegion)
    Polygon {
        layer_id: Option<LayerId>,
        points: Vec<glam::Vec2>,
        fill: Option<[f32; 4]>,
        stroke: [f32; 4],
        stroke_width: f32,
    },
    /// Textbeschriftung, `position` = obere linke Ecke (Text)
    Label {
        layer_id: Option<LayerId>,
        position: glam::Vec2,
        text: String,
        color: [f32; 4],
        font_size: f32,
    },
    /// Gefüllter Kreis für Werkzeug-Punkte
    Marker {
        center: glam::Vec2,
        radius: f32,
        color: [f32; 4],
    },
}

impl DrawPrimitive {
    /// Zugehöriger Layer, falls das Primitiv keinen Overlay-Anteil darstellt.
    pub fn layer_id(&self) -> Option<&LayerId> {
        match self {
            DrawPrimitive::Rect { layer_id, .. }
            | DrawPrimitive::Polyline { layer_id, .. }
            | DrawPrimitive::Polygon { layer_id, .. }
            | DrawPrimitive::Label { layer_id, .. } => layer_id.as_ref(),
            DrawPrimitive::Marker { .. } => None,
        }
    }

    /// Gibt zurück, ob das Primitiv zu einem Werkzeug-Overlay gehört.
    pub fn is_overlay(&self) -> bool {
        self.layer_id().is_none()
    }
}
