//! Layer-Datenmodell: eine platzierte Annotation auf dem Grundriss.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stabile, kollisionsfreie Layer-ID.
///
/// Lokal erzeugte Layer bekommen eine UUID v4, Layer aus einer Segmentierung
/// behalten ihre externe ID, solange sie eindeutig ist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    /// Erzeugt eine neue, zufällige ID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Übernimmt eine vorhandene ID unverändert.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Gibt die ID als String-Slice zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leere IDs gelten als fehlend und werden beim Einfügen neu vergeben.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Art eines Layers ohne Geometrie (für Benennung, Styles, Filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Room,
    Furniture,
    Wall,
    CustomRegion,
    Text,
}

impl LayerKind {
    /// Präfix für automatisch vergebene Layer-Namen.
    pub fn name_prefix(self) -> &'static str {
        match self {
            LayerKind::Room => "Room",
            LayerKind::Furniture => "Furniture",
            LayerKind::Wall => "Wall",
            LayerKind::CustomRegion => "Region",
            LayerKind::Text => "Text",
        }
    }
}

/// Variantenspezifische Geometrie eines Layers.
///
/// Wall und CustomRegion speichern ihre Punkte flach als `[x0, y0, x1, y1, …]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LayerGeometry {
    Room {
        x: f32,
        y: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
    },
    Furniture {
        x: f32,
        y: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
    },
    Wall {
        #[serde(default)]
        points: Vec<f32>,
    },
    CustomRegion {
        #[serde(default)]
        points: Vec<f32>,
    },
    /// Beschriftung; der angezeigte Text ist der Layer-Name.
    Text { x: f32, y: f32 },
}

impl LayerGeometry {
    /// Gibt die Layer-Art dieser Geometrie zurück.
    pub fn kind(&self) -> LayerKind {
        match self {
            LayerGeometry::Room { .. } => LayerKind::Room,
            LayerGeometry::Furniture { .. } => LayerKind::Furniture,
            LayerGeometry::Wall { .. } => LayerKind::Wall,
            LayerGeometry::CustomRegion { .. } => LayerKind::CustomRegion,
            LayerGeometry::Text { .. } => LayerKind::Text,
        }
    }
}

/// Eine platzierte Annotation. Layer referenzieren sich nie gegenseitig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(default = "empty_layer_id")]
    pub id: LayerId,
    pub name: String,
    #[serde(flatten)]
    pub geometry: LayerGeometry,
}

fn empty_layer_id() -> LayerId {
    LayerId::new("")
}

impl Layer {
    /// Erstellt einen Layer mit leerer ID; die ID vergibt der `LayerStore`.
    pub fn new(name: impl Into<String>, geometry: LayerGeometry) -> Self {
        Self {
            id: empty_layer_id(),
            name: name.into(),
            geometry,
        }
    }

    /// Setzt eine explizite ID (z.B. für Segmentierungsergebnisse).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = LayerId::new(id);
        self
    }

    /// Achsenparalleler Raum mit Ursprung oben links.
    pub fn room(name: impl Into<String>, origin: glam::Vec2, size: glam::Vec2) -> Self {
        Self::new(
            name,
            LayerGeometry::Room {
                x: origin.x,
                y: origin.y,
                width: Some(size.x),
                height: Some(size.y),
            },
        )
    }

    /// Möbelstück als Rechteck.
    pub fn furniture(name: impl Into<String>, origin: glam::Vec2, size: glam::Vec2) -> Self {
        Self::new(
            name,
            LayerGeometry::Furniture {
                x: origin.x,
                y: origin.y,
                width: Some(size.x),
                height: Some(size.y),
            },
        )
    }

    /// Wand als offene Polylinie.
    pub fn wall(name: impl Into<String>, points: &[glam::Vec2]) -> Self {
        Self::new(
            name,
            LayerGeometry::Wall {
                points: flatten_points(points),
            },
        )
    }

    /// Freiform-Region als geschlossenes Polygon.
    pub fn custom_region(name: impl Into<String>, points: &[glam::Vec2]) -> Self {
        Self::new(
            name,
            LayerGeometry::CustomRegion {
                points: flatten_points(points),
            },
        )
    }

    /// Text-Label an einer Position.
    pub fn text(label: impl Into<String>, position: glam::Vec2) -> Self {
        Self::new(
            label,
            LayerGeometry::Text {
                x: position.x,
                y: position.y,
            },
        )
    }

    pub fn kind(&self) -> LayerKind {
        self.geometry.kind()
    }
}

/// Wandelt eine Punktliste in die flache `[x, y, x, y, …]`-Darstellung.
pub fn flatten_points(points: &[glam::Vec2]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Wandelt flache Koordinaten zurück in Punkte. Ein überzähliger Wert wird ignoriert.
pub fn unflatten_points(flat: &[f32]) -> Vec<glam::Vec2> {
    flat.chunks_exact(2)
        .map(|pair| glam::Vec2::new(pair[0], pair[1]))
        .collect()
}
