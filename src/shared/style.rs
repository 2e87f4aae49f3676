//! Style-Templates: benannte Paletten, die nur beim Rendern angewendet werden.

use serde::{Deserialize, Serialize};

/// Wandelt 8-Bit-RGB in eine RGBA-Farbe im Bereich 0.0–1.0.
pub fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    rgba(r, g, b, 1.0)
}

/// Wie [`rgb`], mit expliziter Deckkraft.
pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha]
}

/// Darstellung einer Layer-Art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// Füllfarbe (None = keine Füllung); bei Text die Schriftfarbe
    #[serde(default)]
    pub fill: Option<[f32; 4]>,
    /// Füll- bzw. Hervorhebungsfarbe bei Selektion
    #[serde(default)]
    pub selected_fill: Option<[f32; 4]>,
    /// Linienfarbe
    pub stroke: [f32; 4],
    /// Linienstärke in Canvas-Pixeln
    pub stroke_width: f32,
}

impl LayerStyle {
    /// Füllfarbe abhängig vom Selektionszustand.
    pub fn fill_for(&self, selected: bool) -> Option<[f32; 4]> {
        if selected {
            self.selected_fill.or(self.fill)
        } else {
            self.fill
        }
    }
}

/// Benannte Palette mit einem Style pro Layer-Art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleTemplate {
    pub name: String,
    pub room: LayerStyle,
    pub furniture: LayerStyle,
    pub wall: LayerStyle,
    pub custom_region: LayerStyle,
    pub text: LayerStyle,
    /// Schriftgröße für Text-Layer in Canvas-Pixeln
    pub font_size: f32,
}

impl StyleTemplate {
    /// Standard-Palette (hellblaue Räume, indigo Wände).
    pub fn classic() -> Self {
        Self {
            name: "classic".into(),
            room: LayerStyle {
                fill: Some(rgb(0xe0, 0xe7, 0xef)),
                selected_fill: Some(rgb(0xc7, 0xe0, 0xff)),
                stroke: rgb(0x3b, 0x82, 0xf6),
                stroke_width: 2.0,
            },
            furniture: LayerStyle {
                fill: Some(rgb(0xf3, 0xf4, 0xf6)),
                selected_fill: Some(rgb(0xfe, 0xf0, 0x8a)),
                stroke: rgb(0xf5, 0x9e, 0x42),
                stroke_width: 2.0,
            },
            wall: LayerStyle {
                fill: None,
                selected_fill: Some(rgb(0xa5, 0xb4, 0xfc)),
                stroke: rgb(0x63, 0x66, 0xf1),
                stroke_width: 4.0,
            },
            custom_region: LayerStyle {
                fill: Some(rgba(0x10, 0xb9, 0x81, 0.2)),
                selected_fill: Some(rgba(0x10, 0xb9, 0x81, 0.45)),
                stroke: rgb(0x05, 0x96, 0x69),
                stroke_width: 2.0,
            },
            text: LayerStyle {
                fill: Some(rgb(0x22, 0x22, 0x22)),
                selected_fill: Some(rgb(0x25, 0x63, 0xeb)),
                stroke: rgb(0x22, 0x22, 0x22),
                stroke_width: 0.0,
            },
            font_size: 18.0,
        }
    }

    /// Weiße Linien auf Blaupausen-Blau.
    pub fn blueprint() -> Self {
        let line = rgb(0xf8, 0xfa, 0xfc);
        let highlight = rgba(0x93, 0xc5, 0xfd, 0.6);
        Self {
            name: "blueprint".into(),
            room: LayerStyle {
                fill: Some(rgba(0x1e, 0x3a, 0x8a, 0.85)),
                selected_fill: Some(highlight),
                stroke: line,
                stroke_width: 2.0,
            },
            furniture: LayerStyle {
                fill: Some(rgba(0x1e, 0x40, 0xaf, 0.85)),
                selected_fill: Some(highlight),
                stroke: line,
                stroke_width: 1.0,
            },
            wall: LayerStyle {
                fill: None,
                selected_fill: Some(rgb(0x93, 0xc5, 0xfd)),
                stroke: line,
                stroke_width: 4.0,
            },
            custom_region: LayerStyle {
                fill: Some(rgba(0x3b, 0x82, 0xf6, 0.3)),
                selected_fill: Some(highlight),
                stroke: line,
                stroke_width: 2.0,
            },
            text: LayerStyle {
                fill: Some(line),
                selected_fill: Some(rgb(0xfd, 0xe0, 0x47)),
                stroke: line,
                stroke_width: 0.0,
            },
            font_size: 18.0,
        }
    }

    /// Graustufen für Druck.
    pub fn monochrome() -> Self {
        let black = rgb(0x11, 0x11, 0x11);
        let selected = rgb(0xbd, 0xbd, 0xbd);
        let plain = LayerStyle {
            fill: Some(rgb(0xf5, 0xf5, 0xf5)),
            selected_fill: Some(selected),
            stroke: black,
            stroke_width: 2.0,
        };
        Self {
            name: "monochrome".into(),
            room: plain.clone(),
            furniture: LayerStyle {
                stroke_width: 1.0,
                ..plain.clone()
            },
            wall: LayerStyle {
                fill: None,
                selected_fill: Some(rgb(0x75, 0x75, 0x75)),
                stroke: black,
                stroke_width: 4.0,
            },
            custom_region: LayerStyle {
                fill: Some(rgba(0x00, 0x00, 0x00, 0.1)),
                selected_fill: Some(rgba(0x00, 0x00, 0x00, 0.25)),
                stroke: black,
                stroke_width: 2.0,
            },
            text: LayerStyle {
                fill: Some(black),
                selected_fill: Some(rgb(0x61, 0x61, 0x61)),
                stroke: black,
                stroke_width: 0.0,
            },
            font_size: 18.0,
        }
    }

    /// Alle eingebauten Templates.
    pub fn builtin() -> Vec<Self> {
        vec![Self::classic(), Self::blueprint(), Self::monochrome()]
    }
}

impl Default for StyleTemplate {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_fill_falls_back_to_fill() {
        let style = LayerStyle {
            fill: Some([1.0, 0.0, 0.0, 1.0]),
            selected_fill: None,
            stroke: [0.0; 4],
            stroke_width: 1.0,
        };
        assert_eq!(style.fill_for(true), style.fill);
    }

    #[test]
    fn builtin_template_names_are_unique() {
        let names: Vec<String> = StyleTemplate::builtin().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["classic", "blueprint", "monochrome"]);
    }
}
