//! Zentrale Konfiguration für den Grundriss-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::style::{rgb, StyleTemplate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Canvas ──────────────────────────────────────────────────────────

/// Canvas-Größe in Pixeln [Breite, Höhe]; das Hintergrundbild wird darauf gestreckt.
pub const CANVAS_SIZE: [f32; 2] = [600.0, 400.0];
/// Ausgabe-Skalierung des Raster-Exports (2 = doppelte Pixeldichte).
pub const EXPORT_PIXEL_RATIO: u32 = 2;

// ── Segmentierung ───────────────────────────────────────────────────

/// Anzeigedauer des Done-Zustands, danach zurück auf Idle.
pub const SEGMENTATION_DONE_DISPLAY_SECS: f32 = 2.0;
/// Verzögerung der Platzhalter-Segmentierung.
pub const CANNED_SEGMENTATION_DELAY_MS: u64 = 1500;

// ── Overlays ────────────────────────────────────────────────────────

/// Radius der Kalibrier- und Lasso-Punkte in Canvas-Pixeln.
pub const OVERLAY_POINT_RADIUS: f32 = 5.0;
/// Linienstärke der Werkzeug-Overlays.
pub const OVERLAY_LINE_WIDTH: f32 = 2.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `floorplan_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Größe in Pixeln
    pub canvas_size: [f32; 2],
    /// Skalierung des Raster-Exports
    pub export_pixel_ratio: u32,
    /// Verzeichnis, in dem `/uploads/...`-URLs liegen
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    // ── Segmentierung ───────────────────────────────────────────
    /// Anzeigedauer von "Done" in Sekunden
    pub segmentation_done_display_secs: f32,

    // ── Overlays ────────────────────────────────────────────────
    /// Radius der Overlay-Punkte
    pub overlay_point_radius: f32,
    /// Linienstärke der Overlays
    pub overlay_line_width: f32,
    /// Farbe der Kalibrier-Punkte und -Linie
    pub scale_overlay_color: [f32; 4],
    /// Farbe des Raum-Ankers
    pub draw_anchor_color: [f32; 4],
    /// Farbe der Lasso-Punkte und -Kontur
    pub lasso_overlay_color: [f32; 4],

    // ── Styles ──────────────────────────────────────────────────
    /// Name des aktiven Style-Templates
    pub style_template: String,
    /// Zusätzliche, benutzerdefinierte Templates (überschreiben gleichnamige eingebaute)
    #[serde(default)]
    pub custom_templates: Vec<StyleTemplate>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            export_pixel_ratio: EXPORT_PIXEL_RATIO,
            uploads_dir: default_uploads_dir(),
            segmentation_done_display_secs: SEGMENTATION_DONE_DISPLAY_SECS,
            overlay_point_radius: OVERLAY_POINT_RADIUS,
            overlay_line_width: OVERLAY_LINE_WIDTH,
            scale_overlay_color: rgb(0xef, 0x44, 0x44),
            draw_anchor_color: rgb(0x3b, 0x82, 0xf6),
            lasso_overlay_color: rgb(0x10, 0xb9, 0x81),
            style_template: "classic".into(),
            custom_templates: Vec::new(),
        }
    }
}

/// Serde-Default für `uploads_dir` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_uploads_dir() -> PathBuf {
    PathBuf::from("public/uploads")
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floorplan-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floorplan_editor.toml")
    }

    /// Sucht ein Template per Name: benutzerdefinierte zuerst, dann eingebaute.
    pub fn find_template(&self, name: &str) -> Option<StyleTemplate> {
        self.custom_templates
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .or_else(|| StyleTemplate::builtin().into_iter().find(|t| t.name == name))
    }

    /// Aktives Style-Template; unbekannte Namen fallen auf "classic" zurück.
    pub fn active_style(&self) -> StyleTemplate {
        self.find_template(&self.style_template).unwrap_or_else(|| {
            log::warn!(
                "Style-Template '{}' unbekannt, verwende 'classic'",
                self.style_template
            );
            StyleTemplate::classic()
        })
    }

    /// Anzeigedauer von "Done" als `Duration` (negative Werte → 0).
    pub fn segmentation_done_display(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(self.segmentation_done_display_secs.max(0.0))
    }
}
