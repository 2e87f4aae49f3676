//! Maßstab-Kalibrierung: zwei Pixelpunkte + reale Länge → Pixel pro Einheit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gründe, aus denen eine Kalibrierung abgelehnt wird.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalibrationError {
    /// Eingabe ist keine endliche, positive Zahl
    #[error("Ungültige Referenzlänge '{0}': erwartet wird eine positive Zahl")]
    InvalidDistance(String),
    /// Beide Referenzpunkte liegen aufeinander
    #[error("Referenzpunkte liegen aufeinander")]
    DegeneratePoints,
}

/// Parst die vom Benutzer eingegebene reale Länge.
pub fn parse_real_distance(input: &str) -> Result<f32, CalibrationError> {
    let trimmed = input.trim();
    match trimmed.parse::<f32>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(CalibrationError::InvalidDistance(trimmed.to_string())),
    }
}

/// Berechnet das Verhältnis Pixel pro realer Einheit.
///
/// Euklidische Pixeldistanz zwischen `p1` und `p2` geteilt durch `real_value`.
pub fn calibrate(p1: glam::Vec2, p2: glam::Vec2, real_value: f32) -> Result<f32, CalibrationError> {
    if !real_value.is_finite() || real_value <= 0.0 {
        return Err(CalibrationError::InvalidDistance(real_value.to_string()));
    }
    let pixel_distance = p1.distance(p2);
    if pixel_distance <= f32::EPSILON {
        return Err(CalibrationError::DegeneratePoints);
    }
    Ok(pixel_distance / real_value)
}

/// Der einzige prozessweite Maßstab. Fehlt, bis eine Kalibrierung abgeschlossen ist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleCalibration(Option<f32>);

impl ScaleCalibration {
    /// Kalibrierung mit bekanntem Verhältnis (z.B. aus einem gespeicherten Dokument).
    pub fn from_ratio(ratio: Option<f32>) -> Self {
        Self(ratio.filter(|r| r.is_finite() && *r > 0.0))
    }

    /// Pixel pro realer Einheit, falls kalibriert.
    pub fn ratio(&self) -> Option<f32> {
        self.0
    }

    pub fn is_calibrated(&self) -> bool {
        self.0.is_some()
    }

    /// Überschreibt den Maßstab (kein Merge mit dem alten Wert).
    pub fn set(&mut self, ratio: f32) {
        self.0 = Some(ratio);
    }

    /// Rechnet eine Pixellänge in reale Einheiten um.
    pub fn to_real(&self, pixels: f32) -> Option<f32> {
        self.0.map(|ratio| pixels / ratio)
    }
}
