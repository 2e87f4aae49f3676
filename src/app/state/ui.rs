use crate::core::LayerId;
use glam::Vec2;

/// Inline-Umbenennung eines Layers, verankert an der Klickposition.
#[derive(Debug, Clone, PartialEq)]
pub struct RenameAffordance {
    pub layer_id: LayerId,
    /// Vorbelegter Name
    pub draft: String,
    pub anchor: Vec2,
}

/// Offener Distanz-Dialog nach zwei ManualScale-Punkten.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalePrompt {
    pub points: [Vec2; 2],
    /// Euklidische Distanz der Punkte in Pixeln
    pub pixel_distance: f32,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktive Umbenennung (None = geschlossen)
    pub rename: Option<RenameAffordance>,
    /// Offener Distanz-Dialog (None = geschlossen)
    pub scale_prompt: Option<ScalePrompt>,
    /// Temporäre Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt eine Statusmeldung.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
