use image::RgbaImage;
use std::sync::Arc;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Dekodiertes Grundriss-Bild (None = kein lokales Bild verfügbar)
    pub background: Option<Arc<RgbaImage>>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
