use glam::Vec2;

/// Armierbare Editor-Werkzeuge (Toolbar-Schalter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorTool {
    /// Maßstab über zwei Punkte und eine eingegebene Distanz
    ManualScale,
    /// Maßstab über ein Text-Label mit Maßangabe
    AutoScale,
    /// Raum per Zwei-Klick-Rechteck zeichnen
    DrawRoom,
    /// Freiform-Region per Punktliste
    Lasso,
}

/// Phase des AutoScale-Werkzeugs
#[derive(Debug, Clone, PartialEq)]
pub enum AutoScalePhase {
    /// Wartet auf Klick auf ein Text-Label mit Maßangabe
    AwaitingDimension,
    /// Maß erkannt, wartet auf die zwei Referenzpunkte
    AwaitingPoints { real_value: f32, first: Option<Vec2> },
}

/// Aktiver Werkzeug-Modus inklusive Zwischenständen.
///
/// Genau ein Modus ist aktiv; Punkte leben nur im jeweiligen Modus,
/// ein Wechsel verwirft sie automatisch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToolMode {
    #[default]
    Idle,
    ManualScale { first: Option<Vec2> },
    AutoScale(AutoScalePhase),
    DrawRoom { anchor: Option<Vec2> },
    Lasso { points: Vec<Vec2> },
}

impl ToolMode {
    /// Frisch armierter Modus für ein Werkzeug (ohne Punkte).
    pub fn armed(tool: EditorTool) -> Self {
        match tool {
            EditorTool::ManualScale => Self::ManualScale { first: None },
            EditorTool::AutoScale => Self::AutoScale(AutoScalePhase::AwaitingDimension),
            EditorTool::DrawRoom => Self::DrawRoom { anchor: None },
            EditorTool::Lasso => Self::Lasso { points: Vec::new() },
        }
    }

    /// Werkzeug, zu dem der Modus gehört (`None` im Idle).
    pub fn tool(&self) -> Option<EditorTool> {
        match self {
            Self::Idle => None,
            Self::ManualScale { .. } => Some(EditorTool::ManualScale),
            Self::AutoScale(_) => Some(EditorTool::AutoScale),
            Self::DrawRoom { .. } => Some(EditorTool::DrawRoom),
            Self::Lasso { .. } => Some(EditorTool::Lasso),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktiver Modus
    pub mode: ToolMode,
}

impl EditorToolState {
    /// Erstellt den Standard-Zustand (Idle).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt das armierte Werkzeug zurück.
    pub fn active_tool(&self) -> Option<EditorTool> {
        self.mode.tool()
    }
}
