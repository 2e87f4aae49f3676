use super::super::state::EditorTool;
use crate::core::{FloorPlanRef, LayerId};
use glam::Vec2;
use std::path::PathBuf;
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Werkzeug frisch armieren (verwirft laufende Gesten)
    ArmTool { tool: EditorTool },
    /// Zurück in den Idle-Modus
    ResetToolMode,
    /// ManualScale: Referenzpunkt setzen
    ManualScalePickPoint { pos: Vec2 },
    /// Eingegebene reale Distanz auf den offenen Dialog anwenden
    ApplyScaleDistance { input: String },
    /// Distanz-Dialog schließen
    CloseScalePrompt,
    /// AutoScale: Maßangabe aus einem Layer-Namen lesen
    AutoScaleExtractDimension { layer_id: LayerId },
    /// AutoScale: Referenzpunkt setzen
    AutoScalePickPoint { pos: Vec2 },
    /// DrawRoom: Eckpunkt setzen
    DrawRoomPickPoint { pos: Vec2 },
    /// Lasso: Punkt anhängen
    LassoAddPoint { pos: Vec2 },
    /// Lasso als CustomRegion übernehmen
    LassoCommit,
    /// Selektion aufheben
    ClearSelection,
    /// Umbenennungs-Feld schließen
    CloseRenameAffordance,
    /// Layer selektieren
    SelectLayer { layer_id: LayerId },
    /// Umbenennungs-Feld am Zeiger öffnen
    OpenRenameAffordance { layer_id: LayerId, anchor: Vec2 },
    /// Layer umbenennen
    RenameLayer { layer_id: LayerId, name: String },
    /// Selektierten Layer entfernen
    DeleteSelectedLayer,
    /// Segmentierung starten
    StartSegmentation,
    /// Segmentierungsergebnis und Anzeigedauer prüfen
    PollSegmentation { now: Instant },
    /// Style-Template setzen
    SetStyleTemplate { name: String },
    /// Grundriss öffnen und Hintergrundbild laden
    OpenFloorPlan { floor_plan: FloorPlanRef },
    /// JSON-Dokument laden
    LoadDocument { path: PathBuf },
    /// PNG-Export
    ExportImage { path: PathBuf },
    /// JSON-Export
    ExportJson { path: PathBuf },
    /// CSV-Export
    ExportCsv { path: PathBuf },
}
