//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Der Werkzeug-Modus entscheidet, welche Commands ein Klick auslöst.

use super::segmentation::SegmentationStatus;
use super::state::{AutoScalePhase, ToolMode};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ToolToggled { tool } => {
            if state.editor.active_tool() == Some(tool) {
                vec![AppCommand::ResetToolMode]
            } else {
                vec![AppCommand::ArmTool { tool }]
            }
        }
        AppIntent::CanvasClicked { pos } => match &state.editor.mode {
            ToolMode::Idle => vec![
                AppCommand::ClearSelection,
                AppCommand::CloseRenameAffordance,
            ],
            ToolMode::ManualScale { .. } => vec![AppCommand::ManualScalePickPoint { pos }],
            ToolMode::AutoScale(AutoScalePhase::AwaitingDimension) => {
                log::debug!("Canvas-Klick ignoriert: AutoScale wartet auf ein Maß-Label");
                vec![]
            }
            ToolMode::AutoScale(AutoScalePhase::AwaitingPoints { .. }) => {
                vec![AppCommand::AutoScalePickPoint { pos }]
            }
            ToolMode::DrawRoom { .. } => vec![AppCommand::DrawRoomPickPoint { pos }],
            ToolMode::Lasso { .. } => vec![AppCommand::LassoAddPoint { pos }],
        },
        AppIntent::CanvasDoubleClicked { .. } => match &state.editor.mode {
            ToolMode::Lasso { points } if points.len() >= 3 => vec![AppCommand::LassoCommit],
            ToolMode::Lasso { points } => {
                log::debug!(
                    "Lasso-Abschluss ignoriert: {} Punkte, mindestens 3 nötig",
                    points.len()
                );
                vec![]
            }
            _ => vec![],
        },
        AppIntent::LayerClicked { layer_id, pointer } => {
            if state.layers.find(&layer_id).is_none() {
                log::debug!("Layer-Klick auf unbekannten Layer {} ignoriert", layer_id);
                return vec![];
            }
            match &state.editor.mode {
                ToolMode::AutoScale(AutoScalePhase::AwaitingDimension) => {
                    vec![AppCommand::AutoScaleExtractDimension { layer_id }]
                }
                _ => vec![
                    AppCommand::SelectLayer {
                        layer_id: layer_id.clone(),
                    },
                    AppCommand::OpenRenameAffordance {
                        layer_id,
                        anchor: pointer,
                    },
                ],
            }
        }
        AppIntent::RenameCommitted { name } => {
            let Some(rename) = state.ui.rename.as_ref() else {
                log::debug!("Umbenennung ohne offenes Eingabefeld ignoriert");
                return vec![];
            };
            if name.trim().is_empty() {
                log::debug!("Leerer Name für Layer {} ignoriert", rename.layer_id);
                return vec![AppCommand::CloseRenameAffordance];
            }
            vec![
                AppCommand::RenameLayer {
                    layer_id: rename.layer_id.clone(),
                    name,
                },
                AppCommand::CloseRenameAffordance,
            ]
        }
        AppIntent::RenameCancelled => vec![AppCommand::CloseRenameAffordance],
        AppIntent::ScaleDistanceEntered { input } => {
            if state.ui.scale_prompt.is_none() {
                log::debug!("Distanzeingabe ohne offenen Dialog ignoriert");
                return vec![];
            }
            vec![
                AppCommand::ApplyScaleDistance { input },
                AppCommand::CloseScalePrompt,
            ]
        }
        AppIntent::ScaleDistanceCancelled => vec![AppCommand::CloseScalePrompt],
        AppIntent::DeleteSelectedLayerRequested => {
            if state.layers.selected().is_none() {
                return vec![];
            }
            vec![
                AppCommand::DeleteSelectedLayer,
                AppCommand::CloseRenameAffordance,
            ]
        }
        AppIntent::SegmentationRequested => {
            if state.segmentation.is_running() {
                log::debug!("Segmentierung läuft bereits, Anfrage ignoriert");
                vec![]
            } else if state.floor_plan.is_none() {
                // Use-Case meldet den fehlenden Grundriss
                vec![AppCommand::StartSegmentation]
            } else {
                vec![AppCommand::ResetToolMode, AppCommand::StartSegmentation]
            }
        }
        AppIntent::Tick { now } => match state.segmentation.status {
            SegmentationStatus::Idle => vec![],
            _ => vec![AppCommand::PollSegmentation { now }],
        },
        AppIntent::StyleTemplateSelected { name } => vec![AppCommand::SetStyleTemplate { name }],
        AppIntent::FloorPlanOpened { floor_plan } => vec![AppCommand::OpenFloorPlan { floor_plan }],
        AppIntent::DocumentOpenRequested { path } => vec![
            AppCommand::ResetToolMode,
            AppCommand::CloseRenameAffordance,
            AppCommand::LoadDocument { path },
        ],
        AppIntent::ExportImageRequested { path } => vec![AppCommand::ExportImage { path }],
        AppIntent::ExportJsonRequested { path } => vec![AppCommand::ExportJson { path }],
        AppIntent::ExportCsvRequested { path } => vec![AppCommand::ExportCsv { path }],
    }
}
