//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::segmentation::{CannedSegmentation, SegmentationService};
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    segmentation: Box<dyn SegmentationService>,
}

impl AppController {
    /// Erstellt einen Controller mit dem Demo-Segmentierungsdienst.
    pub fn new() -> Self {
        Self::with_segmentation_service(Box::new(CannedSegmentation::default()))
    }

    /// Erstellt einen Controller mit eigenem Segmentierungsdienst.
    pub fn with_segmentation_service(segmentation: Box<dyn SegmentationService>) -> Self {
        Self { segmentation }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Werkzeuge ===
            AppCommand::ArmTool { tool } => handlers::tools::arm(state, tool),
            AppCommand::ResetToolMode => handlers::tools::reset(state),

            // === Kalibrierung ===
            AppCommand::ManualScalePickPoint { pos } => {
                handlers::tools::manual_scale_pick(state, pos)
            }
            AppCommand::ApplyScaleDistance { input } => {
                handlers::tools::apply_scale_distance(state, &input)
            }
            AppCommand::CloseScalePrompt => handlers::tools::close_scale_prompt(state),
            AppCommand::AutoScaleExtractDimension { layer_id } => {
                handlers::tools::auto_scale_extract(state, &layer_id)
            }
            AppCommand::AutoScalePickPoint { pos } => handlers::tools::auto_scale_pick(state, pos),

            // === Zeichnen ===
            AppCommand::DrawRoomPickPoint { pos } => handlers::tools::draw_room_pick(state, pos),
            AppCommand::LassoAddPoint { pos } => handlers::tools::lasso_add(state, pos),
            AppCommand::LassoCommit => handlers::tools::lasso_commit(state),

            // === Layer ===
            AppCommand::ClearSelection => handlers::layers::clear_selection(state),
            AppCommand::CloseRenameAffordance => handlers::layers::close_rename(state),
            AppCommand::SelectLayer { layer_id } => handlers::layers::select(state, &layer_id),
            AppCommand::OpenRenameAffordance { layer_id, anchor } => {
                handlers::layers::open_rename(state, &layer_id, anchor)
            }
            AppCommand::RenameLayer { layer_id, name } => {
                handlers::layers::rename(state, &layer_id, name)
            }
            AppCommand::DeleteSelectedLayer => handlers::layers::delete_selected(state),

            // === Segmentierung ===
            AppCommand::StartSegmentation => {
                handlers::segmentation::start(state, self.segmentation.as_ref())
            }
            AppCommand::PollSegmentation { now } => handlers::segmentation::poll(state, now),

            // === View & Datei-I/O ===
            AppCommand::SetStyleTemplate { name } => {
                handlers::view::set_style_template(state, &name)
            }
            AppCommand::OpenFloorPlan { floor_plan } => {
                handlers::file_io::open_floor_plan(state, floor_plan)
            }
            AppCommand::LoadDocument { path } => handlers::file_io::load_document(state, &path),

            // === Export ===
            AppCommand::ExportImage { path } => handlers::export::image(state, &path),
            AppCommand::ExportJson { path } => handlers::export::json(state, &path),
            AppCommand::ExportCsv { path } => handlers::export::csv(state, &path),
        }

        Ok(())
    }

    /// Baut die RenderScene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}
