//! Werkzeugwechsel: armieren und zurücksetzen.

use crate::app::state::{EditorTool, ToolMode};
use crate::app::AppState;

/// Armiert ein Werkzeug frisch. Laufende Gesten, ein offener Distanz-Dialog
/// und eine offene Umbenennung werden verworfen.
pub fn arm_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.mode = ToolMode::armed(tool);
    state.ui.scale_prompt = None;
    state.ui.rename = None;
    log::info!("Werkzeug armiert: {:?}", tool);
}

/// Setzt den Modus auf Idle; gesammelte Punkte gehen verloren.
///
/// Ein offener Distanz-Dialog gehört noch zur ManualScale-Geste und wird
/// ebenfalls verworfen.
pub fn reset_tool_mode(state: &mut AppState) {
    if !state.editor.mode.is_idle() {
        log::info!("Werkzeug {:?} deaktiviert", state.editor.active_tool());
    }
    if state.ui.scale_prompt.take().is_some() {
        log::debug!("Offener Distanz-Dialog verworfen");
    }
    state.editor.mode = ToolMode::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{RenameAffordance, ScalePrompt};
    use crate::core::LayerId;
    use glam::Vec2;

    #[test]
    fn arming_discards_points_and_affordances() {
        let mut state = AppState::new();
        state.editor.mode = ToolMode::Lasso {
            points: vec![Vec2::ZERO, Vec2::ONE],
        };
        state.ui.scale_prompt = Some(ScalePrompt {
            points: [Vec2::ZERO, Vec2::X],
            pixel_distance: 1.0,
        });
        state.ui.rename = Some(RenameAffordance {
            layer_id: LayerId::new("a"),
            draft: "A".into(),
            anchor: Vec2::ZERO,
        });

        arm_tool(&mut state, EditorTool::Lasso);

        assert_eq!(state.editor.mode, ToolMode::Lasso { points: vec![] });
        assert!(state.ui.scale_prompt.is_none());
        assert!(state.ui.rename.is_none());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut state = AppState::new();
        state.editor.mode = ToolMode::armed(EditorTool::DrawRoom);

        reset_tool_mode(&mut state);

        assert!(state.editor.mode.is_idle());
    }

    #[test]
    fn reset_discards_pending_scale_prompt() {
        let mut state = AppState::new();
        state.ui.scale_prompt = Some(ScalePrompt {
            points: [Vec2::ZERO, Vec2::new(100.0, 0.0)],
            pixel_distance: 100.0,
        });

        reset_tool_mode(&mut state);

        assert!(state.editor.mode.is_idle());
        assert!(state.ui.scale_prompt.is_none());
    }
}
