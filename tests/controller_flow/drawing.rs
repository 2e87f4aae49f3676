use super::{click, double_click, toggle};
use floorplan_editor::{AppController, AppState, EditorTool, LayerGeometry, LayerKind, ToolMode};

#[test]
fn draw_room_normalizes_corners() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    toggle(&mut controller, &mut state, EditorTool::DrawRoom);
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 5.0, 40.0);

    let rooms: Vec<_> = state.layers.iter().collect();
    assert_eq!(rooms.len(), 1);
    assert_eq!(
        rooms[0].geometry,
        LayerGeometry::Room {
            x: 5.0,
            y: 10.0,
            width: Some(5.0),
            height: Some(30.0),
        }
    );
    assert!(state.editor.mode.is_idle());
}

#[test]
fn lasso_commit_creates_flat_custom_region() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    toggle(&mut controller, &mut state, EditorTool::Lasso);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 10.0, 0.0);
    click(&mut controller, &mut state, 10.0, 10.0);
    double_click(&mut controller, &mut state);

    let region = state.layers.iter().next().expect("Region erwartet");
    assert_eq!(region.kind(), LayerKind::CustomRegion);
    assert_eq!(
        region.geometry,
        LayerGeometry::CustomRegion {
            points: vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0]
        }
    );
    assert!(state.editor.mode.is_idle());
}

#[test]
fn lasso_with_two_points_does_not_commit() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    toggle(&mut controller, &mut state, EditorTool::Lasso);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 10.0, 0.0);
    double_click(&mut controller, &mut state);

    assert!(state.layers.is_empty());
    assert!(matches!(state.editor.mode, ToolMode::Lasso { ref points } if points.len() == 2));
}

#[test]
fn double_click_outside_lasso_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    toggle(&mut controller, &mut state, EditorTool::DrawRoom);
    click(&mut controller, &mut state, 1.0, 1.0);
    double_click(&mut controller, &mut state);

    assert_eq!(
        state.editor.mode,
        ToolMode::DrawRoom {
            anchor: Some(glam::Vec2::ONE)
        }
    );
}
