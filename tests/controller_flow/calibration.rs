use super::{click, toggle, FixedSegmentation};
use approx::assert_relative_eq;
use floorplan_editor::{
    AppController, AppIntent, AppState, EditorTool, FloorPlanDocument, FloorPlanRef, Layer,
    ToolMode,
};
use floorplan_editor::app::AutoScalePhase;
use glam::Vec2;

fn enter_distance(controller: &mut AppController, state: &mut AppState, input: &str) {
    controller
        .handle_intent(
            state,
            AppIntent::ScaleDistanceEntered {
                input: input.to_string(),
            },
        )
        .expect("ScaleDistanceEntered sollte durchlaufen");
}

#[test]
fn manual_scale_two_points_and_distance_sets_ratio() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    toggle(&mut controller, &mut state, EditorTool::ManualScale);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 100.0, 0.0);

    assert!(state.editor.mode.is_idle());
    assert!(state.ui.scale_prompt.is_some());

    enter_distance(&mut controller, &mut state, "2.0");

    assert_relative_eq!(state.calibration.ratio().expect("Maßstab erwartet"), 50.0);
    assert!(state.ui.scale_prompt.is_none());
}

#[test]
fn manual_scale_invalid_input_keeps_previous_ratio() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.calibration.set(7.5);

    toggle(&mut controller, &mut state, EditorTool::ManualScale);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 100.0, 0.0);
    enter_distance(&mut controller, &mut state, "zwei Meter");

    assert_eq!(state.calibration.ratio(), Some(7.5));
    assert!(state.ui.status_message.is_some());
    assert!(state.ui.scale_prompt.is_none());
}

#[test]
fn manual_scale_cancel_closes_prompt_without_change() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    toggle(&mut controller, &mut state, EditorTool::ManualScale);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 10.0, 0.0);
    controller
        .handle_intent(&mut state, AppIntent::ScaleDistanceCancelled)
        .expect("ScaleDistanceCancelled sollte durchlaufen");

    assert!(state.ui.scale_prompt.is_none());
    assert!(!state.calibration.is_calibrated());
}

#[test]
fn auto_scale_reads_dimension_label_then_calibrates() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let label = state
        .layers
        .add(Layer::text("12'-0\"", Vec2::new(120.0, 90.0)));

    toggle(&mut controller, &mut state, EditorTool::AutoScale);
    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerClicked {
                layer_id: label,
                pointer: Vec2::new(120.0, 90.0),
            },
        )
        .expect("LayerClicked sollte durchlaufen");

    assert_eq!(
        state.editor.mode,
        ToolMode::AutoScale(AutoScalePhase::AwaitingPoints {
            real_value: 12.0,
            first: None
        })
    );

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 50.0, 0.0);

    assert!(state.editor.mode.is_idle());
    assert_relative_eq!(
        state.calibration.ratio().expect("Maßstab erwartet"),
        4.1667,
        epsilon = 1e-3
    );
}

#[test]
fn auto_scale_ignores_non_text_layers_and_canvas_clicks() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let room = state
        .layers
        .add(Layer::room("12 ft", Vec2::ZERO, Vec2::splat(10.0)));

    toggle(&mut controller, &mut state, EditorTool::AutoScale);
    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerClicked {
                layer_id: room,
                pointer: Vec2::ZERO,
            },
        )
        .expect("LayerClicked sollte durchlaufen");
    click(&mut controller, &mut state, 5.0, 5.0);

    assert_eq!(
        state.editor.mode,
        ToolMode::AutoScale(AutoScalePhase::AwaitingDimension)
    );
    assert!(state.layers.selected().is_none());
    assert!(!state.calibration.is_calibrated());
}

fn open_manual_scale_prompt(controller: &mut AppController, state: &mut AppState) {
    toggle(controller, state, EditorTool::ManualScale);
    click(controller, state, 0.0, 0.0);
    click(controller, state, 100.0, 0.0);
    assert!(state.ui.scale_prompt.is_some());
}

#[test]
fn loading_document_discards_open_scale_prompt() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join(format!(
        "floorplan-editor-{}-{}-scaled.json",
        std::process::id(),
        uuid::Uuid::new_v4()
    ));
    let document = FloorPlanDocument {
        floor_plan: None,
        layers: vec![Layer::room("Bad", Vec2::ZERO, Vec2::splat(20.0))],
        scale: Some(7.0),
    };
    std::fs::write(&path, document.to_json().expect("JSON")).expect("Dokument schreiben");

    open_manual_scale_prompt(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::DocumentOpenRequested { path: path.clone() })
        .expect("DocumentOpenRequested sollte durchlaufen");

    assert!(state.ui.scale_prompt.is_none());
    assert_eq!(state.calibration.ratio(), Some(7.0));

    enter_distance(&mut controller, &mut state, "2");

    assert_eq!(state.calibration.ratio(), Some(7.0));
    let _ = std::fs::remove_file(path);
}

#[test]
fn segmentation_request_discards_open_scale_prompt() {
    let mut controller =
        AppController::with_segmentation_service(Box::new(FixedSegmentation::new(Ok(vec![]))));
    let mut state = AppState::new();
    state.floor_plan = Some(FloorPlanRef {
        id: "fp1".into(),
        name: "Erdgeschoss".into(),
        image_url: "https://example.invalid/eg.png".into(),
    });
    state.calibration.set(7.0);

    open_manual_scale_prompt(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::SegmentationRequested)
        .expect("SegmentationRequested sollte durchlaufen");
    enter_distance(&mut controller, &mut state, "2");

    assert!(state.ui.scale_prompt.is_none());
    assert_eq!(state.calibration.ratio(), Some(7.0));
}
