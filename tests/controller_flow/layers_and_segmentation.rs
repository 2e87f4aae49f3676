use super::{click, toggle, FixedSegmentation};
use floorplan_editor::app::segmentation::demo_layers;
use floorplan_editor::app::SegmentationError;
use floorplan_editor::{
    AppController, AppIntent, AppState, EditorTool, FloorPlanRef, Layer, LayerId,
    SegmentationStatus,
};
use glam::Vec2;
use std::collections::HashSet;
use std::time::{Duration, Instant};

fn open_plan(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(
            state,
            AppIntent::FloorPlanOpened {
                floor_plan: FloorPlanRef {
                    id: "fp1".into(),
                    name: "Erdgeschoss".into(),
                    image_url: "https://example.com/eg.png".into(),
                },
            },
        )
        .expect("FloorPlanOpened sollte durchlaufen");
}

fn tick(controller: &mut AppController, state: &mut AppState, now: Instant) {
    controller
        .handle_intent(state, AppIntent::Tick { now })
        .expect("Tick sollte durchlaufen");
}

fn select_via_click(controller: &mut AppController, state: &mut AppState, id: &LayerId) {
    controller
        .handle_intent(
            state,
            AppIntent::LayerClicked {
                layer_id: id.clone(),
                pointer: Vec2::new(1.0, 2.0),
            },
        )
        .expect("LayerClicked sollte durchlaufen");
}

#[test]
fn rename_commit_updates_layer_and_closes_affordance() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = state
        .layers
        .add(Layer::room("Room 1", Vec2::ZERO, Vec2::ONE));

    select_via_click(&mut controller, &mut state, &id);
    assert_eq!(
        state.ui.rename.as_ref().map(|r| r.draft.as_str()),
        Some("Room 1")
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::RenameCommitted {
                name: "Küche".into(),
            },
        )
        .expect("RenameCommitted sollte durchlaufen");

    assert_eq!(state.layers.find(&id).map(|l| l.name.as_str()), Some("Küche"));
    assert!(state.ui.rename.is_none());
}

#[test]
fn blank_rename_keeps_old_name() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = state
        .layers
        .add(Layer::room("Room 1", Vec2::ZERO, Vec2::ONE));

    select_via_click(&mut controller, &mut state, &id);
    controller
        .handle_intent(&mut state, AppIntent::RenameCommitted { name: " ".into() })
        .expect("RenameCommitted sollte durchlaufen");

    assert_eq!(state.layers.find(&id).map(|l| l.name.as_str()), Some("Room 1"));
    assert!(state.ui.rename.is_none());
}

#[test]
fn delete_selected_layer_removes_only_that_layer() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let keep = state.layers.add(Layer::text("A", Vec2::ZERO));
    let drop = state.layers.add(Layer::text("B", Vec2::ZERO));

    select_via_click(&mut controller, &mut state, &drop);
    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedLayerRequested)
        .expect("DeleteSelectedLayerRequested sollte durchlaufen");

    assert!(state.layers.find(&drop).is_none());
    assert!(state.layers.find(&keep).is_some());
    assert!(state.layers.selected().is_none());
    assert!(state.ui.rename.is_none());
}

#[test]
fn ids_stay_unique_across_add_and_remove() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for round in 0..10 {
        toggle(&mut controller, &mut state, EditorTool::DrawRoom);
        click(&mut controller, &mut state, 0.0, 0.0);
        click(&mut controller, &mut state, 10.0 + round as f32, 10.0);

        if round % 3 == 0 {
            let first = state.layers.iter().next().map(|l| l.id.clone());
            if let Some(id) = first {
                select_via_click(&mut controller, &mut state, &id);
                controller
                    .handle_intent(&mut state, AppIntent::DeleteSelectedLayerRequested)
                    .expect("Löschen sollte durchlaufen");
            }
        }
    }

    let ids: HashSet<_> = state.layers.iter().map(|l| l.id.clone()).collect();
    assert_eq!(ids.len(), state.layers.len());
    assert_eq!(state.layers.len(), 6);
}

#[test]
fn segmentation_replaces_layers_and_clears_selection() {
    let mut controller = AppController::with_segmentation_service(Box::new(FixedSegmentation::new(
        Ok(demo_layers()),
    )));
    let mut state = AppState::new();
    open_plan(&mut controller, &mut state);
    let old = state.layers.add(Layer::text("alt", Vec2::ZERO));
    select_via_click(&mut controller, &mut state, &old);
    toggle(&mut controller, &mut state, EditorTool::Lasso);

    controller
        .handle_intent(&mut state, AppIntent::SegmentationRequested)
        .expect("SegmentationRequested sollte durchlaufen");
    assert!(state.editor.mode.is_idle());
    assert_eq!(state.segmentation.status, SegmentationStatus::Running);

    let t0 = Instant::now();
    tick(&mut controller, &mut state, t0);

    let ids: Vec<_> = state.layers.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["r1", "w1", "f1", "t1"]);
    assert!(state.layers.selected().is_none());
    assert!(matches!(state.segmentation.status, SegmentationStatus::Done { .. }));

    tick(&mut controller, &mut state, t0 + Duration::from_secs(3));
    assert_eq!(state.segmentation.status, SegmentationStatus::Idle);
}

#[test]
fn segmentation_failure_keeps_layers_and_reports() {
    let mut controller = AppController::with_segmentation_service(Box::new(FixedSegmentation::new(
        Err(SegmentationError::Service("503".into())),
    )));
    let mut state = AppState::new();
    open_plan(&mut controller, &mut state);
    state.layers.add(Layer::text("bleibt", Vec2::ZERO));

    controller
        .handle_intent(&mut state, AppIntent::SegmentationRequested)
        .expect("SegmentationRequested sollte durchlaufen");
    tick(&mut controller, &mut state, Instant::now());

    assert_eq!(state.segmentation.status, SegmentationStatus::Idle);
    assert_eq!(state.layers.len(), 1);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn segmentation_request_while_running_is_ignored() {
    let service = FixedSegmentation::new(Ok(demo_layers()));
    let calls = service.calls();
    let mut controller = AppController::with_segmentation_service(Box::new(service));
    let mut state = AppState::new();
    open_plan(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::SegmentationRequested)
        .expect("erste Anfrage");
    controller
        .handle_intent(&mut state, AppIntent::SegmentationRequested)
        .expect("zweite Anfrage");

    assert_eq!(calls.get(), 1);
    assert_eq!(state.segmentation.status, SegmentationStatus::Running);
}

#[test]
fn segmentation_can_run_again_while_done() {
    let service = FixedSegmentation::new(Ok(demo_layers()));
    let calls = service.calls();
    let mut controller = AppController::with_segmentation_service(Box::new(service));
    let mut state = AppState::new();
    open_plan(&mut controller, &mut state);
    let t0 = Instant::now();

    controller
        .handle_intent(&mut state, AppIntent::SegmentationRequested)
        .expect("erste Anfrage");
    tick(&mut controller, &mut state, t0);
    assert!(matches!(state.segmentation.status, SegmentationStatus::Done { .. }));

    let manual = state.layers.add(Layer::text("nachgetragen", Vec2::ZERO));
    assert_eq!(state.layers.len(), 5);

    controller
        .handle_intent(&mut state, AppIntent::SegmentationRequested)
        .expect("zweite Anfrage");
    assert_eq!(state.segmentation.status, SegmentationStatus::Running);

    tick(&mut controller, &mut state, t0 + Duration::from_millis(500));

    assert_eq!(calls.get(), 2);
    assert_eq!(state.layers.len(), 4);
    assert!(state.layers.find(&manual).is_none());
    assert!(matches!(state.segmentation.status, SegmentationStatus::Done { .. }));
}

#[test]
fn segmentation_without_floor_plan_only_reports() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::SegmentationRequested)
        .expect("SegmentationRequested sollte durchlaufen");

    assert_eq!(state.segmentation.status, SegmentationStatus::Idle);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn canned_segmentation_completes_on_worker_thread() {
    let service = floorplan_editor::CannedSegmentation::new(Duration::from_millis(10));
    let mut controller = AppController::with_segmentation_service(Box::new(service));
    let mut state = AppState::new();
    open_plan(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::SegmentationRequested)
        .expect("SegmentationRequested sollte durchlaufen");

    let deadline = Instant::now() + Duration::from_secs(5);
    while state.segmentation.is_running() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
        tick(&mut controller, &mut state, Instant::now());
    }

    assert_eq!(state.layers.len(), 4);
}
