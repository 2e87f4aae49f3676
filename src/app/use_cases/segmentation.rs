//! Segmentierung anstoßen, Ergebnis übernehmen, Done-Anzeige zurücksetzen.

use crate::app::segmentation::{SegmentationRequest, SegmentationService, SegmentationStatus};
use crate::app::AppState;
use std::time::Instant;

/// Startet einen Segmentierungsaufruf für den geöffneten Grundriss.
///
/// Ohne Grundriss oder während eines laufenden Aufrufs passiert nichts
/// (außer einer Statusmeldung).
pub fn start_segmentation(state: &mut AppState, service: &dyn SegmentationService) {
    if state.segmentation.is_running() {
        log::debug!("Segmentierung läuft bereits");
        return;
    }
    let Some(floor_plan) = state.floor_plan.as_ref() else {
        log::warn!("Segmentierung ohne geöffneten Grundriss angefordert");
        state.ui.set_status("Kein Grundriss geöffnet");
        return;
    };

    let request = SegmentationRequest {
        image_url: floor_plan.image_url.clone(),
    };
    log::info!("Starte Segmentierung für '{}'", floor_plan.name);
    state.segmentation.pending = Some(service.segment(request));
    state.segmentation.status = SegmentationStatus::Running;
    state.ui.set_status("Segmentierung läuft…");
}

/// Fragt ein laufendes Ergebnis ab bzw. beendet die Done-Anzeige.
pub fn poll_segmentation(state: &mut AppState, now: Instant) {
    match state.segmentation.status {
        SegmentationStatus::Idle => {}
        SegmentationStatus::Running => poll_running(state, now),
        SegmentationStatus::Done { finished_at } => {
            if now.saturating_duration_since(finished_at)
                >= state.options.segmentation_done_display()
            {
                state.segmentation.status = SegmentationStatus::Idle;
                log::debug!("Segmentierungsanzeige zurückgesetzt");
            }
        }
    }
}

fn poll_running(state: &mut AppState, now: Instant) {
    let Some(pending) = state.segmentation.pending.as_ref() else {
        log::warn!("Segmentierung im Status Running ohne offenen Aufruf");
        state.segmentation.status = SegmentationStatus::Idle;
        return;
    };
    let Some(result) = pending.poll() else {
        return;
    };
    state.segmentation.pending = None;

    match result {
        Ok(layers) => {
            let count = state.layers.replace_all(layers);
            state.ui.rename = None;
            state.segmentation.status = SegmentationStatus::Done { finished_at: now };
            state.ui.set_status(format!("Segmentierung abgeschlossen: {count} Layer"));
            log::info!("Segmentierung übernommen: {} Layer", count);
        }
        Err(e) => {
            log::error!("Segmentierung fehlgeschlagen: {}", e);
            state.segmentation.status = SegmentationStatus::Idle;
            state.ui.set_status(format!("Segmentierung fehlgeschlagen: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::segmentation::{demo_layers, PendingSegmentation, SegmentationError};
    use crate::core::{FloorPlanRef, Layer};
    use glam::Vec2;
    use std::time::Duration;

    struct Fixed(Result<Vec<Layer>, SegmentationError>);

    impl SegmentationService for Fixed {
        fn segment(&self, _request: SegmentationRequest) -> PendingSegmentation {
            PendingSegmentation::ready(self.0.clone())
        }
    }

    fn state_with_plan() -> AppState {
        let mut state = AppState::new();
        state.floor_plan = Some(FloorPlanRef {
            id: "fp1".into(),
            name: "Erdgeschoss".into(),
            image_url: "/uploads/eg.png".into(),
        });
        state
    }

    #[test]
    fn missing_floor_plan_does_not_dispatch() {
        let mut state = AppState::new();

        start_segmentation(&mut state, &Fixed(Ok(demo_layers())));

        assert_eq!(state.segmentation.status, SegmentationStatus::Idle);
        assert!(state.segmentation.pending.is_none());
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn success_replaces_layers_then_reverts_after_display_time() {
        let mut state = state_with_plan();
        let old = state.layers.add(Layer::text("alt", Vec2::ZERO));
        state.layers.select(Some(&old));
        let t0 = Instant::now();

        start_segmentation(&mut state, &Fixed(Ok(demo_layers())));
        poll_segmentation(&mut state, t0);

        assert_eq!(state.segmentation.status, SegmentationStatus::Done { finished_at: t0 });
        assert_eq!(state.layers.len(), 4);
        assert!(state.layers.find(&old).is_none());
        assert!(state.layers.selected().is_none());

        poll_segmentation(&mut state, t0 + Duration::from_millis(500));
        assert!(matches!(state.segmentation.status, SegmentationStatus::Done { .. }));

        poll_segmentation(&mut state, t0 + Duration::from_secs(2));
        assert_eq!(state.segmentation.status, SegmentationStatus::Idle);
    }

    #[test]
    fn failure_keeps_layers() {
        let mut state = state_with_plan();
        state.layers.add(Layer::text("bleibt", Vec2::ZERO));

        start_segmentation(
            &mut state,
            &Fixed(Err(SegmentationError::Service("timeout".into()))),
        );
        poll_segmentation(&mut state, Instant::now());

        assert_eq!(state.segmentation.status, SegmentationStatus::Idle);
        assert_eq!(state.layers.len(), 1);
        assert!(state
            .ui
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("timeout")));
    }
}
