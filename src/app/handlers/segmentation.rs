//! Handler für die automatische Segmentierung.

use crate::app::segmentation::SegmentationService;
use crate::app::use_cases;
use crate::app::AppState;
use std::time::Instant;

/// Startet die Segmentierung über den injizierten Dienst.
pub fn start(state: &mut AppState, service: &dyn SegmentationService) {
    use_cases::segmentation::start_segmentation(state, service);
}

/// Übernimmt fertige Ergebnisse und setzt die Done-Anzeige zurück.
pub fn poll(state: &mut AppState, now: Instant) {
    use_cases::segmentation::poll_segmentation(state, now);
}
