//! Automatische Segmentierung: austauschbarer Dienst mit verzögertem Ergebnis.
//!
//! Der Dienst liefert eine vollständige Ersatz-Layermenge. Das Ergebnis
//! kommt über einen `mpsc`-Kanal und wird im `Tick` abgefragt, der Layer-Store
//! wird also nur vom besitzenden Thread verändert.

use crate::core::Layer;
use glam::Vec2;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

/// Eingabe für einen Segmentierungsaufruf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationRequest {
    /// URL des hochgeladenen Grundriss-Bilds
    pub image_url: String,
}

/// Fehler eines Segmentierungsaufrufs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentationError {
    #[error("Segmentierungsdienst meldet Fehler: {0}")]
    Service(String),
    #[error("Segmentierungs-Worker wurde ohne Ergebnis beendet")]
    Disconnected,
}

type SegmentationResult = Result<Vec<Layer>, SegmentationError>;

/// Verzögertes Ergebnis eines laufenden Segmentierungsaufrufs.
pub struct PendingSegmentation {
    receiver: Receiver<SegmentationResult>,
}

impl PendingSegmentation {
    /// Bereits abgeschlossenes Ergebnis (z.B. für synchrone Dienste und Tests).
    pub fn ready(result: SegmentationResult) -> Self {
        let (sender, receiver) = mpsc::channel();
        // Empfänger lebt noch, send kann nicht fehlschlagen
        let _ = sender.send(result);
        Self { receiver }
    }

    /// Führt `job` auf einem Worker-Thread aus.
    pub fn spawn<F>(job: F) -> Self
    where
        F: FnOnce() -> SegmentationResult + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        std::thread::spawn(move || {
            if sender.send(job()).is_err() {
                log::debug!("Segmentierungsergebnis verworfen: Empfänger existiert nicht mehr");
            }
        });
        Self { receiver }
    }

    /// Fragt das Ergebnis ab, ohne zu blockieren.
    ///
    /// `None` solange der Worker noch rechnet. Ein beendeter Worker ohne
    /// Ergebnis wird als [`SegmentationError::Disconnected`] gemeldet.
    pub fn poll(&self) -> Option<SegmentationResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(SegmentationError::Disconnected)),
        }
    }
}

impl std::fmt::Debug for PendingSegmentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSegmentation").finish_non_exhaustive()
    }
}

/// Externe Fähigkeit: schlägt zu einem Grundriss-Bild eine Layermenge vor.
pub trait SegmentationService {
    fn segment(&self, request: SegmentationRequest) -> PendingSegmentation;
}

/// Platzhalter-Dienst: liefert nach `delay` die feste Demo-Layermenge.
#[derive(Debug, Clone)]
pub struct CannedSegmentation {
    pub delay: Duration,
}

impl CannedSegmentation {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Ohne Verzögerung, für Headless-Läufe und Tests.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for CannedSegmentation {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::shared::options::CANNED_SEGMENTATION_DELAY_MS,
        ))
    }
}

impl SegmentationService for CannedSegmentation {
    fn segment(&self, request: SegmentationRequest) -> PendingSegmentation {
        log::info!("Segmentierung (Demo) für {}", request.image_url);
        let delay = self.delay;
        PendingSegmentation::spawn(move || {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            Ok(demo_layers())
        })
    }
}

/// Feste Demo-Layermenge: ein Raum, eine Wand, ein Möbelstück, ein Maß-Label.
pub fn demo_layers() -> Vec<Layer> {
    vec![
        Layer::room("Room 1", Vec2::new(100.0, 100.0), Vec2::new(200.0, 150.0)).with_id("r1"),
        Layer::wall("Wall 1", &[Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0)]).with_id("w1"),
        Layer::furniture("Bed", Vec2::new(150.0, 180.0), Vec2::new(60.0, 30.0)).with_id("f1"),
        Layer::text("12'-0\"", Vec2::new(120.0, 90.0)).with_id("t1"),
    ]
}

/// Lebenszyklus der Segmentierung: `Idle → Running → Done → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentationStatus {
    #[default]
    Idle,
    Running,
    /// Ergebnis übernommen; fällt nach der Anzeigedauer auf `Idle` zurück
    Done { finished_at: Instant },
}

/// Segmentierungs-Zustand im AppState.
#[derive(Debug, Default)]
pub struct SegmentationState {
    pub status: SegmentationStatus,
    /// Offener Aufruf, nur im Status `Running` gesetzt
    pub pending: Option<PendingSegmentation>,
}

impl SegmentationState {
    pub fn is_running(&self) -> bool {
        matches!(self.status, SegmentationStatus::Running)
    }
}
