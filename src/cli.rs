//! Headless-Modus: Grundriss bzw. Dokument laden, optional segmentieren, exportieren.
//!
//!   floorplan-editor --document plan.json --out-dir out/
//!   floorplan-editor --catalog projects.json --floor-plan fp1 --segment --out-dir out/

use anyhow::{bail, Context, Result};
use clap::Parser;
use floorplan_editor::app::use_cases;
use floorplan_editor::{
    AppController, AppIntent, AppState, CannedSegmentation, EditorOptions, FloorPlanCatalog,
    JsonCatalog, SegmentationStatus, SessionContext,
};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const SEGMENTATION_TIMEOUT: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Grundriss-Editor im Headless-Betrieb.
#[derive(Parser, Debug)]
#[command(
    name = "floorplan-editor",
    version,
    about = "Grundriss annotieren und als PNG/JSON/CSV exportieren"
)]
pub struct CliArgs {
    /// Zuvor exportiertes JSON-Dokument
    #[arg(long, value_name = "JSON", conflicts_with_all = ["catalog", "floor_plan"])]
    pub document: Option<PathBuf>,

    /// Projekt-Katalog als JSON-Datei
    #[arg(long, value_name = "JSON", requires = "floor_plan")]
    pub catalog: Option<PathBuf>,

    /// ID des Grundrisses im Katalog
    #[arg(long, value_name = "ID", requires = "catalog")]
    pub floor_plan: Option<String>,

    /// Benutzer-ID für den Katalogzugriff
    #[arg(long, value_name = "ID", default_value = "local")]
    pub user: String,

    /// Demo-Segmentierung vor dem Export ausführen
    #[arg(long)]
    pub segment: bool,

    /// Style-Template für den Bild-Export
    #[arg(long, value_name = "NAME")]
    pub style: Option<String>,

    /// Alternative Optionen-Datei (TOML)
    #[arg(long, value_name = "TOML")]
    pub options: Option<PathBuf>,

    /// Zielverzeichnis für plan.png, plan.json und rooms.csv
    #[arg(long, value_name = "DIR")]
    pub out_dir: PathBuf,
}

/// Führt den Headless-Lauf aus.
pub fn run(args: CliArgs) -> Result<()> {
    let options_path = args.options.clone().unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&options_path);

    let mut state = AppState::with_options(options);
    let mut controller =
        AppController::with_segmentation_service(Box::new(CannedSegmentation::default()));

    if let Some(path) = &args.document {
        use_cases::file_io::load_document(&mut state, path)?;
    } else if let (Some(catalog_path), Some(id)) = (&args.catalog, &args.floor_plan) {
        let catalog = JsonCatalog::load(catalog_path)?;
        let session = SessionContext::new(args.user.as_str());
        let Some(floor_plan) = catalog.floor_plan(&session, id)? else {
            bail!("Grundriss '{}' für Benutzer '{}' nicht gefunden", id, args.user);
        };
        controller.handle_intent(&mut state, AppIntent::FloorPlanOpened { floor_plan })?;
    } else {
        bail!("Entweder --document oder --catalog mit --floor-plan angeben");
    }

    if let Some(name) = &args.style {
        controller.handle_intent(&mut state, AppIntent::StyleTemplateSelected { name: name.clone() })?;
    }

    if args.segment {
        run_segmentation(&mut controller, &mut state)?;
    }

    export_all(&mut state, &args.out_dir)
}

fn run_segmentation(controller: &mut AppController, state: &mut AppState) -> Result<()> {
    controller.handle_intent(state, AppIntent::SegmentationRequested)?;
    let started = Instant::now();

    while state.segmentation.is_running() {
        if started.elapsed() > SEGMENTATION_TIMEOUT {
            bail!("Segmentierung hat nicht rechtzeitig geantwortet");
        }
        std::thread::sleep(POLL_INTERVAL);
        controller.handle_intent(state, AppIntent::Tick { now: Instant::now() })?;
    }

    if state.segmentation.status == SegmentationStatus::Idle {
        bail!(
            "Segmentierung fehlgeschlagen: {}",
            state.ui.status_message.as_deref().unwrap_or("unbekannter Fehler")
        );
    }
    Ok(())
}

fn export_all(state: &mut AppState, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Verzeichnis '{}' nicht anlegbar", out_dir.display()))?;

    use_cases::export::export_image(state, &out_dir.join("plan.png"))?;
    use_cases::export::export_json(state, &out_dir.join("plan.json"))?;
    use_cases::export::export_csv(state, &out_dir.join("rooms.csv"))?;

    log::info!(
        "{} Layer exportiert nach {}",
        state.layer_count(),
        out_dir.display()
    );
    Ok(())
}
