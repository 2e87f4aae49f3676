//! Grundriss-Editor (Headless).
//!
//! Lädt einen Grundriss aus dem Katalog oder ein gespeichertes Dokument
//! und exportiert Bild, Layer-JSON und Raumliste.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Grundriss-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    cli::run(cli::CliArgs::parse())
}
