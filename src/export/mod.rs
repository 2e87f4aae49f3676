//! Read-only Export-Projektionen: Rasterbild, JSON-Dokument, Raum-CSV.
//!
//! Keine Funktion in diesem Modul mutiert Editor-Zustand.

pub mod csv;
pub mod document;
mod font;
pub mod raster;

pub use csv::{rooms_csv, ROOM_CSV_HEADER};
pub use document::FloorPlanDocument;
pub use raster::rasterize;
