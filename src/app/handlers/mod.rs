//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod export;
pub mod file_io;
pub mod layers;
pub mod segmentation;
pub mod tools;
pub mod view;
