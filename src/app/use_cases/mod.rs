//! Use-Cases der Application-Layer-Orchestrierung.

pub mod calibration;
pub mod drawing;
pub mod export;
pub mod file_io;
pub mod layers;
pub mod segmentation;
pub mod tool_mode;
pub mod view;
