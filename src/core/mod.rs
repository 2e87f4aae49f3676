//! Core-Domänentypen: Layer, Layer-Store, Kalibrierung, Grundriss-Identität.

pub mod calibration;
pub mod catalog;
pub mod dimension;
pub mod floor_plan;
pub mod layer;
pub mod layer_store;

pub use calibration::{calibrate, parse_real_distance, CalibrationError, ScaleCalibration};
pub use catalog::{FloorPlanCatalog, FloorPlanEntry, JsonCatalog, Project};
pub use dimension::extract_dimension;
pub use floor_plan::{resolve_image_path, FloorPlanRef, SessionContext};
pub use layer::{flatten_points, unflatten_points, Layer, LayerGeometry, LayerId, LayerKind};
pub use layer_store::{LayerMap, LayerStore};
