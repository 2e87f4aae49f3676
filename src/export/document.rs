//! JSON-Dokument `{ floorPlan, layers, scale }` als Export und Import.

use crate::core::{FloorPlanRef, Layer, LayerStore, ScaleCalibration};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Serialisierter Editor-Zustand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanDocument {
    pub floor_plan: Option<FloorPlanRef>,
    pub layers: Vec<Layer>,
    pub scale: Option<f32>,
}

impl FloorPlanDocument {
    /// Schnappschuss aus dem aktuellen Zustand; mutiert nichts.
    pub fn snapshot(
        floor_plan: Option<&FloorPlanRef>,
        layers: &LayerStore,
        calibration: &ScaleCalibration,
    ) -> Self {
        Self {
            floor_plan: floor_plan.cloned(),
            layers: layers.iter().cloned().collect(),
            scale: calibration.ratio(),
        }
    }

    /// Formatiertes JSON (deterministisch bei gleichem Zustand).
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Dokument konnte nicht serialisiert werden")
    }

    /// Parst ein zuvor exportiertes Dokument.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Dokument ist kein gültiges Grundriss-JSON")
    }
}
