//! Katalog-Vertrag für Projekte und Grundrisse.
//!
//! Die eigentliche Persistenz ist extern; `JsonCatalog` liest einen
//! exportierten Katalog aus einer JSON-Datei für den Headless-Betrieb.

use super::{FloorPlanRef, SessionContext};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grundriss-Eintrag eines Projekts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanEntry {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// ISO-8601-Zeitstempel; sortiert lexikographisch
    #[serde(default)]
    pub created_at: String,
}

impl FloorPlanEntry {
    pub fn to_ref(&self) -> FloorPlanRef {
        FloorPlanRef {
            id: self.id.clone(),
            name: self.name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Projekt eines Benutzers mit seinen Grundrissen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub floor_plans: Vec<FloorPlanEntry>,
}

/// Lesender Zugriff auf Projekte und Grundrisse.
pub trait FloorPlanCatalog {
    /// Projekte des Benutzers, neueste zuerst; Grundrisse ebenfalls neueste zuerst.
    fn projects(&self, session: &SessionContext) -> anyhow::Result<Vec<Project>>;

    /// Sucht einen Grundriss des Benutzers per ID.
    fn floor_plan(&self, session: &SessionContext, id: &str) -> anyhow::Result<Option<FloorPlanRef>> {
        Ok(self
            .projects(session)?
            .iter()
            .flat_map(|p| p.floor_plans.iter())
            .find(|fp| fp.id == id)
            .map(FloorPlanEntry::to_ref))
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Katalog aus einer JSON-Datei (`{ "projects": [...] }`).
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    projects: Vec<Project>,
}

impl JsonCatalog {
    /// Lädt den Katalog aus einer Datei.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Katalog nicht lesbar: {}", path.display()))?;
        let catalog = Self::from_json(&content)
            .with_context(|| format!("Katalog fehlerhaft: {}", path.display()))?;
        log::info!(
            "Katalog geladen: {} Projekte aus {}",
            catalog.projects.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parst einen Katalog aus JSON-Text.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self {
            projects: file.projects,
        })
    }
}

impl FloorPlanCatalog for JsonCatalog {
    fn projects(&self, session: &SessionContext) -> anyhow::Result<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| p.user_id == session.user_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for project in &mut projects {
            project
                .floor_plans
                .sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Ok(projects)
    }
}
