//! Identität des geöffneten Grundrisses und Sitzungskontext.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Vom Katalog gelieferte Grundriss-Identität.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanRef {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

/// Expliziter Identitätskontext für Katalog-Aufrufe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: String,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Löst eine Upload-URL in einen lokalen Dateipfad auf.
///
/// `/uploads/plan.png` wird relativ zu `uploads_dir` aufgelöst, absolute
/// Dateipfade und `file://`-URLs bleiben erhalten. HTTP-URLs sind nicht lokal.
pub fn resolve_image_path(image_url: &str, uploads_dir: &Path) -> Option<PathBuf> {
    let url = image_url.trim();
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        return None;
    }
    if let Some(path) = url.strip_prefix("file://") {
        return Some(PathBuf::from(path));
    }
    if let Some(relative) = url.strip_prefix("/uploads/") {
        return Some(uploads_dir.join(relative));
    }
    Some(PathBuf::from(url))
}
