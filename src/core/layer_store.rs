//! Kanonische Layer-Sammlung mit höchstens einem selektierten Layer.
//!
//! Alle Operationen sind total: Operationen auf unbekannte IDs sind No-Ops.

use super::layer::{Layer, LayerId, LayerKind};
use indexmap::IndexMap;
use std::sync::Arc;

/// Layer in Einfüge-Reihenfolge (= Zeichenreihenfolge).
pub type LayerMap = IndexMap<LayerId, Layer>;

/// Container für alle platzierten Layer plus Selektion.
#[derive(Debug, Clone, Default)]
pub struct LayerStore {
    /// Arc für O(1)-Clone in der RenderScene
    layers: Arc<LayerMap>,
    selected: Option<LayerId>,
}

impl LayerStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Layer mit frisch vergebener ID hinzu. Die Selektion bleibt unverändert.
    pub fn add(&mut self, mut layer: Layer) -> LayerId {
        let id = self.fresh_id();
        layer.id = id.clone();
        log::debug!("Layer '{}' ({:?}) hinzugefügt: {}", layer.name, layer.kind(), id);
        self.layers_mut().insert(id.clone(), layer);
        id
    }

    /// Entfernt einen Layer. Zeigte die Selektion darauf, wird sie geleert.
    pub fn remove(&mut self, id: &LayerId) -> Option<Layer> {
        if !self.layers.contains_key(id) {
            return None;
        }
        let removed = self.layers_mut().shift_remove(id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Benennt einen Layer um. Gibt `false` zurück, wenn die ID unbekannt ist.
    pub fn rename(&mut self, id: &LayerId, new_name: impl Into<String>) -> bool {
        if !self.layers.contains_key(id) {
            return false;
        }
        match self.layers_mut().get_mut(id) {
            Some(layer) => {
                layer.name = new_name.into();
                true
            }
            None => false,
        }
    }

    /// Ersetzt die komplette Sammlung atomar und leert die Selektion.
    ///
    /// Leere oder doppelte IDs aus externen Quellen werden neu vergeben.
    /// Rückgabe: Anzahl neu vergebener IDs.
    pub fn replace_all(&mut self, layers: Vec<Layer>) -> usize {
        let mut next = LayerMap::with_capacity(layers.len());
        let mut rekeyed = 0;

        for mut layer in layers {
            if layer.id.is_empty() || next.contains_key(&layer.id) {
                let mut id = LayerId::generate();
                while next.contains_key(&id) {
                    id = LayerId::generate();
                }
                log::warn!(
                    "Layer '{}' mit ungültiger oder doppelter ID '{}' erhält neue ID {}",
                    layer.name,
                    layer.id,
                    id
                );
                layer.id = id;
                rekeyed += 1;
            }
            next.insert(layer.id.clone(), layer);
        }

        self.layers = Arc::new(next);
        self.selected = None;
        rekeyed
    }

    /// Setzt oder löscht die Selektion. Unbekannte IDs leeren die Selektion.
    pub fn select(&mut self, id: Option<&LayerId>) {
        self.selected = id.filter(|id| self.layers.contains_key(*id)).cloned();
    }

    /// Sucht einen Layer per ID.
    pub fn find(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.get(id)
    }

    /// Aktuell selektierte Layer-ID.
    pub fn selected(&self) -> Option<&LayerId> {
        self.selected.as_ref()
    }

    /// Aktuell selektierter Layer.
    pub fn selected_layer(&self) -> Option<&Layer> {
        self.selected.as_ref().and_then(|id| self.layers.get(id))
    }

    /// Alle Layer in Zeichenreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    /// Geteilte Sicht auf die Layer-Map (O(1)-Clone).
    pub fn shared(&self) -> Arc<LayerMap> {
        Arc::clone(&self.layers)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Anzahl der Layer einer Art.
    pub fn count_of(&self, kind: LayerKind) -> usize {
        self.layers.values().filter(|l| l.kind() == kind).count()
    }

    /// Schlägt einen freien Namen wie "Room 3" für einen neuen Layer vor.
    pub fn next_name(&self, kind: LayerKind) -> String {
        let mut n = self.count_of(kind) + 1;
        loop {
            let candidate = format!("{} {}", kind.name_prefix(), n);
            if !self.layers.values().any(|l| l.name == candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn fresh_id(&self) -> LayerId {
        let mut id = LayerId::generate();
        while self.layers.contains_key(&id) {
            id = LayerId::generate();
        }
        id
    }

    /// Mutable Map (CoW: klont nur, wenn eine RenderScene noch eine Referenz hält).
    #[inline]
    fn layers_mut(&mut self) -> &mut LayerMap {
        Arc::make_mut(&mut self.layers)
    }
}

#[cfg(test)]
mod tests;
