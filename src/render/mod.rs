//! Zustandsloser Renderer: RenderScene → geordnete Zeichenprimitive.
//!
//! Committete Layer kommen in Store-Reihenfolge, Werkzeug-Overlays immer danach.

mod layer_renderer;
mod overlay_renderer;
mod types;

pub use layer_renderer::layer_primitive;
pub use types::DrawPrimitive;

use crate::shared::RenderScene;

/// Baut die Zeichenliste für einen Frame.
pub fn build_primitives(scene: &RenderScene) -> Vec<DrawPrimitive> {
    let mut primitives = Vec::with_capacity(scene.layers.len() + 8);

    for layer in scene.layers.values() {
        let selected = scene.is_selected(&layer.id);
        primitives.push(layer_primitive(layer, selected, &scene.style));
    }

    overlay_renderer::push_overlay(&mut primitives, &scene.overlay, &scene.options);

    primitives
}
