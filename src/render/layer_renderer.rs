//! Abbildung committeter Layer auf Zeichenprimitive.

use super::DrawPrimitive;
use crate::core::{unflatten_points, Layer, LayerGeometry};
use crate::shared::StyleTemplate;

/// Erzeugt genau ein Primitiv pro Layer. Selektion ändert nur Füllung/Hervorhebung.
pub fn layer_primitive(layer: &Layer, selected: bool, style: &StyleTemplate) -> DrawPrimitive {
    let layer_id = Some(layer.id.clone());

    match &layer.geometry {
        LayerGeometry::Room {
            x,
            y,
            width,
            height,
        } => rect(layer, selected, &style.room, *x, *y, *width, *height),
        LayerGeometry::Furniture {
            x,
            y,
            width,
            height,
        } => rect(layer, selected, &style.furniture, *x, *y, *width, *height),
        LayerGeometry::Wall { points } => {
            let stroke = if selected {
                style.wall.selected_fill.unwrap_or(style.wall.stroke)
            } else {
                style.wall.stroke
            };
            DrawPrimitive::Polyline {
                layer_id,
                points: unflatten_points(points),
                stroke,
                stroke_width: style.wall.stroke_width,
            }
        }
        LayerGeometry::CustomRegion { points } => DrawPrimitive::Polygon {
            layer_id,
            points: unflatten_points(points),
            fill: style.custom_region.fill_for(selected),
            stroke: style.custom_region.stroke,
            stroke_width: style.custom_region.stroke_width,
        },
        LayerGeometry::Text { x, y } => DrawPrimitive::Label {
            layer_id,
            position: glam::Vec2::new(*x, *y),
            text: layer.name.clone(),
            color: style.text.fill_for(selected).unwrap_or(style.text.stroke),
            font_size: style.font_size,
        },
    }
}

fn rect(
    layer: &Layer,
    selected: bool,
    style: &crate::shared::LayerStyle,
    x: f32,
    y: f32,
    width: Option<f32>,
    height: Option<f32>,
) -> DrawPrimitive {
    DrawPrimitive::Rect {
        layer_id: Some(layer.id.clone()),
        origin: glam::Vec2::new(x, y),
        size: glam::Vec2::new(width.unwrap_or(0.0), height.unwrap_or(0.0)),
        fill: style.fill_for(selected),
        stroke: style.stroke,
        stroke_width: style.stroke_width,
    }
}
