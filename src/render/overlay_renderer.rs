//! Werkzeug-Overlays: Kalibrier-Punkte, Raum-Anker, Lasso.

use super::DrawPrimitive;
use crate::shared::{EditorOptions, ToolOverlay};

/// Hängt die Overlay-Primitive in fester Reihenfolge an: Linien vor Punkten.
pub fn push_overlay(out: &mut Vec<DrawPrimitive>, overlay: &ToolOverlay, options: &EditorOptions) {
    let radius = options.overlay_point_radius;
    let width = options.overlay_line_width;

    if overlay.scale_points.len() >= 2 {
        out.push(DrawPrimitive::Polyline {
            layer_id: None,
            points: overlay.scale_points.clone(),
            stroke: options.scale_overlay_color,
            stroke_width: width,
        });
    }
    out.extend(overlay.scale_points.iter().map(|&center| DrawPrimitive::Marker {
        center,
        radius,
        color: options.scale_overlay_color,
    }));

    if let Some(center) = overlay.draw_anchor {
        out.push(DrawPrimitive::Marker {
            center,
            radius,
            color: options.draw_anchor_color,
        });
    }

    if overlay.lasso_points.len() >= 2 {
        out.push(DrawPrimitive::Polyline {
            layer_id: None,
            points: overlay.lasso_points.clone(),
            stroke: options.lasso_overlay_color,
            stroke_width: width,
        });
    }
    out.extend(overlay.lasso_points.iter().map(|&center| DrawPrimitive::Marker {
        center,
        radius,
        color: options.lasso_overlay_color,
    }));
}
