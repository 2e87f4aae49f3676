//! Software-Rasterisierung der Zeichenprimitive für den Bild-Export.
//!
//! Der Canvas wird mit `pixel_ratio` hochskaliert (Standard 2×),
//! das Hintergrundbild wird auf die Canvas-Fläche gestreckt.

use super::font;
use crate::render::DrawPrimitive;
use anyhow::{bail, Result};
use glam::Vec2;
use image::{imageops::FilterType, Rgba, RgbaImage};

/// Maximale Kantenlänge des Export-Bilds in Pixeln.
pub const MAX_EXPORT_DIMENSION: u32 = 16_384;

/// Pixelgröße des Export-Bilds: Canvas-Größe mal `pixel_ratio`.
///
/// Fehler, wenn eine Kante `MAX_EXPORT_DIMENSION` überschreitet.
pub fn export_dimensions(canvas_size: [f32; 2], pixel_ratio: u32) -> Result<(u32, u32)> {
    let ratio = pixel_ratio.max(1);
    let edge = |canvas: f32| {
        (canvas.max(1.0).round() as u32)
            .checked_mul(ratio)
            .filter(|&pixels| pixels <= MAX_EXPORT_DIMENSION)
    };
    match (edge(canvas_size[0]), edge(canvas_size[1])) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => bail!(
            "Export-Bild {}x{} bei Faktor {} überschreitet {} Pixel Kantenlänge",
            canvas_size[0],
            canvas_size[1],
            ratio,
            MAX_EXPORT_DIMENSION
        ),
    }
}

/// Rendert Hintergrund und Primitive in ein RGBA-Bild.
pub fn rasterize(
    primitives: &[DrawPrimitive],
    background: Option<&RgbaImage>,
    canvas_size: [f32; 2],
    pixel_ratio: u32,
) -> Result<RgbaImage> {
    let (width, height) = export_dimensions(canvas_size, pixel_ratio)?;
    let scale = pixel_ratio.max(1) as f32;

    let mut image = match background {
        Some(bg) => image::imageops::resize(bg, width, height, FilterType::Triangle),
        None => RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
    };

    for primitive in primitives {
        draw_primitive(&mut image, primitive, scale);
    }

    Ok(image)
}

fn draw_primitive(image: &mut RgbaImage, primitive: &DrawPrimitive, scale: f32) {
    match primitive {
        DrawPrimitive::Rect {
            origin,
            size,
            fill,
            stroke,
            stroke_width,
            ..
        } => {
            let min = *origin * scale;
            let max = (*origin + *size) * scale;
            if let Some(fill) = fill {
                fill_rect(image, min, max, *fill);
            }
            let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
            stroke_path(image, &corners, true, *stroke, stroke_width * scale);
        }
        DrawPrimitive::Polyline {
            points,
            stroke,
            stroke_width,
            ..
        } => {
            let scaled: Vec<Vec2> = points.iter().map(|p| *p * scale).collect();
            stroke_path(image, &scaled, false, *stroke, stroke_width * scale);
        }
        DrawPrimitive::Polygon {
            points,
            fill,
            stroke,
            stroke_width,
            ..
        } => {
            let scaled: Vec<Vec2> = points.iter().map(|p| *p * scale).collect();
            if let Some(fill) = fill {
                fill_polygon(image, &scaled, *fill);
            }
            stroke_path(image, &scaled, true, *stroke, stroke_width * scale);
        }
        DrawPrimitive::Label {
            position,
            text,
            color,
            font_size,
            ..
        } => {
            let origin = *position * scale;
            font::draw_text(
                image,
                origin.x.round() as i32,
                origin.y.round() as i32,
                text,
                *color,
                font::glyph_scale(font_size * scale),
            );
        }
        DrawPrimitive::Marker {
            center,
            radius,
            color,
        } => fill_circle(image, *center * scale, radius * scale, *color),
    }
}

/// Alpha-Blending eines Pixels; Koordinaten außerhalb werden ignoriert.
pub(super) fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: [f32; 4]) {
    if x < 0 || y < 0 || x >= image.width() as i32 || y >= image.height() as i32 {
        return;
    }
    let alpha = color[3].clamp(0.0, 1.0);
    let pixel = image.get_pixel_mut(x as u32, y as u32);
    for channel in 0..3 {
        let base = pixel[channel] as f32;
        let overlay = color[channel].clamp(0.0, 1.0) * 255.0;
        pixel[channel] = (base * (1.0 - alpha) + overlay * alpha).round() as u8;
    }
    pixel[3] = 255;
}

fn pixel_bounds(image: &RgbaImage, min: Vec2, max: Vec2) -> Option<(i32, i32, i32, i32)> {
    let x0 = min.x.floor().max(0.0) as i32;
    let y0 = min.y.floor().max(0.0) as i32;
    let x1 = max.x.ceil().min(image.width() as f32) as i32;
    let y1 = max.y.ceil().min(image.height() as f32) as i32;
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

fn fill_rect(image: &mut RgbaImage, a: Vec2, b: Vec2, color: [f32; 4]) {
    let (min, max) = (a.min(b), a.max(b));
    let Some((x0, y0, x1, y1)) = pixel_bounds(image, min, max) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if center.cmpge(min).all() && center.cmplt(max).all() {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

fn fill_circle(image: &mut RgbaImage, center: Vec2, radius: f32, color: [f32; 4]) {
    let extent = Vec2::splat(radius);
    let Some((x0, y0, x1, y1)) = pixel_bounds(image, center - extent, center + extent) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance_squared(center) <= radius * radius {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

/// Füllt ein Polygon nach der Even-Odd-Regel (Pixelmittelpunkte).
fn fill_polygon(image: &mut RgbaImage, polygon: &[Vec2], color: [f32; 4]) {
    if polygon.len() < 3 {
        return;
    }
    let (min, max) = bounds(polygon);
    let Some((x0, y0, x1, y1)) = pixel_bounds(image, min, max) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            if point_in_polygon(Vec2::new(x as f32 + 0.5, y as f32 + 0.5), polygon) {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

/// Zeichnet verbundene Segmente mit gegebener Breite. Jeder Pixel wird höchstens
/// einmal geblendet, damit Überlappungen an Ecken nicht dunkler werden.
fn stroke_path(image: &mut RgbaImage, points: &[Vec2], closed: bool, color: [f32; 4], width: f32) {
    if points.len() < 2 || width <= 0.0 {
        return;
    }
    let half = (width * 0.5).max(0.5);
    let mut segments: Vec<(Vec2, Vec2)> = points.windows(2).map(|w| (w[0], w[1])).collect();
    if closed && points.len() > 2 {
        if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
            segments.push((last, first));
        }
    }

    let (min, max) = bounds(points);
    let pad = Vec2::splat(half);
    let Some((x0, y0, x1, y1)) = pixel_bounds(image, min - pad, max + pad) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if segments
                .iter()
                .any(|&(a, b)| distance_to_segment(p, a, b) <= half)
            {
                blend_pixel(image, x, y, color);
            }
        }
    }
}

fn bounds(points: &[Vec2]) -> (Vec2, Vec2) {
    points.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    )
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Ray-Casting-Test, Rand zählt nicht zwingend als innen.
fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let mut inside = false;
    let Some(&last) = polygon.last() else {
        return false;
    };
    let mut previous = last;

    for &current in polygon {
        let crosses = (current.y > point.y) != (previous.y > point.y)
            && point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x;
        if crosses {
            inside = !inside;
        }
        previous = current;
    }

    inside
}
