//! Tabellarische Raumliste: nur Room-Layer, eine Zeile pro Raum.

use crate::core::{Layer, LayerGeometry};

/// Kopfzeile, exakt so erwartet von nachgelagerten Tabellen.
pub const ROOM_CSV_HEADER: &str = "Room Name, X, Y, Width, Height";

/// Projiziert Room-Layer auf `name,x,y,width,height`.
///
/// Fehlende Breite/Höhe ergeben leere Felder, ohne Räume bleibt nur die Kopfzeile.
pub fn rooms_csv<'a>(layers: impl IntoIterator<Item = &'a Layer>) -> String {
    let mut lines = vec![ROOM_CSV_HEADER.to_string()];

    for layer in layers {
        let LayerGeometry::Room {
            x,
            y,
            width,
            height,
        } = &layer.geometry
        else {
            continue;
        };
        lines.push(format!(
            "{},{},{},{},{}",
            escape_field(&layer.name),
            x,
            y,
            optional(*width),
            optional(*height)
        ));
    }

    lines.join("\n")
}

fn optional(value: Option<f32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Quoting nur bei Trennzeichen, Anführungszeichen oder Zeilenumbrüchen.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
