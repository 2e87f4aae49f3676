//! Maßangaben aus Text-Layern lesen ("12'-0\"" → 12).
//!
//! Einfache Präfix-Heuristik; eine echte OCR-Engine kann `extract_dimension`
//! ersetzen, ohne die Werkzeug-Logik anzufassen.

use regex::Regex;
use std::sync::OnceLock;

fn dimension_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Führende Zahl mit Punkt als Dezimaltrenner, optional gefolgt von Fuß-/Zoll-Zeichen
        Regex::new(r#"^\s*(\d+(?:\.\d+)?|\.\d+)\s*(?:'|"|′|″|ft\b|in\b)?"#)
            .expect("statisches Dimensions-Pattern ist gültig")
    })
}

/// Liest die führende Maßzahl eines Labels.
///
/// Liefert `None`, wenn kein Zahlentoken am Anfang steht oder der Wert nicht positiv ist.
pub fn extract_dimension(label: &str) -> Option<f32> {
    let captures = dimension_regex().captures(label)?;
    let value: f32 = captures.get(1)?.as_str().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::extract_dimension;

    #[test]
    fn reads_feet_and_inches_label() {
        assert_eq!(extract_dimension("12'-0\""), Some(12.0));
    }

    #[test]
    fn reads_plain_and_decimal_numbers() {
        assert_eq!(extract_dimension("3.5"), Some(3.5));
        assert_eq!(extract_dimension("  4.25 m"), Some(4.25));
        assert_eq!(extract_dimension("10ft"), Some(10.0));
        assert_eq!(extract_dimension("8\""), Some(8.0));
    }

    #[test]
    fn misses_without_leading_number() {
        assert_eq!(extract_dimension("Kitchen"), None);
        assert_eq!(extract_dimension("Room 12"), None);
        assert_eq!(extract_dimension(""), None);
    }

    #[test]
    fn comma_ends_the_number() {
        assert_eq!(extract_dimension("4,25"), Some(4.0));
        assert_eq!(extract_dimension("12,5'"), Some(12.0));
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(extract_dimension("0'-0\""), None);
    }
}
