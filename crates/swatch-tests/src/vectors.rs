//! Reference vector tests.
//!
//! `data/vectors.json` holds hex inputs with their expected stored linear
//! components, plus malformed inputs with the message each must produce.
//! Expected values were computed independently from the IEC 61966-2-1
//! formulas with four-decimal, half-away-from-zero rounding.

/// Vector file embedded at compile time.
const VECTORS: &str = include_str!("../data/vectors.json");

#[derive(Debug, serde::Deserialize)]
struct Vectors {
    #[allow(dead_code)]
    version: String,
    hex: Vec<HexVector>,
    #[serde(default)]
    invalid_hex: Vec<String>,
    #[serde(default)]
    invalid_documents: Vec<DocumentVector>,
}

#[derive(Debug, serde::Deserialize)]
struct HexVector {
    input: String,
    linear: [f64; 4],
}

#[derive(Debug, serde::Deserialize)]
struct DocumentVector {
    text: String,
    message: String,
}

fn load_vectors() -> Vectors {
    serde_json::from_str(VECTORS).expect("vectors.json must parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_color::{Color, Palette};

    #[test]
    fn test_hex_vectors() {
        let vectors = load_vectors();
        assert!(!vectors.hex.is_empty());

        for v in &vectors.hex {
            let color = Color::from_hex_string(&v.input)
                .unwrap_or_else(|e| panic!("{}: {}", v.input, e));
            assert_eq!(
                color.linear_components().to_array(),
                v.linear,
                "hex {}",
                v.input
            );
        }
    }

    #[test]
    fn test_invalid_hex_vectors() {
        for input in &load_vectors().invalid_hex {
            let err = Color::from_hex_string(input).unwrap_err();
            assert!(
                err.to_string().contains("Invalid hex color format"),
                "{:?} -> {}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_invalid_document_vectors() {
        for v in &load_vectors().invalid_documents {
            let err = Palette::deserialize(&v.text).unwrap_err();
            assert!(
                err.to_string().contains(&v.message),
                "{:?}: expected {:?}, got {}",
                v.text,
                v.message,
                err
            );
        }
    }

    #[test]
    fn test_hex_vectors_survive_document() {
        let vectors = load_vectors();
        let palette: Palette = vectors
            .hex
            .iter()
            .map(|v| Color::from_hex_string(&v.input).unwrap().with_name(v.input.clone()))
            .collect();

        let restored = Palette::deserialize(&palette.serialize().unwrap()).unwrap();
        for (v, color) in vectors.hex.iter().zip(restored.iter()) {
            assert_eq!(color.name(), Some(v.input.as_str()));
            assert_eq!(color.linear_components().to_array(), v.linear);
        }
    }
}
