//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// stroke_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// stroke_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped to predefined RGBA values using
    /// `util::name_to_color()`. Unknown color names fall back to black (the
    /// pad's default ink) with a warning. RGB arrays are converted from 0-255
    /// range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_resolve() {
        assert_eq!(ColorSpec::Name("red".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("unknowable".into()).to_color(), BLACK);
    }

    #[test]
    fn rgb_arrays_scale_to_unit_range() {
        let color = ColorSpec::Rgb([255, 0, 128]).to_color();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.a, 1.0);
        assert!((color.b - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn color_spec_parses_both_toml_forms() {
        #[derive(Deserialize)]
        struct Holder {
            color: ColorSpec,
        }
        let named: Holder = toml::from_str("color = \"blue\"").unwrap();
        assert_eq!(named.color.to_color(), BLUE);
        let rgb: Holder = toml::from_str("color = [0, 255, 0]").unwrap();
        assert_eq!(rgb.color.to_color(), GREEN);
    }
}
