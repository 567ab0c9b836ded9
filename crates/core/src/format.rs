//! Display-format rendering: hex, CSS `rgb(...)`, and CSS `hsl(...)`.

use crate::color::{rgb_to_hsl, Rgb};
use crate::error::ScaleError;

/// The display format a color is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    /// `#rrggbb`, lowercase.
    #[default]
    Hex,
    /// `rgb(r, g, b)` with 8-bit components.
    Rgb,
    /// `hsl(h, s%, l%)` with integer components.
    Hsl,
}

impl ColorFormat {
    /// Looks a format up by its CLI name.
    pub fn from_name(name: &str) -> Option<ColorFormat> {
        match name {
            "hex" => Some(ColorFormat::Hex),
            "rgb" => Some(ColorFormat::Rgb),
            "hsl" => Some(ColorFormat::Hsl),
            _ => None,
        }
    }

    /// Names accepted by [`from_name`](Self::from_name).
    pub fn list_names() -> Vec<&'static str> {
        vec!["hex", "rgb", "hsl"]
    }
}

/// Renders a color in the requested display format. Pure formatting; a
/// valid [`Rgb`] always renders.
pub fn render(color: Rgb, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => color.to_hex(),
        ColorFormat::Rgb => format!("rgb({}, {}, {})", color.r, color.g, color.b),
        ColorFormat::Hsl => {
            let hsl = rgb_to_hsl(color);
            format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
        }
    }
}

/// Parses a hex color string and renders it in the requested format.
///
/// Fails with `ScaleError::InvalidColorFormat` if the input does not parse.
pub fn convert_color(color: &str, format: ColorFormat) -> Result<String, ScaleError> {
    Ok(render(Rgb::from_hex(color)?, format))
}
