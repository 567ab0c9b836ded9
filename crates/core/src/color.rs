//! Color types and conversion functions for shadescale.
//!
//! Three mutually convertible display encodings: hex strings (`#rrggbb` or
//! `#rgb` shorthand), [`Rgb`] (8-bit triple), and [`Hsl`] (integer degrees
//! and percentages). All conversions are pure functions.
//!
//! Alongside the display encodings sits an f64 perceptual chain
//! (`Srgb` -> `LinearRgb` -> `OkLab` -> `OkLch`) used by the interpolation
//! scale strategy; OKLCh gradients are perceptually uniform where straight
//! RGB or HSL ramps are not.

use crate::error::ScaleError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An 8-bit RGB color.
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSL color: hue in [0, 360) degrees, saturation and lightness as
/// percentages in [0, 100].
///
/// Values produced by [`rgb_to_hsl`] / [`hex_to_hsl`] are rounded to the
/// nearest integer degree/percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Parses a hex color like `"#3b82f6"`, `"3b82f6"`, or the 3-digit
    /// shorthand `"#38f"` (case insensitive). Shorthand nibbles are expanded
    /// by doubling, so `"#38f"` is `"#3388ff"`.
    ///
    /// Returns `ScaleError::InvalidColorFormat` for any other input.
    pub fn from_hex(hex: &str) -> Result<Rgb, ScaleError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(ScaleError::InvalidColorFormat(
                "non-ASCII characters in hex string".to_string(),
            ));
        }
        match hex.len() {
            3 => {
                let r = parse_nibble(&hex[0..1], "red")?;
                let g = parse_nibble(&hex[1..2], "green")?;
                let b = parse_nibble(&hex[2..3], "blue")?;
                Ok(Rgb {
                    r: r * 0x11,
                    g: g * 0x11,
                    b: b * 0x11,
                })
            }
            6 => {
                let r = parse_pair(&hex[0..2], "red")?;
                let g = parse_pair(&hex[2..4], "green")?;
                let b = parse_pair(&hex[4..6], "blue")?;
                Ok(Rgb { r, g, b })
            }
            n => Err(ScaleError::InvalidColorFormat(format!(
                "expected 3 or 6 hex digits, got {n}"
            ))),
        }
    }

    /// Renders the color as a lowercase hex string `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn parse_pair(digits: &str, channel: &str) -> Result<u8, ScaleError> {
    u8::from_str_radix(digits, 16)
        .map_err(|e| ScaleError::InvalidColorFormat(format!("invalid {channel} component: {e}")))
}

fn parse_nibble(digit: &str, channel: &str) -> Result<u8, ScaleError> {
    u8::from_str_radix(digit, 16)
        .map_err(|e| ScaleError::InvalidColorFormat(format!("invalid {channel} component: {e}")))
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Converts an 8-bit RGB color to HSL via the standard max/min-channel
/// formula, rounding hue to the nearest degree and saturation/lightness to
/// the nearest percent.
///
/// Achromatic input (all channels equal) yields `h = 0, s = 0`.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (sector * 60.0, s)
    };

    Hsl {
        h: h.round().rem_euclid(360.0),
        s: (s * 100.0).round(),
        l: (l * 100.0).round(),
    }
}

/// Parses a hex string and converts it to HSL.
///
/// Returns `ScaleError::InvalidColorFormat` if the input is not a parseable
/// hex color.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ScaleError> {
    Ok(rgb_to_hsl(Rgb::from_hex(hex)?))
}

/// Converts an HSL color to 8-bit RGB via the standard
/// chroma/achromatic-interval formula.
///
/// Hue wraps modulo 360; saturation and lightness are clamped to [0, 100].
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = c.h.rem_euclid(360.0) / 360.0;
    let s = (c.s / 100.0).clamp(0.0, 1.0);
    let l = (c.l / 100.0).clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

/// Converts an HSL color to a lowercase hex string `"#rrggbb"`.
pub fn hsl_to_hex(c: Hsl) -> String {
    hsl_to_rgb(c).to_hex()
}

/// Resolves one RGB channel from the achromatic interval endpoints `p`/`q`
/// and the channel's hue offset `t` (in turns).
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// --- Perceptual chain (f64) ---

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh (cylindrical form of OKLab).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Srgb {
    /// Widens an 8-bit RGB color to f64 components in [0, 1].
    pub fn from_rgb(c: Rgb) -> Srgb {
        Srgb {
            r: c.r as f64 / 255.0,
            g: c.g as f64 / 255.0,
            b: c.b as f64 / 255.0,
        }
    }

    /// Quantizes to 8-bit RGB with rounding, clamping to [0, 1] first.
    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    /// Parses a hex color string; accepts everything [`Rgb::from_hex`] does.
    pub fn from_hex(hex: &str) -> Result<Srgb, ScaleError> {
        Ok(Srgb::from_rgb(Rgb::from_hex(hex)?))
    }

    /// Renders as a lowercase hex string, quantizing to 8-bit.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Applies inverse sRGB gamma to a single component.
fn gamma_expand(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to a single linear component.
fn gamma_compress(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts sRGB to linear RGB by removing sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: gamma_expand(c.r),
        g: gamma_expand(c.g),
        b: gamma_expand(c.b),
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: gamma_compress(c.r),
        g: gamma_compress(c.g),
        b: gamma_compress(c.b),
    }
}

/// Converts linear RGB to OKLab via the OKLab matrix transform.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let lc = l.cbrt();
    let mc = m.cbrt();
    let sc = s.cbrt();

    OkLab {
        l: 0.2104542553 * lc + 0.7936177850 * mc - 0.0040720468 * sc,
        a: 1.9779984951 * lc - 2.4285922050 * mc + 0.4505937099 * sc,
        b: 0.0259040371 * lc + 0.7827717662 * mc - 0.8086757660 * sc,
    }
}

/// Converts OKLab to linear RGB via the inverse OKLab matrix transform.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let lc = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let mc = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let sc = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = lc * lc * lc;
    let m = mc * mc * mc;
    let s = sc * sc * sc;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Converts OKLab to OKLCh.
///
/// NaN guard: below a chroma of 1e-10 the hue is pinned to 0.0 to avoid an
/// indeterminate `atan2(0, 0)`.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    let h = if ch < 1e-10 {
        0.0
    } else {
        c.b.atan2(c.a).to_degrees().rem_euclid(360.0)
    };
    OkLch { l: c.l, c: ch, h }
}

/// Converts OKLCh to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let h_rad = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// Convenience: sRGB to OKLCh via sRGB -> linear -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

/// Convenience: OKLCh to sRGB via OKLCh -> OKLab -> linear -> sRGB, with
/// out-of-gamut output clamped to [0, 1].
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    let srgb = linear_to_srgb(oklab_to_linear(oklch_to_oklab(c)));
    Srgb {
        r: srgb.r.clamp(0.0, 1.0),
        g: srgb.g.clamp(0.0, 1.0),
        b: srgb.b.clamp(0.0, 1.0),
    }
}
