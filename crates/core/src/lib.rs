#![deny(unsafe_code)]
//! Core types for shadescale, a Tailwind-style color scale generator.
//!
//! Provides color encodings and conversions (`Rgb`, `Hsl`, hex strings,
//! plus the OKLab/OKLCh perceptual chain), the `ShadeKey` scale positions,
//! `Palette` generation from one seed color, display-format rendering, and
//! the `Xorshift64` PRNG used for random seed colors.
//!
//! Everything here is a pure function of its inputs: no state, no I/O.

pub mod color;
pub mod error;
pub mod format;
pub mod prng;
pub mod scale;
pub mod shade;

pub use color::{hex_to_hsl, hsl_to_hex, Hsl, Rgb, Srgb};
pub use error::ScaleError;
pub use format::{convert_color, ColorFormat};
pub use prng::Xorshift64;
pub use scale::{generate_palette, generate_palette_with, Palette, ScaleStrategy};
pub use shade::ShadeKey;
