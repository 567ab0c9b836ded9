//! Scale generation: the full 50..900 palette from one seed color.
//!
//! Two strategies exist because the feature grew up with both; the
//! OKLCh interpolation strategy is the canonical one and the default.
//! Interpolation happens in OKLCh space for perceptually uniform ramps,
//! with shortest-arc hue wrapping.

use crate::color::{hsl_to_rgb, oklch_to_srgb, rgb_to_hsl, srgb_to_oklch, Hsl, OkLch, Rgb, Srgb};
use crate::error::ScaleError;
use crate::shade::ShadeKey;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// OKLab lightness shift of one brighten/darken step. The gradient endpoints
/// sit two steps above and below the seed.
const LIGHTNESS_STEP: f64 = 0.18;
const ENDPOINT_SHIFT: f64 = 2.0 * LIGHTNESS_STEP;

/// How the ten shades are derived from the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleStrategy {
    /// Sample an OKLCh gradient through [brightened, seed, darkened] and
    /// force-write the seed at key 500. The canonical strategy.
    #[default]
    Interpolation,
    /// Hold the seed's hue and saturation and walk the fixed lightness
    /// ladder (95 down to 5); the seed lands at the key its own lightness
    /// maps to.
    LightnessSteps,
}

impl ScaleStrategy {
    /// Looks a strategy up by its CLI name.
    pub fn from_name(name: &str) -> Option<ScaleStrategy> {
        match name {
            "interpolation" => Some(ScaleStrategy::Interpolation),
            "lightness-steps" => Some(ScaleStrategy::LightnessSteps),
            _ => None,
        }
    }

    /// The CLI name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            ScaleStrategy::Interpolation => "interpolation",
            ScaleStrategy::LightnessSteps => "lightness-steps",
        }
    }

    /// Names accepted by [`from_name`](Self::from_name).
    pub fn list_names() -> Vec<&'static str> {
        vec!["interpolation", "lightness-steps"]
    }
}

/// A complete scale: every shade key mapped to a color, lightest first.
///
/// Built fresh from one seed and never mutated; the seed's exact color is
/// stored verbatim at [`seed_key`](Self::seed_key). Serializes as a JSON
/// object of hex strings keyed by shade label.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(ShadeKey, Rgb)>,
    seed_key: ShadeKey,
}

impl Palette {
    /// Returns the color at `key`.
    pub fn get(&self, key: ShadeKey) -> Rgb {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, c)| c)
            .expect("palette contains every shade key")
    }

    /// Iterates entries from lightest (50) to darkest (900).
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, Rgb)> + '_ {
        self.entries.iter().copied()
    }

    /// The key holding the seed color verbatim: 500 for the interpolation
    /// strategy, the seed's own lightness band for lightness-steps.
    pub fn seed_key(&self) -> ShadeKey {
        self.seed_key
    }

    /// True if `color` appears anywhere in the scale.
    pub fn contains(&self, color: Rgb) -> bool {
        self.entries.iter().any(|&(_, c)| c == color)
    }

    /// Number of shades (always the full key set).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; palettes are never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, color) in &self.entries {
            map.serialize_entry(&key.to_string(), color)?;
        }
        map.end()
    }
}

/// Generates the full scale from a hex seed with the canonical
/// (interpolation) strategy.
///
/// Fails with `ScaleError::InvalidColorFormat` if the seed does not parse;
/// there are no other error paths.
pub fn generate_palette(seed: &str) -> Result<Palette, ScaleError> {
    generate_palette_with(seed, ScaleStrategy::default())
}

/// Generates the full scale from a hex seed with an explicit strategy.
pub fn generate_palette_with(seed: &str, strategy: ScaleStrategy) -> Result<Palette, ScaleError> {
    let seed = Rgb::from_hex(seed)?;
    Ok(match strategy {
        ScaleStrategy::Interpolation => interpolated(seed),
        ScaleStrategy::LightnessSteps => stepped(seed),
    })
}

/// The interpolation strategy: brightened and darkened copies of the seed
/// anchor a three-stop OKLCh ramp, sampled once per shade key.
fn interpolated(seed: Rgb) -> Palette {
    let mid = srgb_to_oklch(Srgb::from_rgb(seed));
    let ramp = Ramp {
        stops: vec![
            shift_lightness(mid, ENDPOINT_SHIFT),
            mid,
            shift_lightness(mid, -ENDPOINT_SHIFT),
        ],
    };

    let last = (ShadeKey::ALL.len() - 1) as f64;
    let entries = ShadeKey::ALL
        .iter()
        .enumerate()
        .map(|(i, &key)| {
            // The seed itself lands at 500, never its resampled approximation.
            let color = if key == ShadeKey::S500 {
                seed
            } else {
                ramp.sample(i as f64 / last).to_rgb()
            };
            (key, color)
        })
        .collect();

    Palette {
        entries,
        seed_key: ShadeKey::S500,
    }
}

/// The lightness-steps strategy: fixed HSL lightness ladder, seed written
/// verbatim at the key its own lightness maps to.
fn stepped(seed: Rgb) -> Palette {
    let hsl = rgb_to_hsl(seed);
    let seed_key = ShadeKey::for_lightness(hsl.l);

    let entries = ShadeKey::ALL
        .iter()
        .map(|&key| {
            let color = if key == seed_key {
                seed
            } else {
                hsl_to_rgb(Hsl {
                    l: key.target_lightness(),
                    ..hsl
                })
            };
            (key, color)
        })
        .collect();

    Palette { entries, seed_key }
}

/// An ordered run of OKLCh stops, sampled by linear interpolation.
#[derive(Debug, Clone)]
struct Ramp {
    stops: Vec<OkLch>,
}

impl Ramp {
    /// Samples at `t` in [0, 1]: 0 is the first stop, 1 the last.
    ///
    /// Uses shortest-arc hue interpolation; `t` is clamped and NaN maps
    /// to 0.
    fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len();
        if n == 1 {
            return oklch_to_srgb(self.stops[0]);
        }

        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;

        let c0 = self.stops[idx];
        let c1 = self.stops[idx + 1];
        oklch_to_srgb(OkLch {
            l: c0.l + frac * (c1.l - c0.l),
            c: c0.c + frac * (c1.c - c0.c),
            h: interpolate_hue(c0.h, c1.h, frac),
        })
    }
}

/// Shifts OKLab lightness, clamping to [0, 1]; hue and chroma pass through.
fn shift_lightness(c: OkLch, dl: f64) -> OkLch {
    OkLch {
        l: (c.l + dl).clamp(0.0, 1.0),
        ..c
    }
}

/// Interpolates hue along the shortest arc, handling wraparound at 360.
fn interpolate_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let delta = match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    (h0 + t * delta).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightness(c: Rgb) -> f64 {
        rgb_to_hsl(c).l
    }

    // -- Key set --

    #[test]
    fn palette_has_exactly_the_full_key_set() {
        for strategy in [ScaleStrategy::Interpolation, ScaleStrategy::LightnessSteps] {
            let palette = generate_palette_with("#3b82f6", strategy).unwrap();
            let keys: Vec<ShadeKey> = palette.iter().map(|(k, _)| k).collect();
            assert_eq!(keys, ShadeKey::ALL.to_vec(), "{strategy:?}");
        }
    }

    // -- Seed placement --

    #[test]
    fn interpolation_places_seed_verbatim_at_500() {
        let palette = generate_palette("#3B82F6").unwrap();
        assert_eq!(palette.seed_key(), ShadeKey::S500);
        assert_eq!(palette.get(ShadeKey::S500).to_hex(), "#3b82f6");
    }

    #[test]
    fn shorthand_seed_lands_expanded_at_500() {
        let palette = generate_palette("#38f").unwrap();
        assert_eq!(palette.get(ShadeKey::S500).to_hex(), "#3388ff");
    }

    #[test]
    fn lightness_steps_places_seed_at_its_own_band() {
        // #3b82f6 has lightness 60, which maps to key 300.
        let palette =
            generate_palette_with("#3b82f6", ScaleStrategy::LightnessSteps).unwrap();
        assert_eq!(palette.seed_key(), ShadeKey::S300);
        assert_eq!(palette.get(ShadeKey::S300).to_hex(), "#3b82f6");
    }

    #[test]
    fn contains_finds_the_seed() {
        let seed = Rgb::from_hex("#3b82f6").unwrap();
        for strategy in [ScaleStrategy::Interpolation, ScaleStrategy::LightnessSteps] {
            let palette = generate_palette_with("#3b82f6", strategy).unwrap();
            assert!(palette.contains(seed), "{strategy:?}");
        }
    }

    // -- Errors --

    #[test]
    fn invalid_seed_fails_with_invalid_color_format() {
        let err = generate_palette("not-a-color").unwrap_err();
        assert!(matches!(err, ScaleError::InvalidColorFormat(_)));
        let err = generate_palette_with("#zzz", ScaleStrategy::LightnessSteps).unwrap_err();
        assert!(matches!(err, ScaleError::InvalidColorFormat(_)));
    }

    // -- Lightness ordering --

    #[test]
    fn key_50_is_lighter_than_key_900() {
        for seed in ["#3b82f6", "#ff0000", "#000000", "#ffffff", "#777777"] {
            for strategy in [ScaleStrategy::Interpolation, ScaleStrategy::LightnessSteps] {
                let palette = generate_palette_with(seed, strategy).unwrap();
                let l50 = lightness(palette.get(ShadeKey::S50));
                let l900 = lightness(palette.get(ShadeKey::S900));
                assert!(
                    l50 > l900,
                    "{seed} ({strategy:?}): L(50)={l50} not above L(900)={l900}"
                );
            }
        }
    }

    #[test]
    fn interpolated_shades_darken_monotonically_outside_the_seed_slot() {
        // The forced seed at 500 can sit slightly off the ramp; the sampled
        // shades themselves must never get lighter as the key grows. Compared
        // in OKLab L (the ramp's axis) with slack for 8-bit quantization.
        fn oklab_l(c: Rgb) -> f64 {
            srgb_to_oklch(Srgb::from_rgb(c)).l
        }
        for seed in ["#3b82f6", "#10b981", "#f59e0b", "#111111", "#eeeeee"] {
            let palette = generate_palette(seed).unwrap();
            let sampled: Vec<f64> = palette
                .iter()
                .filter(|&(k, _)| k != ShadeKey::S500)
                .map(|(_, c)| oklab_l(c))
                .collect();
            for pair in sampled.windows(2) {
                assert!(
                    pair[0] >= pair[1] - 0.01,
                    "{seed}: lightness rose from {} to {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn stepped_shades_darken_strictly() {
        for seed in ["#3b82f6", "#ff0000", "#0a0a0a", "#fafafa"] {
            let palette = generate_palette_with(seed, ScaleStrategy::LightnessSteps).unwrap();
            let levels: Vec<f64> = palette.iter().map(|(_, c)| lightness(c)).collect();
            for pair in levels.windows(2) {
                assert!(
                    pair[0] > pair[1],
                    "{seed}: lightness did not fall strictly ({} -> {})",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn stepped_shades_follow_the_canonical_ladder() {
        let palette = generate_palette_with("#3b82f6", ScaleStrategy::LightnessSteps).unwrap();
        for (key, color) in palette.iter() {
            if key == palette.seed_key() {
                continue;
            }
            assert_eq!(
                lightness(color),
                key.target_lightness(),
                "key {key} off its canonical lightness"
            );
        }
    }

    // -- Strategy names --

    #[test]
    fn strategy_from_name_round_trips_listed_names() {
        for name in ScaleStrategy::list_names() {
            let strategy = ScaleStrategy::from_name(name).unwrap();
            assert_eq!(strategy.name(), name);
        }
        assert_eq!(ScaleStrategy::from_name("hsl"), None);
        assert_eq!(ScaleStrategy::default(), ScaleStrategy::Interpolation);
    }

    // -- Serialization --

    #[test]
    fn palette_serializes_as_hex_object() {
        let palette = generate_palette("#3b82f6").unwrap();
        let value = serde_json::to_value(&palette).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 10);
        assert_eq!(object["500"], "#3b82f6");
        for key in ShadeKey::ALL {
            let hex = object[&key.to_string()].as_str().unwrap();
            assert!(Rgb::from_hex(hex).is_ok(), "key {key}: bad hex {hex}");
        }
    }

    // -- Ramp internals --

    #[test]
    fn ramp_endpoints_hit_first_and_last_stops() {
        let a = OkLch { l: 0.9, c: 0.05, h: 200.0 };
        let b = OkLch { l: 0.2, c: 0.10, h: 200.0 };
        let ramp = Ramp { stops: vec![a, b] };
        let start = ramp.sample(0.0);
        let end = ramp.sample(1.0);
        let expect_start = oklch_to_srgb(a);
        let expect_end = oklch_to_srgb(b);
        assert!((start.r - expect_start.r).abs() < 1e-9);
        assert!((end.b - expect_end.b).abs() < 1e-9);
    }

    #[test]
    fn ramp_clamps_t_and_tolerates_nan() {
        let ramp = Ramp {
            stops: vec![
                OkLch { l: 0.8, c: 0.1, h: 30.0 },
                OkLch { l: 0.3, c: 0.1, h: 30.0 },
            ],
        };
        let below = ramp.sample(-1.0);
        let at_zero = ramp.sample(0.0);
        assert_eq!(below, at_zero);
        let from_nan = ramp.sample(f64::NAN);
        assert_eq!(from_nan, at_zero);
    }

    #[test]
    fn hue_wraparound_takes_the_short_arc() {
        let mid = interpolate_hue(350.0, 10.0, 0.5);
        assert!(mid.abs() < 1e-9 || (mid - 360.0).abs() < 1e-9, "got {mid}");
        let plain = interpolate_hue(90.0, 180.0, 0.5);
        assert!((plain - 135.0).abs() < 1e-9, "got {plain}");
    }

    #[test]
    fn shift_lightness_clamps_at_both_ends() {
        let c = OkLch { l: 0.9, c: 0.1, h: 100.0 };
        assert_eq!(shift_lightness(c, 0.36).l, 1.0);
        let d = OkLch { l: 0.1, c: 0.1, h: 100.0 };
        assert_eq!(shift_lightness(d, -0.36).l, 0.0);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn interpolation_keeps_seed_verbatim_at_500(r: u8, g: u8, b: u8) {
                let seed = Rgb { r, g, b };
                let palette = generate_palette(&seed.to_hex()).unwrap();
                prop_assert_eq!(palette.get(ShadeKey::S500), seed);
                prop_assert_eq!(palette.seed_key(), ShadeKey::S500);
            }

            #[test]
            fn lightness_steps_keeps_seed_verbatim_at_its_key(r: u8, g: u8, b: u8) {
                let seed = Rgb { r, g, b };
                let palette =
                    generate_palette_with(&seed.to_hex(), ScaleStrategy::LightnessSteps)
                        .unwrap();
                let expected = ShadeKey::for_lightness(rgb_to_hsl(seed).l);
                prop_assert_eq!(palette.seed_key(), expected);
                prop_assert_eq!(palette.get(expected), seed);
            }

            #[test]
            fn every_palette_has_the_full_key_set(r: u8, g: u8, b: u8) {
                let seed = Rgb { r, g, b }.to_hex();
                for strategy in [ScaleStrategy::Interpolation, ScaleStrategy::LightnessSteps] {
                    let palette = generate_palette_with(&seed, strategy).unwrap();
                    let keys: Vec<ShadeKey> = palette.iter().map(|(k, _)| k).collect();
                    prop_assert_eq!(keys, ShadeKey::ALL.to_vec());
                }
            }

            #[test]
            fn key_50_is_strictly_lighter_than_key_900(r: u8, g: u8, b: u8) {
                let seed = Rgb { r, g, b }.to_hex();
                for strategy in [ScaleStrategy::Interpolation, ScaleStrategy::LightnessSteps] {
                    let palette = generate_palette_with(&seed, strategy).unwrap();
                    let l50 = rgb_to_hsl(palette.get(ShadeKey::S50)).l;
                    let l900 = rgb_to_hsl(palette.get(ShadeKey::S900)).l;
                    prop_assert!(
                        l50 > l900,
                        "{} ({:?}): L(50)={} vs L(900)={}", seed, strategy, l50, l900
                    );
                }
            }

            #[test]
            fn stepped_palette_is_strictly_monotone(r: u8, g: u8, b: u8) {
                let seed = Rgb { r, g, b }.to_hex();
                let palette =
                    generate_palette_with(&seed, ScaleStrategy::LightnessSteps).unwrap();
                let levels: Vec<f64> =
                    palette.iter().map(|(_, c)| rgb_to_hsl(c).l).collect();
                for pair in levels.windows(2) {
                    prop_assert!(
                        pair[0] > pair[1],
                        "{}: {} -> {}", seed, pair[0], pair[1]
                    );
                }
            }
        }
    }
}
