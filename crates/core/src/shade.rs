//! Shade keys: the ordered 50..900 labels of a Tailwind-style scale.

use std::fmt;

/// A position in the luminosity-ordered scale. Lower numbers are lighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl ShadeKey {
    /// All shade keys, ordered lightest to darkest.
    pub const ALL: [ShadeKey; 10] = [
        ShadeKey::S50,
        ShadeKey::S100,
        ShadeKey::S200,
        ShadeKey::S300,
        ShadeKey::S400,
        ShadeKey::S500,
        ShadeKey::S600,
        ShadeKey::S700,
        ShadeKey::S800,
        ShadeKey::S900,
    ];

    /// The numeric label, e.g. `50` for `S50`.
    pub fn as_u16(self) -> u16 {
        match self {
            ShadeKey::S50 => 50,
            ShadeKey::S100 => 100,
            ShadeKey::S200 => 200,
            ShadeKey::S300 => 300,
            ShadeKey::S400 => 400,
            ShadeKey::S500 => 500,
            ShadeKey::S600 => 600,
            ShadeKey::S700 => 700,
            ShadeKey::S800 => 800,
            ShadeKey::S900 => 900,
        }
    }

    /// Looks a shade key up by its numeric label.
    pub fn from_u16(label: u16) -> Option<ShadeKey> {
        ShadeKey::ALL.into_iter().find(|k| k.as_u16() == label)
    }

    /// The canonical target lightness (percent) for this key in the
    /// lightness-steps strategy: 95 for 50 down to 5 for 900.
    pub fn target_lightness(self) -> f64 {
        match self {
            ShadeKey::S50 => 95.0,
            ShadeKey::S100 => 85.0,
            ShadeKey::S200 => 75.0,
            ShadeKey::S300 => 65.0,
            ShadeKey::S400 => 55.0,
            ShadeKey::S500 => 45.0,
            ShadeKey::S600 => 35.0,
            ShadeKey::S700 => 25.0,
            ShadeKey::S800 => 15.0,
            ShadeKey::S900 => 5.0,
        }
    }

    /// Maps a lightness percentage to its shade key, scanning from lightest
    /// to darkest with inclusive lower bounds: l >= 90 is 50, l >= 80 is
    /// 100, and so on down to 900 for everything below 10.
    ///
    /// Total over all of [0, 100] (and tolerant of values outside it).
    pub fn for_lightness(l: f64) -> ShadeKey {
        if l >= 90.0 {
            ShadeKey::S50
        } else if l >= 80.0 {
            ShadeKey::S100
        } else if l >= 70.0 {
            ShadeKey::S200
        } else if l >= 60.0 {
            ShadeKey::S300
        } else if l >= 50.0 {
            ShadeKey::S400
        } else if l >= 40.0 {
            ShadeKey::S500
        } else if l >= 30.0 {
            ShadeKey::S600
        } else if l >= 20.0 {
            ShadeKey::S700
        } else if l >= 10.0 {
            ShadeKey::S800
        } else {
            ShadeKey::S900
        }
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}
