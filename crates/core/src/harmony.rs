//! Color harmonies on the HSV hue circle.
//!
//! Each scheme is a fixed set of hue offsets from a base color. Saturation and
//! value are carried over from the base unchanged, so a harmony of a fully
//! saturated color stays fully saturated.

use std::fmt;
use std::str::FromStr;

use crate::color::{Hsv, Rgb};
use crate::error::ColorError;
use crate::validate::validate_hsv;
use serde::{Deserialize, Serialize};

/// A color-wheel harmony scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    /// The opposite hue: +180 degrees.
    Complementary,
    /// Neighbours on either side: -30 and +30 degrees.
    Analogous,
    /// Three evenly spaced hues: +120 and -120 degrees.
    Triadic,
    /// Four evenly spaced hues: +90, +180 and +270 degrees.
    Tetradic,
    /// The two hues flanking the complement: +150 and -150 degrees.
    SplitComplementary,
}

impl Harmony {
    /// All schemes, in display order.
    pub const ALL: [Harmony; 5] = [
        Harmony::Complementary,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::Tetradic,
        Harmony::SplitComplementary,
    ];

    /// Kebab-case name, e.g. `"split-complementary"`.
    pub fn name(self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::Tetradic => "tetradic",
            Harmony::SplitComplementary => "split-complementary",
        }
    }

    /// Hue offsets in degrees, one per generated color. The base is not included.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            Harmony::Complementary => &[180.0],
            Harmony::Analogous => &[-30.0, 30.0],
            Harmony::Triadic => &[120.0, -120.0],
            Harmony::Tetradic => &[90.0, 180.0, 270.0],
            Harmony::SplitComplementary => &[150.0, -150.0],
        }
    }

    /// Rotates a validated HSV base by each offset of this scheme.
    pub fn apply(self, base: Hsv) -> Result<Vec<Hsv>, ColorError> {
        validate_hsv(base.h, base.s, base.v)?;
        Ok(self
            .offsets()
            .iter()
            .map(|&offset| Hsv {
                h: rotate_hue(base.h, offset),
                ..base
            })
            .collect())
    }

    /// Harmony colors for an RGB base, pivoting through HSV.
    pub fn colors(self, base: Rgb) -> Result<Vec<Rgb>, ColorError> {
        self.apply(base.to_hsv())?
            .into_iter()
            .map(Hsv::to_rgb)
            .collect()
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = ColorError;

    /// Accepts the kebab-case name in any case; `_` and spaces count as `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|ch| match ch {
                '_' | ' ' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Harmony::ALL
            .into_iter()
            .find(|harmony| harmony.name() == normalized)
            .ok_or_else(|| {
                ColorError::unknown(
                    "harmony",
                    s,
                    "one of complementary, analogous, triadic, tetradic, split-complementary",
                )
            })
    }
}

/// Adds `degrees` to hue `h` and wraps the result into `[0, 360)`.
pub fn rotate_hue(h: f64, degrees: f64) -> f64 {
    let wrapped = (h + degrees).rem_euclid(360.0);
    // rem_euclid of a tiny negative number rounds up to exactly 360.0.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
