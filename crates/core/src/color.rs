//! Color types and conversion functions for colorgear.
//!
//! Five color models are supported: RGB, HEX, CMYK, HSL and HSV. RGB is the
//! pivot: every other model converts to and from RGB, never directly to each
//! other. Every conversion validates its input first (see [`crate::validate`])
//! and is a pure function of its arguments.
//!
//! Output conventions:
//! - RGB channels are 8-bit integers, rounded half-to-even.
//! - HSL/HSV hue is a whole number of degrees in `[0, 360)`; saturation,
//!   lightness and value are whole-number percentages in `[0, 100]`.
//! - CMYK components are fractions in `[0, 1]` rounded to two decimals.
//! - HEX strings are `#RRGGBB` in uppercase.

use std::str::FromStr;

use crate::error::ColorError;
use crate::validate::{parse_hex, validate_cmyk, validate_hsl, validate_hsv, validate_rgb};
use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CMYK color with fractional components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// HSL color: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// HSV color: hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    /// Builds an RGB color from unchecked integer channels.
    ///
    /// Returns `ColorError::InvalidColorValue` if any channel is outside `[0, 255]`.
    pub fn new(r: i64, g: i64, b: i64) -> Result<Rgb, ColorError> {
        validate_rgb(r, g, b)?;
        Ok(Rgb {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        })
    }

    /// Formats the color as `#RRGGBB` (uppercase, zero-padded).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts to CMYK using the `(1 - k)` division formula.
    pub fn to_cmyk(self) -> Cmyk {
        let (r, g, b) = self.normalized();
        let k = 1.0 - r.max(g).max(b);
        if k == 1.0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }
        Cmyk {
            c: round_to_hundredths((1.0 - r - k) / (1.0 - k)),
            m: round_to_hundredths((1.0 - g - k) / (1.0 - k)),
            y: round_to_hundredths((1.0 - b - k) / (1.0 - k)),
            k: round_to_hundredths(k),
        }
    }

    /// Converts to HSL with whole-number outputs.
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let s = if l > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            (hue_fraction(r, g, b, max, delta), s)
        };

        Hsl {
            h: round_hue(h),
            s: round_half_even(s * 100.0),
            l: round_half_even(l * 100.0),
        }
    }

    /// Converts to HSV with whole-number outputs.
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if max == min {
            0.0
        } else {
            hue_fraction(r, g, b, max, delta)
        };

        Hsv {
            h: round_hue(h),
            s: round_half_even(s * 100.0),
            v: round_half_even(max * 100.0),
        }
    }

    fn normalized(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parses a hex color string such as `"#FF5733"` or `"ff5733"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

impl Cmyk {
    /// Converts to RGB, validating the components first.
    pub fn to_rgb(self) -> Result<Rgb, ColorError> {
        cmyk_to_rgb(self.c, self.m, self.y, self.k)
    }
}

impl Hsl {
    /// Converts to RGB, validating the components first.
    pub fn to_rgb(self) -> Result<Rgb, ColorError> {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

impl Hsv {
    /// Converts to RGB, validating the components first.
    pub fn to_rgb(self) -> Result<Rgb, ColorError> {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

/// Converts RGB channels to an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> Result<String, ColorError> {
    Rgb::new(r, g, b).map(Rgb::to_hex)
}

/// Parses a 6-digit hex color (leading `#` optional, any case) into RGB.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let [r, g, b] = parse_hex(hex)?;
    Ok(Rgb { r, g, b })
}

/// Converts CMYK fractions to RGB: `channel = 255 * (1 - ink) * (1 - k)`.
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> Result<Rgb, ColorError> {
    validate_cmyk(c, m, y, k)?;
    Ok(Rgb {
        r: to_channel(255.0 * (1.0 - c) * (1.0 - k)),
        g: to_channel(255.0 * (1.0 - m) * (1.0 - k)),
        b: to_channel(255.0 * (1.0 - y) * (1.0 - k)),
    })
}

/// Converts HSL (degrees, percent, percent) to RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<Rgb, ColorError> {
    validate_hsl(h, s, l)?;
    let s = s / 100.0;
    let l = l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = secondary_chroma(h, c);
    Ok(hue_sextant(h, c, x, l - c / 2.0))
}

/// Converts HSV (degrees, percent, percent) to RGB.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Result<Rgb, ColorError> {
    validate_hsv(h, s, v)?;
    let s = s / 100.0;
    let v = v / 100.0;
    let c = v * s;
    let x = secondary_chroma(h, c);
    Ok(hue_sextant(h, c, x, v - c))
}

/// Converts RGB channels to CMYK. Pure black maps to `(0, 0, 0, 1)`.
pub fn rgb_to_cmyk(r: i64, g: i64, b: i64) -> Result<Cmyk, ColorError> {
    Rgb::new(r, g, b).map(Rgb::to_cmyk)
}

/// Converts RGB channels to HSL with whole-number outputs.
pub fn rgb_to_hsl(r: i64, g: i64, b: i64) -> Result<Hsl, ColorError> {
    Rgb::new(r, g, b).map(Rgb::to_hsl)
}

/// Converts RGB channels to HSV with whole-number outputs.
pub fn rgb_to_hsv(r: i64, g: i64, b: i64) -> Result<Hsv, ColorError> {
    Rgb::new(r, g, b).map(Rgb::to_hsv)
}

/// Intermediate component `x = c * (1 - |(h / 60) mod 2 - 1|)`.
fn secondary_chroma(h: f64, c: f64) -> f64 {
    c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs())
}

/// Maps chroma `c`, intermediate `x` and match `m` to RGB by hue sextant.
///
/// Shared by the HSL and HSV paths; only the chroma and match formulas differ
/// between the two. `h` must already be validated to `[0, 360)`.
fn hue_sextant(h: f64, c: f64, x: f64, m: f64) -> Rgb {
    let table = [
        (c, x, 0.0),
        (x, c, 0.0),
        (0.0, c, x),
        (0.0, x, c),
        (x, 0.0, c),
        (c, 0.0, x),
    ];
    let sextant = ((h / 60.0).floor() as usize).min(5);
    let (r, g, b) = table[sextant];
    Rgb {
        r: to_channel((r + m) * 255.0),
        g: to_channel((g + m) * 255.0),
        b: to_channel((b + m) * 255.0),
    }
}

/// Hue as a fraction of a full turn, picked by which channel is the maximum.
///
/// Ties resolve in red, green, blue order.
fn hue_fraction(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    sector / 6.0
}

/// Whole degrees in `[0, 360)`; a fraction that rounds up to 360 wraps to 0.
fn round_hue(fraction: f64) -> f64 {
    round_half_even(fraction * 360.0) % 360.0
}

fn round_half_even(value: f64) -> f64 {
    // `+ 0.0` folds a negative zero into positive zero.
    value.round_ties_even() + 0.0
}

/// Rounds to two decimals by the exact value of `value`, ties to even.
///
/// `value * 100.0` can itself round onto or off a tie, so the product error
/// (exact via `mul_add`) decides which side of the half the true value is on.
fn round_to_hundredths(value: f64) -> f64 {
    let magnitude = value.abs();
    let scaled = magnitude * 100.0;
    let residual = magnitude.mul_add(100.0, -scaled);
    let whole = scaled.floor();
    let excess = scaled - whole - 0.5;
    let rounded = if excess > -residual {
        whole + 1.0
    } else if excess < -residual || whole % 2.0 == 0.0 {
        whole
    } else {
        whole + 1.0
    };
    (rounded / 100.0).copysign(value) + 0.0
}

fn to_channel(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
