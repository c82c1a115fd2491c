#![deny(unsafe_code)]
//! Core color conversions for colorgear.
//!
//! Converts between five color notations (RGB, HEX, CMYK, HSL, HSV) with RGB
//! as the pivot, validating every input up front and failing with
//! [`ColorError::InvalidColorValue`]. On top of the conversions sit a text
//! parser and all-formats report (`format`), color harmonies (`harmony`) and
//! the coordinate mapping of an HSV color wheel (`wheel`).
//!
//! Everything here is a pure function of its arguments: no I/O, no shared
//! state, safe to call from any thread.

pub mod color;
pub mod error;
pub mod format;
pub mod harmony;
pub mod validate;
pub mod wheel;

pub use color::{
    cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl,
    rgb_to_hsv, Cmyk, Hsl, Hsv, Rgb,
};
pub use error::ColorError;
pub use format::{parse_color, ColorFormat, ColorReport};
pub use harmony::Harmony;
pub use validate::{validate_cmyk, validate_hsl, validate_hsv, validate_rgb};
pub use wheel::{ColorWheel, WheelPoint};
