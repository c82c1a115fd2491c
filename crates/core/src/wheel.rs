//! Geometry of a square HSV color wheel image.
//!
//! The wheel is a disc inscribed in a `size x size` image. Hue is the angle
//! around the center, saturation the distance from it, and value is always
//! 100. Only the coordinate mapping lives here; drawing the wheel is left to
//! the caller.

use std::f64::consts::{PI, TAU};

use crate::color::{hsv_to_rgb, Hsv, Rgb};
use crate::error::ColorError;
use crate::harmony::{rotate_hue, Harmony};
use crate::validate::validate_hsv;
use serde::{Deserialize, Serialize};

/// Default wheel edge length in pixels.
pub const DEFAULT_WHEEL_SIZE: u32 = 300;

/// A pixel on the wheel together with the color drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelPoint {
    pub x: i64,
    pub y: i64,
    pub color: Rgb,
}

/// Square color wheel of a given edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorWheel {
    size: u32,
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self {
            size: DEFAULT_WHEEL_SIZE,
        }
    }
}

impl ColorWheel {
    /// Creates a wheel `size` pixels wide. Sizes below 2 have no usable disc.
    pub fn new(size: u32) -> Result<Self, ColorError> {
        if size < 2 {
            return Err(ColorError::invalid("wheel size", size, "at least 2 pixels"));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    fn center(&self) -> i64 {
        (self.size / 2) as i64
    }

    fn radius(&self) -> f64 {
        (self.size / 2) as f64
    }

    fn in_bounds(&self, x: i64, y: i64) -> bool {
        (0..self.size as i64).contains(&x) && (0..self.size as i64).contains(&y)
    }

    /// HSV color at pixel `(x, y)`, or `None` outside the image or the disc.
    pub fn hsv_at(&self, x: i64, y: i64) -> Option<Hsv> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let dx = (x - self.center()) as f64;
        let dy = (y - self.center()) as f64;
        let distance = dx.hypot(dy);
        if distance > self.radius() {
            return None;
        }
        // atan2 yields +PI on the negative x axis, which would map to hue 360.
        let hue = rotate_hue((dy.atan2(dx) + PI) / TAU * 360.0, 0.0);
        Some(Hsv {
            h: hue,
            s: (distance / self.radius() * 100.0).min(100.0),
            v: 100.0,
        })
    }

    /// RGB color at pixel `(x, y)`, or `None` outside the image or the disc.
    pub fn color_at(&self, x: i64, y: i64) -> Option<Rgb> {
        let hsv = self.hsv_at(x, y)?;
        hsv_to_rgb(hsv.h, hsv.s, hsv.v).ok()
    }

    /// Pixel where `hsv`'s hue and saturation are drawn. Value is ignored.
    pub fn position_of(&self, hsv: Hsv) -> Result<(i64, i64), ColorError> {
        validate_hsv(hsv.h, hsv.s, hsv.v)?;
        let angle = hsv.h / 360.0 * TAU - PI;
        let distance = hsv.s / 100.0 * self.radius();
        let x = self.center() + (distance * angle.cos()).round() as i64;
        let y = self.center() + (distance * angle.sin()).round() as i64;
        Ok((x.min(self.size as i64 - 1), y.min(self.size as i64 - 1)))
    }

    /// Companion points of `harmony` for the pixel `(x, y)`.
    ///
    /// Each point is `(x, y)` rotated about the center by one of the scheme's
    /// offsets, rounded to the nearest pixel. Points that fall off the image
    /// or outside the disc are dropped. A base pixel off the image has no
    /// companions.
    pub fn harmony_points(&self, harmony: Harmony, x: i64, y: i64) -> Vec<WheelPoint> {
        if !self.in_bounds(x, y) {
            return Vec::new();
        }
        let dx = (x - self.center()) as f64;
        let dy = (y - self.center()) as f64;
        harmony
            .offsets()
            .iter()
            .filter_map(|offset| {
                let (sin, cos) = offset.to_radians().sin_cos();
                let px = self.center() + (dx * cos - dy * sin).round() as i64;
                let py = self.center() + (dx * sin + dy * cos).round() as i64;
                self.color_at(px, py).map(|color| WheelPoint {
                    x: px,
                    y: py,
                    color,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_white() {
        let wheel = ColorWheel::default();
        assert_eq!(wheel.color_at(150, 150), Some(Rgb { r: 255, g: 255, b: 255 }));
    }

    #[test]
    fn negative_x_axis_is_red_not_an_error() {
        let wheel = ColorWheel::default();
        let hsv = wheel.hsv_at(0, 150).unwrap();
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 100.0);
        assert_eq!(wheel.color_at(0, 150), Some(Rgb { r: 255, g: 0, b: 0 }));
    }

    #[test]
    fn positive_x_axis_is_cyan() {
        let wheel = ColorWheel::default();
        let hsv = wheel.hsv_at(299, 150).unwrap();
        assert!((hsv.h - 180.0).abs() < 1e-9, "hue was {}", hsv.h);
        let color = wheel.color_at(299, 150).unwrap();
        assert_eq!((color.g, color.b), (255, 255));
        assert!(color.r <= 2, "red was {}", color.r);
    }

    #[test]
    fn corners_are_outside_the_disc() {
        let wheel = ColorWheel::default();
        assert_eq!(wheel.hsv_at(0, 0), None);
        assert_eq!(wheel.color_at(299, 299), None);
    }

    #[test]
    fn out_of_image_points_are_rejected() {
        let wheel = ColorWheel::default();
        assert_eq!(wheel.hsv_at(-1, 150), None);
        assert_eq!(wheel.hsv_at(150, 300), None);
    }

    #[test]
    fn tiny_wheels_are_rejected() {
        assert!(ColorWheel::new(0).is_err());
        assert!(ColorWheel::new(1).is_err());
        assert_eq!(ColorWheel::new(64).unwrap().size(), 64);
    }

    #[test]
    fn position_of_inverts_hsv_at() {
        let wheel = ColorWheel::default();
        for (x, y) in [(100, 100), (10, 150), (150, 20), (220, 260), (150, 150)] {
            let hsv = wheel.hsv_at(x, y).unwrap();
            assert_eq!(wheel.position_of(hsv).unwrap(), (x, y), "point ({x}, {y})");
        }
    }

    #[test]
    fn complementary_point_is_the_reflection_through_center() {
        let wheel = ColorWheel::default();
        let points = wheel.harmony_points(Harmony::Complementary, 100, 100);
        assert_eq!(points.len(), 1);
        assert_eq!((points[0].x, points[0].y), (200, 200));
        assert_eq!(Some(points[0].color), wheel.color_at(200, 200));
    }

    #[test]
    fn harmony_points_stay_on_the_wheel() {
        let wheel = ColorWheel::default();
        for harmony in Harmony::ALL {
            let points = wheel.harmony_points(harmony, 120, 140);
            assert_eq!(points.len(), harmony.offsets().len(), "{harmony}");
            for p in points {
                assert!(wheel.color_at(p.x, p.y).is_some(), "{harmony}: {p:?}");
            }
        }
    }

    #[test]
    fn harmony_points_of_an_off_image_pixel_are_empty() {
        let wheel = ColorWheel::default();
        for harmony in Harmony::ALL {
            assert!(wheel.harmony_points(harmony, i64::MIN, 0).is_empty());
            assert!(wheel.harmony_points(harmony, 150, i64::MAX).is_empty());
            assert!(wheel.harmony_points(harmony, -1, 150).is_empty());
        }
    }

    #[test]
    fn triadic_points_sit_roughly_120_degrees_apart_in_hue() {
        let wheel = ColorWheel::default();
        let base = wheel.hsv_at(30, 150).unwrap();
        let points = wheel.harmony_points(Harmony::Triadic, 30, 150);
        let hues: Vec<f64> = points
            .iter()
            .map(|p| wheel.hsv_at(p.x, p.y).unwrap().h)
            .collect();
        let expected = [rotate_hue(base.h, 120.0), rotate_hue(base.h, -120.0)];
        for (got, want) in hues.iter().zip(expected) {
            assert!((got - want).abs() < 1.0, "hue {got} vs {want}");
        }
    }
}
