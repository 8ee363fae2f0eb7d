use std::fmt;

use crate::color::Rgb;

pub const DEFAULT_THRESHOLD: u8 = 180;

/// Fills whose components differ by this much or more are too saturated to
/// count as background, however bright.
pub const SPREAD_LIMIT: u128 = 80;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Distance from black to white.
pub const MAX_DISTANCE: f64 = 255.0 * SQRT_3;

/// A `fill-opacity` value, rounded to three decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opacity(f64);

impl Opacity {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Opacity {
    // shortest form that keeps a fractional digit: 0.0, 0.216, 1.0
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

pub fn distance_to_white(rgb: &Rgb) -> f64 {
    let dr = 255_i128.abs_diff(rgb.red()) as f64;
    let dg = 255_i128.abs_diff(rgb.green()) as f64;
    let db = 255_i128.abs_diff(rgb.blue()) as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Bright and low saturation: a background candidate.
pub fn qualifies(rgb: &Rgb, threshold: i32) -> bool {
    rgb.max_component() > i128::from(threshold) && rgb.spread() < SPREAD_LIMIT
}

pub fn opacity_from_distance(distance: f64) -> Opacity {
    let norm = (distance / MAX_DISTANCE).min(1.0);
    Opacity(round3(norm))
}

/// `None` leaves the shape untouched.
pub fn decide(rgb: &Rgb, threshold: i32) -> Option<Opacity> {
    if !qualifies(rgb, threshold) {
        return None;
    }
    Some(opacity_from_distance(distance_to_white(rgb)))
}

// Decimal rounding of the exact binary value, ties to even.
fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}

#[derive(Debug, Clone, Copy)]
pub struct OpacityMapper {
    threshold: i32,
}

impl OpacityMapper {
    pub fn new(threshold: i32) -> Self {
        OpacityMapper { threshold }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    pub fn decide(&self, rgb: &Rgb) -> Option<Opacity> {
        decide(rgb, self.threshold)
    }
}

impl Default for OpacityMapper {
    fn default() -> Self {
        OpacityMapper::new(i32::from(DEFAULT_THRESHOLD))
    }
}
