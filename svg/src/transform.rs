use std::fmt;

use crate::color::{parse_color, Rgb};
use crate::errors::SVGResult;
use crate::opacity::{decide, Opacity};

/// Outcome for a single shape fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    Unparseable,
    Unchanged(Rgb),
    Transparent(Rgb, Opacity),
}

impl Decision {
    pub fn opacity(&self) -> Option<Opacity> {
        match self {
            Decision::Transparent(_, opacity) => Some(*opacity),
            _ => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Unparseable => write!(f, "skip"),
            Decision::Unchanged(_) => write!(f, "keep"),
            Decision::Transparent(_, opacity) => write!(f, "fill-opacity={}", opacity),
        }
    }
}

pub fn decide_fill(fill: Option<&str>, threshold: i32) -> SVGResult<Decision> {
    let Some(rgb) = parse_color(fill)? else {
        return Ok(Decision::Unparseable);
    };
    match decide(&rgb, threshold) {
        Some(opacity) => Ok(Decision::Transparent(rgb, opacity)),
        None => Ok(Decision::Unchanged(rgb)),
    }
}
