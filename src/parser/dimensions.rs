use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::EstimateError;

static TRIPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*x\s*(\d+(?:\.\d+)?)\s*x\s*(\d+(?:\.\d+)?)").unwrap()
});

const CM_PER_INCH: f64 = 2.54;

/// Box dimensions in inches. Order follows the source text: length, width,
/// height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Parse a free-text dimensions string like "10.2 x 5.1 x 3.4 inches" or
/// "25 x 13 x 9 cm" into inches.
///
/// A "cm" anywhere in the text (case-insensitive) marks the values as
/// centimeters; everything else is assumed already in inches. Decimal
/// separator is the period only.
pub fn parse(text: &str) -> Result<Dimensions, EstimateError> {
    let Some(caps) = TRIPLE_RE.captures(text) else {
        warn!("Could not parse dimensions text: {:?}", text);
        return Err(EstimateError::DimensionsUnparsable);
    };

    let parsed = (
        caps[1].parse::<f64>(),
        caps[2].parse::<f64>(),
        caps[3].parse::<f64>(),
    );
    let (mut length, mut width, mut height) = match parsed {
        (Ok(l), Ok(w), Ok(h)) if l.is_finite() && w.is_finite() && h.is_finite() => (l, w, h),
        _ => {
            warn!("Dimensions values out of range: {:?}", text);
            return Err(EstimateError::DimensionsUnparsable);
        }
    };

    if text.to_lowercase().contains("cm") {
        length /= CM_PER_INCH;
        width /= CM_PER_INCH;
        height /= CM_PER_INCH;
    }

    Ok(Dimensions {
        length,
        width,
        height,
    })
}

/// Surface area of a rectangular box, in square inches.
pub fn surface_area(dims: &Dimensions) -> f64 {
    2.0 * (dims.length * dims.width + dims.length * dims.height + dims.width * dims.height)
}

// ── Tests ──
