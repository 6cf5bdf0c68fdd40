//! Single track values and unit parsing.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::CssError;

/// The unit of a grid track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackUnit {
    /// Fixed length in pixels.
    Px,
    /// Fractional unit (flexible).
    Fr,
    /// Percentage of the grid container.
    Percent,
    /// Auto sizing.
    Auto,
}

impl TrackUnit {
    /// The CSS spelling of this unit.
    pub fn as_str(self) -> &'static str {
        match self {
            TrackUnit::Px => "px",
            TrackUnit::Fr => "fr",
            TrackUnit::Percent => "%",
            TrackUnit::Auto => "auto",
        }
    }
}

impl fmt::Display for TrackUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single grid track size.
///
/// The `Display` output is the canonical serialized value (`"2px"`, `"1fr"`,
/// `"40%"`, `"auto"`), so a track never carries a separate value string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    /// Fixed length in pixels.
    Px(f64),
    /// Fractional unit (flexible).
    Fr(f64),
    /// Percentage of the grid container.
    Percent(f64),
    /// Auto sizing.
    Auto,
}

impl Track {
    /// Build a track from a unit and magnitude. `Auto` ignores the magnitude.
    pub fn new(unit: TrackUnit, numeric: f64) -> Self {
        match unit {
            TrackUnit::Px => Track::Px(numeric),
            TrackUnit::Fr => Track::Fr(numeric),
            TrackUnit::Percent => Track::Percent(numeric),
            TrackUnit::Auto => Track::Auto,
        }
    }

    /// Get the unit of this track.
    pub fn unit(&self) -> TrackUnit {
        match self {
            Track::Px(_) => TrackUnit::Px,
            Track::Fr(_) => TrackUnit::Fr,
            Track::Percent(_) => TrackUnit::Percent,
            Track::Auto => TrackUnit::Auto,
        }
    }

    /// Get the magnitude of this track (`None` for `auto`).
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Track::Px(v) | Track::Fr(v) | Track::Percent(v) => Some(*v),
            Track::Auto => None,
        }
    }

    /// Check if this is a flexible track (fr units).
    pub fn is_flexible(&self) -> bool {
        matches!(self, Track::Fr(_))
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.numeric() {
            Some(numeric) => write!(f, "{}{}", numeric, self.unit()),
            None => f.write_str(self.unit().as_str()),
        }
    }
}

impl FromStr for Track {
    type Err = CssError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value == "auto" {
            return Ok(Track::Auto);
        }

        let (number, unit) = if let Some(number) = value.strip_suffix("px") {
            (number, TrackUnit::Px)
        } else if let Some(number) = value.strip_suffix("fr") {
            (number, TrackUnit::Fr)
        } else if let Some(number) = value.strip_suffix('%') {
            (number, TrackUnit::Percent)
        } else {
            return Err(CssError::UnsupportedUnit(value.to_string()));
        };

        let numeric =
            parse_number(number).ok_or_else(|| CssError::InvalidNumber(value.to_string()))?;
        Ok(Track::new(unit, numeric))
    }
}

/// Parse a single track token.
///
/// Unsupported units and malformed numbers yield `None` so callers can skip
/// the position without error handling.
pub fn parse_track(value: &str) -> Option<Track> {
    match value.parse::<Track>() {
        Ok(track) => Some(track),
        Err(err) => {
            trace!(token = value, %err, "Track token not parsed");
            None
        }
    }
}

/// Extract the magnitude of a gap style such as `"10px"` for `unit`.
///
/// Returns `None` when the value does not end with `unit` or is not a
/// number (e.g. `normal`). No unit conversion is performed.
pub fn gap_value(unit: &str, raw: &str) -> Option<f64> {
    let number = raw.trim().strip_suffix(unit)?;
    parse_number(number)
}

/// Parse a finite, non-negative CSS number.
fn parse_number(value: &str) -> Option<f64> {
    let num = value.trim().parse::<f64>().ok()?;
    if num.is_finite() && num >= 0.0 {
        // Folds `-0` into `0`.
        Some(num + 0.0)
    } else {
        None
    }
}
