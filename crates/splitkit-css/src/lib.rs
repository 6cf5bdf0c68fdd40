//! # SplitKit CSS
//!
//! Grid track parsing and style lookup for SplitKit resize handles.
//!
//! ## Design Goals
//!
//! 1. **Track parsing**: Turn `grid-template-*` values into typed tracks
//! 2. **Combination**: Write measured sizes back in the author's units
//! 3. **Style lookup**: Resolve a property across own and fallback styles
//! 4. **Graceful degradation**: Unsupported values become `None`, never errors

use thiserror::Error;

mod style;
mod template;
mod track;

pub use style::{first_style, get_styles, StyleMap, StyleSource};
pub use template::{combine, parse, TrackList};
pub use track::{gap_value, parse_track, Track, TrackUnit};

/// Errors that can occur in CSS operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CssError {
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// The grid axis a resize handle moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    Column,
    Row,
}

impl Axis {
    /// The `grid-template-*` property holding this axis' track list.
    pub fn template_property(self) -> &'static str {
        match self {
            Axis::Column => "grid-template-columns",
            Axis::Row => "grid-template-rows",
        }
    }

    /// Gap properties for this axis, modern name first, legacy alias second.
    pub fn gap_properties(self) -> [&'static str; 2] {
        match self {
            Axis::Column => ["column-gap", "grid-column-gap"],
            Axis::Row => ["row-gap", "grid-row-gap"],
        }
    }

    /// Resolve the pixel gap for this axis.
    ///
    /// Tries each gap property in order and returns the first one that
    /// resolves to a `px` length. Keywords such as `normal` are skipped.
    pub fn resolve_gap<O, F>(self, own: &[O], fallback: &[F]) -> Option<f64>
    where
        O: StyleSource,
        F: StyleSource,
    {
        self.gap_properties()
            .iter()
            .filter_map(|property| first_style(property, own, fallback))
            .find_map(|raw| gap_value("px", &raw))
    }
}
