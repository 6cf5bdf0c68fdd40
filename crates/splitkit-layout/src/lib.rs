//! # SplitKit Layout
//!
//! Track geometry for drag-resizable CSS grids.
//!
//! ## Overview
//!
//! Works on tracks that were already measured by the rendering layer
//! (usually the computed `grid-template-*` value, which is all `px`):
//! - Boundary offsets with inter-track gaps ([`size_at_track`])
//! - Anchor selection that skips collapsed tracks ([`first_non_zero`])
//! - Drag resizing of two adjacent tracks ([`resize_adjacent`], [`drag_rule`])
//! - Conversion of measured pixels back to declared units ([`UnitScale`])
//!
//! Nothing here touches a DOM; results are handed back as numbers or rule
//! strings.

use thiserror::Error;

mod offsets;
mod resize;

pub use offsets::{first_non_zero, size_at_track};
pub use resize::{drag_rule, resize_adjacent, to_declared_units, ResizeConfig, UnitScale};

/// Errors that can occur while resizing tracks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResizeError {
    #[error("Handle {handle} has no track after it ({track_count} tracks)")]
    HandleOutOfRange { handle: usize, track_count: usize },

    #[error("Track {0} has no pixel measurement")]
    Unmeasured(usize),

    #[error("Tracks around handle {handle} need {required}px but only {available}px are available")]
    Overconstrained {
        handle: usize,
        required: f64,
        available: f64,
    },

    #[error("Invalid handle position: {0}")]
    InvalidPosition(f64),
}
