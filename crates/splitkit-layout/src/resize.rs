//! Drag resizing of adjacent tracks.
//!
//! A resize handle sits between track `handle` and track `handle + 1`.
//! Dragging it moves the boundary between them: the pair's combined size is
//! preserved and every other track stays put. The new pixel sizes are then
//! written back in the units the rule declares, so a `1fr 1fr` grid stays
//! flexible after a drag.

use std::collections::HashMap;

use smallvec::smallvec;
use splitkit_css::{combine, parse, Track, TrackList};
use tracing::{debug, trace};

use crate::offsets::size_at_track;
use crate::ResizeError;

/// Resize configuration.
#[derive(Debug, Clone)]
pub struct ResizeConfig {
    /// Minimum size of any track, in pixels.
    pub min_size: f64,
    /// Per-track minimum sizes, overriding `min_size`.
    pub track_min_sizes: HashMap<usize, f64>,
    /// Distance from a minimum within which the boundary snaps to it.
    pub snap_offset: f64,
    /// Resized tracks land on multiples of this many pixels (1 = off).
    pub drag_interval: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_size: 0.0,
            track_min_sizes: HashMap::new(),
            snap_offset: 30.0,
            drag_interval: 1.0,
        }
    }
}

impl ResizeConfig {
    /// Set the minimum size of every track.
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the minimum size of one track.
    pub fn with_track_min_size(mut self, index: usize, min_size: f64) -> Self {
        self.track_min_sizes.insert(index, min_size);
        self
    }

    /// Set the snap distance.
    pub fn with_snap_offset(mut self, snap_offset: f64) -> Self {
        self.snap_offset = snap_offset;
        self
    }

    /// Set the drag interval.
    pub fn with_drag_interval(mut self, drag_interval: f64) -> Self {
        self.drag_interval = drag_interval;
        self
    }

    /// Minimum size for the track at `index`.
    pub fn min_size_for(&self, index: usize) -> f64 {
        self.track_min_sizes
            .get(&index)
            .copied()
            .unwrap_or(self.min_size)
    }
}

fn measured_px(tracks: &[Option<Track>], index: usize) -> Result<f64, ResizeError> {
    match tracks.get(index).copied().flatten() {
        Some(Track::Px(px)) if px.is_finite() => Ok(px),
        _ => Err(ResizeError::Unmeasured(index)),
    }
}

/// Compute new pixel sizes for the tracks on either side of a handle.
///
/// `position` is where the boundary between the two tracks (the end of track
/// `handle`) should move to, in the same coordinates as [`size_at_track`].
/// It is snapped to a minimum when within `snap_offset` of it, rounded to the
/// drag interval, then clamped so both tracks keep their minimum size.
pub fn resize_adjacent(
    tracks: &[Option<Track>],
    handle: usize,
    position: f64,
    gap: Option<f64>,
    config: &ResizeConfig,
) -> Result<(f64, f64), ResizeError> {
    let next = handle.saturating_add(1);
    if next >= tracks.len() {
        return Err(ResizeError::HandleOutOfRange {
            handle,
            track_count: tracks.len(),
        });
    }
    if !position.is_finite() {
        return Err(ResizeError::InvalidPosition(position));
    }
    measured_px(tracks, handle)?;
    measured_px(tracks, next)?;

    let gap_px = gap.unwrap_or(0.0);
    let start = size_at_track(handle, tracks, gap, false);
    let end = size_at_track(next, tracks, gap, true) - gap_px;

    let min_a = config.min_size_for(handle);
    let min_b = config.min_size_for(next);
    let lower = start + min_a;
    let upper = end - min_b;
    if lower.is_nan() || upper.is_nan() || lower > upper {
        return Err(ResizeError::Overconstrained {
            handle,
            required: min_a + min_b,
            available: end - start,
        });
    }

    let mut boundary = position;
    if config.snap_offset > 0.0 {
        if boundary < lower + config.snap_offset {
            trace!(handle, boundary, snapped = lower, "Snapped to leading minimum");
            boundary = lower;
        } else if boundary > upper - config.snap_offset {
            trace!(handle, boundary, snapped = upper, "Snapped to trailing minimum");
            boundary = upper;
        }
    }
    if config.drag_interval > 1.0 {
        let size = ((boundary - start) / config.drag_interval).round() * config.drag_interval;
        boundary = start + size;
    }
    boundary = boundary.clamp(lower, upper);

    let sizes = (boundary - start, end - boundary);
    debug!(
        handle,
        requested = position,
        boundary,
        a = sizes.0,
        b = sizes.1,
        "Resized adjacent tracks"
    );
    Ok(sizes)
}

/// Scale factors for turning measured pixels back into declared units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    /// Pixels per `fr`, if the fr tracks have any measured size.
    pub px_per_fr: Option<f64>,
    /// Size of the grid container along the axis, for `%` tracks.
    pub container_size: f64,
}

impl UnitScale {
    /// Derive the scale from the declared tracks and their measurements.
    pub fn measure(
        declared: &[Option<Track>],
        measured: &[Option<Track>],
        container_size: f64,
    ) -> Self {
        let (total_fr, fr_px) = declared
            .iter()
            .enumerate()
            .filter_map(|(i, track)| match track {
                Some(Track::Fr(fr)) => {
                    let px = measured.get(i).copied().flatten().and_then(|t| t.numeric());
                    Some((*fr, px.unwrap_or(0.0)))
                }
                _ => None,
            })
            .fold((0.0, 0.0), |(fr, px), (f, p)| (fr + f, px + p));

        let px_per_fr = (total_fr > 0.0 && fr_px > 0.0).then(|| fr_px / total_fr);
        Self {
            px_per_fr,
            container_size,
        }
    }

    /// Express `px` in the unit of `declared`.
    ///
    /// `px` and `auto` tracks become pixels. `fr` and `%` tracks keep their
    /// declared value when the scale for them is unknown.
    pub fn rescale(&self, declared: Track, px: f64) -> Track {
        match declared {
            Track::Px(_) | Track::Auto => Track::Px(px),
            Track::Fr(fr) => match self.px_per_fr {
                Some(px_per_fr) => Track::Fr(px / px_per_fr),
                None => Track::Fr(fr),
            },
            Track::Percent(pct) => {
                if self.container_size > 0.0 {
                    Track::Percent(px * 100.0 / self.container_size)
                } else {
                    Track::Percent(pct)
                }
            }
        }
    }
}

/// Convert measured pixel sizes into the units of the declared tracks.
///
/// Positions without a declared track or a measurement are `None`, which
/// [`combine`] treats as "keep the declared token".
pub fn to_declared_units(
    declared: &[Option<Track>],
    measured: &[Option<Track>],
    container_size: f64,
) -> TrackList {
    let scale = UnitScale::measure(declared, measured, container_size);
    declared
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let declared_track = (*track)?;
            let px = measured.get(i).copied().flatten()?.numeric()?;
            Some(scale.rescale(declared_track, px))
        })
        .collect()
}

/// Apply a handle drag to a declared rule.
///
/// `measured` holds the pixel sizes of the tracks at drag time. Only the two
/// tracks around the handle are rewritten; the fr scale is taken from the
/// measurement before the drag so untouched fr tracks keep their meaning.
pub fn drag_rule(
    rule: &str,
    measured: &[Option<Track>],
    handle: usize,
    position: f64,
    gap: Option<f64>,
    container_size: f64,
    config: &ResizeConfig,
) -> Result<String, ResizeError> {
    let declared = parse(rule);
    let (a, b) = resize_adjacent(measured, handle, position, gap, config)?;
    let scale = UnitScale::measure(&declared, measured, container_size);

    let mut overrides: TrackList = smallvec![None; declared.len()];
    for (index, px) in [(handle, a), (handle + 1, b)] {
        if let Some(Some(track)) = declared.get(index) {
            overrides[index] = Some(scale.rescale(*track, px));
        }
    }

    Ok(combine(rule, &overrides))
}
