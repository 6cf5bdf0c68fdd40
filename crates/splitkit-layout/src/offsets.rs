//! Track boundary offsets.

use splitkit_css::Track;

/// Magnitude of a measured track; unparsed and `auto` tracks count as 0.
pub(crate) fn measured_size(track: Option<&Option<Track>>) -> f64 {
    track
        .copied()
        .flatten()
        .and_then(|t| t.numeric())
        .unwrap_or(0.0)
}

/// Offset of a boundary of `tracks[index]`.
///
/// With `end == false` this is the start of the track: every track before it
/// plus one `gap` per boundary crossed. With `end == true` the track's own
/// size is added on top; its trailing gap is not. A missing gap counts as 0.
pub fn size_at_track(
    index: usize,
    tracks: &[Option<Track>],
    gap: Option<f64>,
    end: bool,
) -> f64 {
    let gap = gap.unwrap_or(0.0);
    let before: f64 = (0..index).map(|i| measured_size(tracks.get(i))).sum();
    let start = before + gap * index as f64;

    if end {
        start + measured_size(tracks.get(index))
    } else {
        start
    }
}

/// Index of the first track with a positive size.
///
/// Falls back to the last index when every track is collapsed, so a resize
/// handle always has an anchor. Returns `None` only for an empty list.
pub fn first_non_zero(tracks: &[Option<Track>]) -> Option<usize> {
    tracks
        .iter()
        .position(|t| measured_size(Some(t)) > 0.0)
        .or_else(|| tracks.len().checked_sub(1))
}
