//! Track lists for `grid-template-columns` / `grid-template-rows`.

use smallvec::SmallVec;
use tracing::debug;

use crate::track::{parse_track, Track};

/// Parsed tracks of a rule, one entry per token.
///
/// `None` marks a token that could not be parsed.
pub type TrackList = SmallVec<[Option<Track>; 8]>;

/// Parse a grid template rule into its tracks.
///
/// The result has one entry per whitespace-separated token, in order.
/// A token that fails to parse becomes `None` without affecting its siblings.
pub fn parse(rule: &str) -> TrackList {
    let tracks: TrackList = rule.split_whitespace().map(parse_track).collect();
    debug!(
        rule,
        track_count = tracks.len(),
        unparsed = tracks.iter().filter(|t| t.is_none()).count(),
        "Parsed track list"
    );
    tracks
}

/// Merge override tracks into a declared rule.
///
/// Token count and order come from `rule`. Where `tracks` has a track at the
/// same index, that track is written with its own unit and magnitude;
/// everywhere else (`None` or past the end of `tracks`) the declared token is
/// kept as written.
pub fn combine(rule: &str, tracks: &[Option<Track>]) -> String {
    let combined = rule
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| match tracks.get(i).copied().flatten() {
            Some(track) => track.to_string(),
            None => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    debug!(rule, combined = %combined, "Combined track list");
    combined
}
