use crate::model::*;

use super::store::SeatTimeline;

// ── Availability Check ────────────────────────────────────────────

/// A seat is free for `requested` iff no committed span `[a, b)` has
/// `a < requested.end && b > requested.start`. Checks every span, not just
/// the first one that happens to fit.
pub fn is_available(timeline: &SeatTimeline, requested: &Span) -> bool {
    first_conflict(timeline, requested).is_none()
}

/// Earliest-starting committed span that overlaps `requested`.
pub fn first_conflict(timeline: &SeatTimeline, requested: &Span) -> Option<Span> {
    timeline.overlapping(requested).next().copied()
}
