use crate::model::*;

use super::EngineError;

/// Committed occupations of one seat, sorted by `start`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatTimeline {
    spans: Vec<Span>,
}

impl SeatTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert maintaining sort order by `start`.
    pub fn insert(&mut self, span: Span) {
        let pos = self
            .spans
            .binary_search_by_key(&span.start, |s| s.start)
            .unwrap_or_else(|e| e);
        self.spans.insert(pos, span);
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Spans that overlap `query`.
    /// Uses binary search to skip spans starting at or after `query.end`.
    pub fn overlapping(&self, query: &Span) -> impl Iterator<Item = &Span> {
        // Everything at index >= right_bound starts at or after query.end → can't overlap.
        let right_bound = self.spans.partition_point(|s| s.start < query.end);
        self.spans[..right_bound]
            .iter()
            .filter(move |s| s.end > query.start)
    }
}

/// Per-seat timelines for every seat of a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStore {
    /// `timelines[seat - 1]` belongs to `seat`.
    timelines: Vec<SeatTimeline>,
}

impl TimelineStore {
    pub fn new(seat_count: usize) -> Self {
        Self {
            timelines: vec![SeatTimeline::new(); seat_count],
        }
    }

    pub fn timeline(&self, seat: SeatId) -> Option<&SeatTimeline> {
        seat.checked_sub(1).and_then(|idx| self.timelines.get(idx))
    }

    pub fn append(&mut self, seat: SeatId, span: Span) -> Result<(), EngineError> {
        let timeline = seat
            .checked_sub(1)
            .and_then(|idx| self.timelines.get_mut(idx))
            .ok_or(EngineError::SeatOutOfRange(seat))?;
        debug_assert!(
            timeline.overlapping(&span).next().is_none(),
            "seat {seat} double-booked at {span}"
        );
        timeline.insert(span);
        Ok(())
    }

    /// Committed spans of `seat`; empty for seats outside the store.
    pub fn intervals_for(&self, seat: SeatId) -> &[Span] {
        self.timeline(seat).map(SeatTimeline::spans).unwrap_or(&[])
    }

    /// Total committed spans across all seats.
    pub fn committed(&self) -> usize {
        self.timelines.iter().map(SeatTimeline::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_keeps_start_order() {
        let mut tl = SeatTimeline::new();
        tl.insert(Span::new(300, 400));
        tl.insert(Span::new(100, 200));
        tl.insert(Span::new(200, 300));
        let starts: Vec<_> = tl.spans().iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![100, 200, 300]);
    }

    #[test]
    fn overlapping_skips_past_and_future() {
        let mut tl = SeatTimeline::new();
        tl.insert(Span::new(100, 200));
        tl.insert(Span::new(450, 600));
        tl.insert(Span::new(1000, 1100));

        let hits: Vec<_> = tl.overlapping(&Span::new(500, 800)).collect();
        assert_eq!(hits, vec![&Span::new(450, 600)]);
    }

    #[test]
    fn overlapping_adjacent_not_included() {
        // Span ending exactly at query.start is NOT overlapping (half-open)
        let mut tl = SeatTimeline::new();
        tl.insert(Span::new(100, 200));
        assert!(tl.overlapping(&Span::new(200, 300)).next().is_none());
        assert!(tl.overlapping(&Span::new(50, 100)).next().is_none());
    }

    #[test]
    fn overlapping_large_span_covering_query() {
        let mut tl = SeatTimeline::new();
        tl.insert(Span::new(0, 10_000));
        assert_eq!(tl.overlapping(&Span::new(500, 600)).count(), 1);
    }

    #[test]
    fn store_append_and_read() {
        let mut store = TimelineStore::new(12);
        store.append(3, Span::new(100, 160)).unwrap();
        store.append(3, Span::new(0, 50)).unwrap();
        assert_eq!(
            store.intervals_for(3),
            &[Span::new(0, 50), Span::new(100, 160)]
        );
        assert!(store.intervals_for(4).is_empty());
        assert_eq!(store.committed(), 2);
    }

    #[test]
    fn store_rejects_unknown_seat() {
        let mut store = TimelineStore::new(12);
        assert_eq!(
            store.append(0, Span::new(0, 10)),
            Err(EngineError::SeatOutOfRange(0))
        );
        assert_eq!(
            store.append(13, Span::new(0, 10)),
            Err(EngineError::SeatOutOfRange(13))
        );
        assert!(store.intervals_for(13).is_empty());
        assert_eq!(store.committed(), 0);
    }
}
