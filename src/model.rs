use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::InvalidReason;

/// Time unit of the input, e.g. minutes from opening. The only time type.
pub type Minutes = i64;

/// One-based seat identifier.
pub type SeatId = usize;

/// Caller-supplied reservation identifier, unique per batch.
pub type ReservationId = i64;

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Minutes,
    pub end: Minutes,
}

impl Span {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A dining reservation as read from the input source.
///
/// Numeric fields are signed so that bad records survive parsing and can be
/// reported by the engine instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "requestID", alias = "requestId")]
    pub id: ReservationId,
    #[serde(rename = "receivedTime")]
    pub received_at: i64,
    #[serde(rename = "startTime")]
    pub start: Minutes,
    pub duration: Minutes,
    #[serde(rename = "numberOfPeople")]
    pub party_size: i64,
}

impl Reservation {
    pub fn new(
        id: ReservationId,
        received_at: i64,
        start: Minutes,
        duration: Minutes,
        party_size: i64,
    ) -> Self {
        Self {
            id,
            received_at,
            start,
            duration,
            party_size,
        }
    }

    /// The requested occupation window, or `None` when the duration is not
    /// positive or the end would overflow.
    pub fn span(&self) -> Option<Span> {
        if self.duration <= 0 {
            return None;
        }
        let end = self.start.checked_add(self.duration)?;
        Some(Span::new(self.start, end))
    }
}

/// Zero-based table index within a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub usize);

impl fmt::Display for TableId {
    /// `A`..`Z` for the first 26 tables, `T27`, `T28`, ... after that.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 26 {
            write!(f, "{}", (b'A' + self.0 as u8) as char)
        } else {
            write!(f, "T{}", self.0 + 1)
        }
    }
}

/// Contiguous run of seats `first..=last` on one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatBlock {
    pub table: TableId,
    pub first: SeatId,
    pub last: SeatId,
}

impl SeatBlock {
    pub fn seats(&self) -> std::ops::RangeInclusive<SeatId> {
        self.first..=self.last
    }

    pub fn size(&self) -> usize {
        self.last - self.first + 1
    }
}

impl fmt::Display for SeatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table {} seats {}-{}", self.table, self.first, self.last)
    }
}

// ── Allocation result types ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    Seated(SeatBlock),
    /// No qualifying block was free.
    Unseated,
    /// Skipped because the record itself is unusable.
    Invalid(InvalidReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub id: ReservationId,
    pub allocation: Allocation,
}

impl Outcome {
    pub fn is_seated(&self) -> bool {
        matches!(self.allocation, Allocation::Seated(_))
    }

    pub fn block(&self) -> Option<SeatBlock> {
        match self.allocation {
            Allocation::Seated(block) => Some(block),
            _ => None,
        }
    }
}

/// Per-reservation outcomes of a batch, in processing order, with keyed lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationResult {
    outcomes: Vec<Outcome>,
    index: HashMap<ReservationId, usize>,
}

impl AllocationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome. Ids are unique per batch; a repeated id replaces the lookup entry.
    pub fn push(&mut self, outcome: Outcome) {
        self.index.insert(outcome.id, self.outcomes.len());
        self.outcomes.push(outcome);
    }

    pub fn get(&self, id: ReservationId) -> Option<&Outcome> {
        self.index.get(&id).map(|&idx| &self.outcomes[idx])
    }

    pub fn is_seated(&self, id: ReservationId) -> Option<bool> {
        self.get(id).map(Outcome::is_seated)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn seated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_seated()).count()
    }

    /// Plain id → seated mapping.
    pub fn to_map(&self) -> HashMap<ReservationId, bool> {
        self.outcomes.iter().map(|o| (o.id, o.is_seated())).collect()
    }
}
