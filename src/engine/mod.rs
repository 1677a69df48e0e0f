mod availability;
mod error;
mod sequencer;
mod store;
mod validate;

pub use availability::{first_conflict, is_available};
pub use error::{EngineError, InvalidReason};
pub use sequencer::sequence;
pub use store::{SeatTimeline, TimelineStore};

use tracing::{debug, info, warn};

use crate::config::InvalidPolicy;
use crate::layout::SeatLayout;
use crate::model::*;
use crate::observability;

use validate::{validate_batch, validate_reservation, SeatRequest};

/// Seats reservations first-fit onto contiguous single-table seat blocks.
///
/// Owns every seat timeline; allocation takes `&mut self`, so reservations
/// are processed strictly one at a time.
pub struct Engine {
    layout: SeatLayout,
    store: TimelineStore,
    invalid_policy: InvalidPolicy,
}

impl Engine {
    pub fn new(layout: SeatLayout) -> Self {
        let store = TimelineStore::new(layout.seat_count());
        Self {
            layout,
            store,
            invalid_policy: InvalidPolicy::default(),
        }
    }

    pub fn with_invalid_policy(mut self, policy: InvalidPolicy) -> Self {
        self.invalid_policy = policy;
        self
    }

    pub fn layout(&self) -> &SeatLayout {
        &self.layout
    }

    pub fn store(&self) -> &TimelineStore {
        &self.store
    }

    /// Committed spans of `seat`.
    pub fn intervals_for(&self, seat: SeatId) -> &[Span] {
        self.store.intervals_for(seat)
    }

    /// Whether `seat` is free for all of `span`. Seats outside the layout are
    /// never free.
    pub fn is_seat_available(&self, seat: SeatId, span: &Span) -> bool {
        self.store
            .timeline(seat)
            .is_some_and(|tl| is_available(tl, span))
    }

    /// Lowest seat with a committed span overlapping `span`, and that span.
    pub fn first_blocked_seat(&self, span: &Span) -> Option<(SeatId, Span)> {
        self.layout.seats().find_map(|seat| {
            self.store
                .timeline(seat)
                .and_then(|tl| first_conflict(tl, span))
                .map(|conflict| (seat, conflict))
        })
    }

    /// First-fit search for `party_size` contiguous free seats on one table.
    /// Read-only; nothing is committed.
    pub fn find_block(&self, party_size: usize, span: &Span) -> Option<SeatBlock> {
        if party_size == 0 {
            return None;
        }
        let seat_count = self.layout.seat_count();
        for first in self.layout.seats() {
            let last = match first.checked_add(party_size - 1) {
                Some(last) if last <= seat_count => last,
                // every later start runs even further past the last seat
                _ => break,
            };
            let (Some(table), Some(last_table)) =
                (self.layout.table_of(first), self.layout.table_of(last))
            else {
                continue;
            };
            if table != last_table {
                continue;
            }
            if (first..=last).all(|seat| self.is_seat_available(seat, span)) {
                return Some(SeatBlock { table, first, last });
            }
        }
        None
    }

    /// Validate, search, and commit one reservation.
    ///
    /// Returns the seated block, `Ok(None)` when no block is free, or
    /// `InvalidReservation` for a non-positive party size or duration.
    pub fn allocate(
        &mut self,
        reservation: &Reservation,
    ) -> Result<Option<SeatBlock>, EngineError> {
        let request = validate_reservation(reservation).map_err(|reason| {
            EngineError::InvalidReservation {
                id: reservation.id,
                reason,
            }
        })?;
        self.allocate_request(reservation.id, request)
    }

    fn allocate_request(
        &mut self,
        id: ReservationId,
        request: SeatRequest,
    ) -> Result<Option<SeatBlock>, EngineError> {
        let SeatRequest { party_size, span } = request;
        metrics::histogram!(observability::PARTY_SIZE).record(party_size as f64);

        let Some(block) = self.find_block(party_size, &span) else {
            if party_size > self.layout.max_table_capacity() {
                debug!(
                    reservation = id,
                    party_size,
                    %span,
                    "no free block; largest table seats {}",
                    self.layout.max_table_capacity()
                );
            } else if let Some((seat, conflict)) = self.first_blocked_seat(&span) {
                debug!(
                    reservation = id,
                    party_size,
                    %span,
                    "no free block; seat {seat} first taken at {conflict}"
                );
            }
            return Ok(None);
        };

        // Commit only once the whole block is known to be free.
        for seat in block.seats() {
            self.store.append(seat, span)?;
        }
        metrics::counter!(observability::SEATS_COMMITTED_TOTAL)
            .increment(block.size() as u64);
        debug!(reservation = id, %span, "seated at {block}");
        Ok(Some(block))
    }

    /// Process a whole batch: validate, sequence, then allocate each
    /// reservation in order against the shared timelines.
    ///
    /// Duplicate ids always fail the batch. Invalid records fail it under
    /// [`InvalidPolicy::Reject`] and are reported unseated under
    /// [`InvalidPolicy::Unseated`]. Failures happen before any seat is touched.
    pub fn run_batch(
        &mut self,
        mut batch: Vec<Reservation>,
    ) -> Result<AllocationResult, EngineError> {
        validate_batch(&batch)?;
        if self.invalid_policy == InvalidPolicy::Reject {
            for r in &batch {
                validate_reservation(r)
                    .map_err(|reason| EngineError::InvalidReservation { id: r.id, reason })?;
            }
        }

        sequence(&mut batch);

        let mut result = AllocationResult::new();
        for r in &batch {
            let allocation = match validate_reservation(r) {
                Ok(request) => match self.allocate_request(r.id, request)? {
                    Some(block) => Allocation::Seated(block),
                    None => Allocation::Unseated,
                },
                Err(reason) => {
                    warn!(reservation = r.id, "marking unseated: {reason}");
                    Allocation::Invalid(reason)
                }
            };
            let outcome = observability::outcome_label(&allocation);
            metrics::counter!(observability::RESERVATIONS_TOTAL, "outcome" => outcome).increment(1);
            result.push(Outcome {
                id: r.id,
                allocation,
            });
        }

        info!(
            reservations = result.len(),
            seated = result.seated_count(),
            committed_spans = self.store.committed(),
            "batch complete"
        );
        Ok(result)
    }
}
