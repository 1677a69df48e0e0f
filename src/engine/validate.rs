use std::collections::HashSet;

use crate::limits::*;
use crate::model::*;

use super::error::InvalidReason;
use super::EngineError;

/// A reservation that passed validation, ready for the block search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SeatRequest {
    pub party_size: usize,
    pub span: Span,
}

pub(crate) fn validate_reservation(r: &Reservation) -> Result<SeatRequest, InvalidReason> {
    if r.party_size <= 0 {
        return Err(InvalidReason::PartySize(r.party_size));
    }
    if r.duration <= 0 {
        return Err(InvalidReason::Duration(r.duration));
    }
    let span = r.span().ok_or(InvalidReason::WindowOverflow)?;
    // A party wider than the address space can never fit; saturate instead of failing.
    let party_size = usize::try_from(r.party_size).unwrap_or(usize::MAX);
    Ok(SeatRequest { party_size, span })
}

pub(crate) fn validate_batch(batch: &[Reservation]) -> Result<(), EngineError> {
    if batch.len() > MAX_BATCH_SIZE {
        return Err(EngineError::LimitExceeded("batch too large"));
    }
    let mut seen = HashSet::with_capacity(batch.len());
    for r in batch {
        if !seen.insert(r.id) {
            return Err(EngineError::DuplicateReservation(r.id));
        }
    }
    Ok(())
}
