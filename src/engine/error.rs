use thiserror::Error;

use crate::model::{Minutes, ReservationId, SeatId};

/// Why a reservation record cannot be allocated at all.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("party size {0} is not positive")]
    PartySize(i64),
    #[error("duration {0} is not positive")]
    Duration(Minutes),
    /// `start + duration` does not fit the time type.
    #[error("end of requested window overflows")]
    WindowOverflow,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid reservation {id}: {reason}")]
    InvalidReservation {
        id: ReservationId,
        reason: InvalidReason,
    },
    #[error("duplicate reservation id: {0}")]
    DuplicateReservation(ReservationId),
    #[error("seat {0} is outside the layout")]
    SeatOutOfRange(SeatId),
    #[error("limit exceeded: {0}")]
    LimitExceeded(&'static str),
}
