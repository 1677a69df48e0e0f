use crate::model::Reservation;

/// Order a batch for processing: earliest `received_at` first, smaller
/// parties first among equal arrivals. Stable, so remaining ties keep input
/// order.
pub fn sequence(batch: &mut [Reservation]) {
    batch.sort_by_key(|r| (r.received_at, r.party_size));
}
