//! First-fit seating of dining reservations onto contiguous seats of a
//! single table.
//!
//! Reservations are ordered by arrival (smaller parties first on ties), then
//! each one claims the lowest-numbered run of free seats that fits on one
//! table for its whole time window.

pub mod config;
pub mod engine;
pub mod input;
pub mod layout;
pub mod limits;
pub mod model;
pub mod observability;
pub mod report;
