use std::io;
use std::path::Path;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;

use crate::model::Allocation;

// ── Run metrics ─────────────────────────────────────────────────

/// Counter: reservations processed. Labels: outcome.
pub const RESERVATIONS_TOTAL: &str = "seatplan_reservations_total";

/// Histogram: requested party size of every valid reservation.
pub const PARTY_SIZE: &str = "seatplan_party_size";

/// Counter: seat spans committed to timelines.
pub const SEATS_COMMITTED_TOTAL: &str = "seatplan_seats_committed_total";

/// Log to stderr so stdout carries only results. `RUST_LOG` overrides the
/// default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Install an in-process Prometheus recorder when a snapshot file is wanted.
/// No-op (metrics macros stay inert) if `snapshot` is None.
pub fn init(snapshot: Option<&Path>) -> Result<Option<PrometheusHandle>, io::Error> {
    if snapshot.is_none() {
        return Ok(None);
    }
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| io::Error::other(e.to_string()))?;
    Ok(Some(handle))
}

/// Write the Prometheus text exposition of everything recorded so far.
pub fn write_snapshot(handle: &PrometheusHandle, path: &Path) -> io::Result<()> {
    std::fs::write(path, handle.render())?;
    tracing::info!("metrics snapshot written to {}", path.display());
    Ok(())
}

/// Short label for an allocation outcome.
pub fn outcome_label(allocation: &Allocation) -> &'static str {
    match allocation {
        Allocation::Seated(_) => "seated",
        Allocation::Unseated => "unseated",
        Allocation::Invalid(_) => "invalid",
    }
}
