use std::fmt::Write;

use serde::Serialize;

use crate::model::*;

/// One JSON output row.
#[derive(Debug, Serialize)]
struct ReportRow {
    #[serde(rename = "requestID")]
    id: ReservationId,
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seats: Option<Vec<SeatId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&Outcome> for ReportRow {
    fn from(outcome: &Outcome) -> Self {
        let block = outcome.block();
        let error = match outcome.allocation {
            Allocation::Invalid(reason) => Some(reason.to_string()),
            _ => None,
        };
        Self {
            id: outcome.id,
            available: outcome.is_seated(),
            table: block.map(|b| b.table.to_string()),
            seats: block.map(|b| b.seats().collect()),
            error,
        }
    }
}

/// `ReservationId:<id> - Available:<bool>` per line, in processing order.
pub fn render_text(result: &AllocationResult) -> String {
    let mut out = String::new();
    for outcome in result.iter() {
        // writing to a String cannot fail
        let _ = writeln!(
            out,
            "ReservationId:{} - Available:{}",
            outcome.id,
            outcome.is_seated()
        );
    }
    out
}

/// Pretty JSON array of `{requestID, available, table?, seats?, error?}`.
pub fn render_json(result: &AllocationResult) -> serde_json::Result<String> {
    let rows: Vec<ReportRow> = result.iter().map(ReportRow::from).collect();
    serde_json::to_string_pretty(&rows)
}
