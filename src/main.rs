use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use seatplan::config::{InvalidPolicy, LayoutConfig, OutputFormat};
use seatplan::engine::Engine;
use seatplan::layout::SeatLayout;
use seatplan::{input, observability, report};

/// Seat a batch of dining reservations onto contiguous seats of one table.
#[derive(Parser, Debug)]
#[command(name = "seatplan", version)]
struct Cli {
    /// JSON file holding an array of reservation records.
    #[arg(env = "SEATPLAN_INPUT")]
    input: PathBuf,

    /// Total number of seats, split into equal tables of `--table-size`.
    #[arg(
        long,
        env = "SEATPLAN_SEAT_COUNT",
        default_value_t = seatplan::config::DEFAULT_SEAT_COUNT
    )]
    seat_count: usize,

    /// Seats per table.
    #[arg(
        long,
        env = "SEATPLAN_TABLE_SIZE",
        default_value_t = seatplan::config::DEFAULT_TABLE_SIZE
    )]
    table_size: usize,

    /// What to do with a reservation whose party size or duration is not positive.
    #[arg(long, env = "SEATPLAN_ON_INVALID", value_enum, default_value_t)]
    on_invalid: InvalidPolicy,

    #[arg(long, env = "SEATPLAN_FORMAT", value_enum, default_value_t)]
    format: OutputFormat,

    /// Write a Prometheus text snapshot of run metrics here after the batch.
    #[arg(long, env = "SEATPLAN_METRICS_FILE")]
    metrics_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    observability::init_tracing();
    let metrics = observability::init(cli.metrics_file.as_deref())?;

    let layout_config = LayoutConfig::new(cli.seat_count, cli.table_size)?;
    let layout = SeatLayout::new(&layout_config)?;
    info!("seatplan starting");
    info!("  input: {}", cli.input.display());
    info!(
        "  seats: {} across {} tables of {}",
        layout.seat_count(),
        layout.table_count(),
        layout_config.table_size
    );
    info!("  on_invalid: {:?}", cli.on_invalid);

    // Any read or parse failure aborts before a single seat is allocated.
    let reservations = input::load_reservations(&cli.input)?;

    let mut engine = Engine::new(layout).with_invalid_policy(cli.on_invalid);
    let result = engine.run_batch(reservations)?;

    let rendered = match cli.format {
        OutputFormat::Text => report::render_text(&result),
        OutputFormat::Json => report::render_json(&result)? + "\n",
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    if let (Some(handle), Some(path)) = (metrics.as_ref(), cli.metrics_file.as_deref()) {
        observability::write_snapshot(handle, path)?;
    }

    info!("seatplan finished: {}/{} seated", result.seated_count(), result.len());
    Ok(())
}
