// Hard ceilings on what a single run will accept.

/// Largest seat layout a run will build.
pub const MAX_SEATS: usize = 4096;

/// Largest number of tables in a layout.
pub const MAX_TABLES: usize = 1024;

/// Largest reservation batch processed in one run.
pub const MAX_BATCH_SIZE: usize = 1_000_000;

/// Largest input file read by the loader (64 MiB).
pub const MAX_INPUT_BYTES: u64 = 64 * 1024 * 1024;
