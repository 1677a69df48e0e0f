use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::limits::*;

pub const DEFAULT_SEAT_COUNT: usize = 12;
pub const DEFAULT_TABLE_SIZE: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("layout has no seats")]
    NoSeats,
    #[error("table size must be positive")]
    ZeroTableSize,
    #[error("seat count {seat_count} is not a multiple of table size {table_size}")]
    UnevenPartition {
        seat_count: usize,
        table_size: usize,
    },
    #[error("limit exceeded: {0}")]
    LimitExceeded(&'static str),
}

/// Static partition of seats `1..=seat_count` into contiguous tables of
/// `table_size` seats each. The default gives `{1-4}`, `{5-8}`, `{9-12}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub seat_count: usize,
    pub table_size: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seat_count: DEFAULT_SEAT_COUNT,
            table_size: DEFAULT_TABLE_SIZE,
        }
    }
}

impl LayoutConfig {
    pub fn new(seat_count: usize, table_size: usize) -> Result<Self, ConfigError> {
        let config = Self {
            seat_count,
            table_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seat_count == 0 {
            return Err(ConfigError::NoSeats);
        }
        if self.table_size == 0 {
            return Err(ConfigError::ZeroTableSize);
        }
        if self.seat_count > MAX_SEATS {
            return Err(ConfigError::LimitExceeded("too many seats"));
        }
        if self.seat_count % self.table_size != 0 {
            return Err(ConfigError::UnevenPartition {
                seat_count: self.seat_count,
                table_size: self.table_size,
            });
        }
        if self.table_count() > MAX_TABLES {
            return Err(ConfigError::LimitExceeded("too many tables"));
        }
        Ok(())
    }

    pub fn table_count(&self) -> usize {
        self.seat_count / self.table_size
    }
}

/// What to do with a reservation whose party size or duration is not positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InvalidPolicy {
    /// Fail the whole batch before any seat is allocated.
    #[default]
    Reject,
    /// Report the reservation as not seated and carry on.
    Unseated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
