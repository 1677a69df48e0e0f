use std::ops::RangeInclusive;

use crate::config::{ConfigError, LayoutConfig};
use crate::model::{SeatId, TableId};

/// Immutable seat → table mapping, built once from a [`LayoutConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLayout {
    /// `seat_to_table[seat - 1]` is the table of `seat`.
    seat_to_table: Vec<TableId>,
    /// Seat range of each table, in table order.
    tables: Vec<RangeInclusive<SeatId>>,
}

impl Default for SeatLayout {
    fn default() -> Self {
        Self::build(&LayoutConfig::default())
    }
}

impl SeatLayout {
    pub fn new(config: &LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Expects a validated config: `table_size` divides `seat_count`.
    fn build(config: &LayoutConfig) -> Self {
        let size = config.table_size;
        let seat_to_table = (0..config.seat_count).map(|idx| TableId(idx / size)).collect();
        let tables = (0..config.table_count())
            .map(|t| t * size + 1..=(t + 1) * size)
            .collect();
        Self {
            seat_to_table,
            tables,
        }
    }

    /// Table of `seat`, or `None` outside `1..=seat_count`.
    pub fn table_of(&self, seat: SeatId) -> Option<TableId> {
        seat.checked_sub(1)
            .and_then(|idx| self.seat_to_table.get(idx))
            .copied()
    }

    pub fn seat_count(&self) -> usize {
        self.seat_to_table.len()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn seats(&self) -> RangeInclusive<SeatId> {
        1..=self.seat_count()
    }

    pub fn table_seats(&self, table: TableId) -> Option<RangeInclusive<SeatId>> {
        self.tables.get(table.0).cloned()
    }

    /// Seats at the largest table; no party above this can be seated.
    pub fn max_table_capacity(&self) -> usize {
        self.tables.iter().map(|r| r.clone().count()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_partition() {
        let layout = SeatLayout::default();
        assert_eq!(layout.seat_count(), 12);
        assert_eq!(layout.table_count(), 3);
        for seat in 1..=4 {
            assert_eq!(layout.table_of(seat), Some(TableId(0)));
        }
        for seat in 5..=8 {
            assert_eq!(layout.table_of(seat), Some(TableId(1)));
        }
        for seat in 9..=12 {
            assert_eq!(layout.table_of(seat), Some(TableId(2)));
        }
    }

    #[test]
    fn out_of_range_seats() {
        let layout = SeatLayout::default();
        assert_eq!(layout.table_of(0), None);
        assert_eq!(layout.table_of(13), None);
    }

    #[test]
    fn larger_uniform_layout() {
        let config = LayoutConfig::new(240, 6).unwrap();
        let layout = SeatLayout::new(&config).unwrap();
        assert_eq!(layout.seat_count(), 240);
        assert_eq!(layout.table_count(), 40);
        assert_eq!(layout.table_seats(TableId(0)), Some(1..=6));
        assert_eq!(layout.table_seats(TableId(39)), Some(235..=240));
        assert_eq!(layout.table_seats(TableId(40)), None);
        assert_eq!(layout.table_of(6), Some(TableId(0)));
        assert_eq!(layout.table_of(7), Some(TableId(1)));
        assert_eq!(layout.table_of(240), Some(TableId(39)));
        assert_eq!(layout.max_table_capacity(), 6);
    }

    #[test]
    fn table_ranges_match_lookup() {
        let layout = SeatLayout::default();
        for t in 0..layout.table_count() {
            let seats = layout.table_seats(TableId(t)).unwrap();
            assert_eq!(seats.clone().count(), 4);
            for seat in seats {
                assert_eq!(layout.table_of(seat), Some(TableId(t)));
            }
        }
    }

    #[test]
    fn new_validates_config() {
        let uneven = LayoutConfig {
            seat_count: 10,
            table_size: 4,
        };
        assert_eq!(
            SeatLayout::new(&uneven),
            Err(ConfigError::UnevenPartition {
                seat_count: 10,
                table_size: 4
            })
        );
        let empty_tables = LayoutConfig {
            seat_count: 12,
            table_size: 0,
        };
        assert_eq!(
            SeatLayout::new(&empty_tables),
            Err(ConfigError::ZeroTableSize)
        );
    }
}
