use super::model::{ChannelSeries, ShockTable};

// ---------------------------------------------------------------------------
// Time-window selection
// ---------------------------------------------------------------------------

/// Select the contiguous rows with `start <= time <= end` into a fresh table.
///
/// Bounds that exclude every row – including inverted bounds – yield an
/// empty table, never an error; the plotting layer renders that as an empty
/// chart. Velocities are carried over unchanged, so the first row of a
/// window keeps the velocity derived from its predecessor in the full log.
pub fn window(table: &ShockTable, start: f64, end: f64) -> ShockTable {
    let time = table.time();
    let lo = time.partition_point(|&t| t < start);
    let hi = time.partition_point(|&t| t <= end).max(lo);

    let channels = table
        .channels()
        .iter()
        .map(|ch| ChannelSeries {
            channel: ch.channel,
            positions: ch.positions[lo..hi].to_vec(),
            velocities: ch.velocities[lo..hi].to_vec(),
        })
        .collect();

    ShockTable::from_columns(time[lo..hi].to_vec(), channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(n: usize) -> ShockTable {
        let rows: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64; 4]).collect();
        ShockTable::from_rows(&rows)
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        let table = table_of(10);
        let windowed = window(&table, 0.002, 0.005);
        assert_eq!(windowed.time(), &[0.002, 0.003, 0.004, 0.005]);
        assert_eq!(windowed.channels()[0].positions, vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn full_range_is_a_copy() {
        let table = table_of(5);
        let windowed = window(&table, 0.0, 1.0);
        assert_eq!(windowed, table);
    }

    #[test]
    fn out_of_range_bounds_yield_an_empty_table() {
        let table = table_of(5);
        let windowed = window(&table, 500.0, 600.0);
        assert!(windowed.is_empty());
        assert_eq!(windowed.channels().len(), 4);
        assert!(windowed.velocity_long_form().is_empty());
    }

    #[test]
    fn inverted_bounds_yield_an_empty_table() {
        let table = table_of(5);
        assert!(window(&table, 0.004, 0.001).is_empty());
    }

    #[test]
    fn window_keeps_velocity_derived_from_the_full_log() {
        let table = table_of(5);
        let windowed = window(&table, 0.002, 0.003);
        // Row 2's velocity comes from rows 1→2 of the unfiltered log.
        assert_eq!(windowed.channels()[0].velocities[0], Some(1000.0));
    }

    #[test]
    fn column_names_survive_windowing() {
        let table = table_of(3);
        let windowed = window(&table, 0.0, 0.001);
        assert_eq!(windowed.column_names(), table.column_names());
    }
}
