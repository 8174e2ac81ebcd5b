use serde::Serialize;

// ---------------------------------------------------------------------------
// Sampling constants
// ---------------------------------------------------------------------------

/// Fixed sampling interval of the data logger (1 kHz), in seconds.
pub const DT_SECONDS: f64 = 0.001;

/// Number of shock-position channels the logger records.
pub const DEFAULT_CHANNELS: usize = 4;

// ---------------------------------------------------------------------------
// ChannelSeries – one shock sensor's columns
// ---------------------------------------------------------------------------

/// Position and derived velocity columns of one shock sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSeries {
    /// 1-based channel index.
    pub channel: usize,
    /// Measured position, one value per sample.
    pub positions: Vec<f64>,
    /// Finite-difference velocity, one value per sample. The first sample
    /// has no predecessor, so `velocities[0]` is `None` – a missing value,
    /// not a measured zero.
    pub velocities: Vec<Option<f64>>,
}

impl ChannelSeries {
    /// Label of the position column ("Pos_1".."Pos_k").
    pub fn position_label(&self) -> String {
        format!("Pos_{}", self.channel)
    }

    /// Label of the velocity column ("Vel_1".."Vel_k").
    pub fn velocity_label(&self) -> String {
        format!("Vel_{}", self.channel)
    }
}

// ---------------------------------------------------------------------------
// VelocityPoint – one row of the melted velocity view
// ---------------------------------------------------------------------------

/// One `(time, channel, velocity)` triple of the long-form velocity view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityPoint {
    /// Sample time in seconds.
    pub time: f64,
    /// Velocity column label, e.g. "Vel_2".
    pub channel: String,
    /// Velocity in position units per second.
    pub velocity: f64,
}

// ---------------------------------------------------------------------------
// ShockTable – the complete decoded log
// ---------------------------------------------------------------------------

/// A decoded log: the synthesized time axis plus one [`ChannelSeries`] per
/// position channel. Built once per upload, never mutated afterwards.
///
/// Invariant: `time` and every channel's `positions` / `velocities` share
/// one length, and `time[n] == n × dt` (strictly increasing).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShockTable {
    time: Vec<f64>,
    channels: Vec<ChannelSeries>,
}

impl ShockTable {
    /// Build a table from rectangular rows of position readings.
    ///
    /// Synthesizes `Time[n] = n × dt` and derives
    /// `Vel_i[n] = (Pos_i[n] − Pos_i[n−1]) / dt` for `n ≥ 1`. The ingest
    /// layer has already validated that `rows` is rectangular with one
    /// reading per channel.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let channel_count = rows.first().map_or(0, Vec::len);
        let time: Vec<f64> = (0..rows.len()).map(|n| n as f64 * DT_SECONDS).collect();

        let channels = (0..channel_count)
            .map(|c| {
                let positions: Vec<f64> = rows.iter().map(|row| row[c]).collect();
                let velocities = derive_velocities(&positions);
                ChannelSeries {
                    channel: c + 1,
                    positions,
                    velocities,
                }
            })
            .collect();

        ShockTable { time, channels }
    }

    /// Assemble a table from already-derived columns (window filtering).
    pub(crate) fn from_columns(time: Vec<f64>, channels: Vec<ChannelSeries>) -> Self {
        ShockTable { time, channels }
    }

    /// Number of samples (rows).
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Synthesized time axis in seconds.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Per-channel series in channel order.
    pub fn channels(&self) -> &[ChannelSeries] {
        &self.channels
    }

    /// Column labels in table order: Time, positions, then velocities.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = vec!["Time".to_string()];
        names.extend(self.channels.iter().map(ChannelSeries::position_label));
        names.extend(self.channels.iter().map(ChannelSeries::velocity_label));
        names
    }

    /// Melt the velocity columns into `(time, channel, velocity)` triples
    /// for the overlaid per-channel histograms. Samples with no velocity
    /// (the first row of each channel) are omitted rather than coerced
    /// to zero.
    pub fn velocity_long_form(&self) -> Vec<VelocityPoint> {
        self.channels
            .iter()
            .flat_map(|ch| {
                let label = ch.velocity_label();
                self.time
                    .iter()
                    .zip(&ch.velocities)
                    .filter_map(move |(&t, v)| {
                        v.map(|velocity| VelocityPoint {
                            time: t,
                            channel: label.clone(),
                            velocity,
                        })
                    })
            })
            .collect()
    }
}

fn derive_velocities(positions: &[f64]) -> Vec<Option<f64>> {
    positions
        .iter()
        .enumerate()
        .map(|(n, &pos)| {
            if n == 0 {
                None
            } else {
                Some((pos - positions[n - 1]) / DT_SECONDS)
            }
        })
        .collect()
}
