//! Decode and derive metrics from Baja shock-absorber telemetry logs.
//!
//! A log is four shock-position channels sampled at 1 kHz, uploaded as a
//! `<metadata>,<base64>` payload. [`parse_payload`] turns one upload into a
//! [`ShockTable`] carrying the synthesized time axis, the position channels,
//! and finite-difference velocities; the charting layer consumes the table
//! through its serializable views.

pub mod data;
pub mod selftest;

pub use data::error::ParseError;
pub use data::filter::window;
pub use data::ingest::{parse_payload, parse_payload_with};
pub use data::model::{ChannelSeries, ShockTable, VelocityPoint, DEFAULT_CHANNELS, DT_SECONDS};
