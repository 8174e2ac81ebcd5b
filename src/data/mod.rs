/// Data layer: core types, payload ingestion, and time-window filtering.
///
/// Architecture:
/// ```text
///  <metadata>,<base64> payload
///        │
///        ▼
///   ┌──────────┐
///   │  ingest   │  decode + validate → ShockTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ ShockTable  │  Time, Pos_1..4, Vel_1..4 columns
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  select [start, end] time window
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod ingest;
pub mod model;
