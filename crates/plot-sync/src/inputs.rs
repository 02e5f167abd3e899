// File: crates/plot-sync/src/inputs.rs
// Summary: Input snapshot and the value-compared visible time window.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::PlotConfig;
use crate::data::AlignedData;

/// Visible window on the x (time) scale.
#[derive(Clone, Copy, Debug)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Lower bound in epoch milliseconds.
    pub fn from_ms(&self) -> i64 {
        self.from.timestamp_millis()
    }

    /// Upper bound in epoch milliseconds.
    pub fn to_ms(&self) -> i64 {
        self.to.timestamp_millis()
    }

    /// Bounds equality by value. Hosts rebuild the window on every render
    /// tick, so equality must not depend on which allocation carried it.
    pub fn same_bounds(&self, other: &TimeRange) -> bool {
        self.from_ms() == other.from_ms() && self.to_ms() == other.to_ms()
    }
}

/// Immutable snapshot of everything the reconciler tracks.
/// All payloads are externally owned; this layer only compares and passes
/// them through.
#[derive(Clone)]
pub struct PlotInputs {
    pub width: u32,
    pub height: u32,
    pub data: Arc<AlignedData>,
    pub config: Arc<PlotConfig>,
    pub time_range: TimeRange,
}

impl PlotInputs {
    pub fn new(
        width: u32,
        height: u32,
        data: Arc<AlignedData>,
        config: Arc<PlotConfig>,
        time_range: TimeRange,
    ) -> Self {
        Self { width, height, data, config, time_range }
    }
}
