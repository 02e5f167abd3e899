// File: crates/plot-sync/src/engine.rs
// Summary: Trait seam to the external charting engine and its failure modes.

use thiserror::Error;

use crate::config::PlotOptions;
use crate::data::AlignedData;

/// Construction failures surfaced by a plot engine. The controller never
/// catches these; recovery is a later initialize.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("plot configuration rejected: {0}")]
    InvalidConfig(String),
    #[error("dataset rejected: {0}")]
    InvalidData(String),
    #[error("render surface unavailable: {0}")]
    Surface(String),
}

/// A live plot instance. Dropping the handle releases the underlying plot.
pub trait PlotHandle {
    /// Resize the plot without touching data or configuration.
    fn set_size(&mut self, width: u32, height: u32);

    /// Swap the dataset in place, preserving scales, zoom, and selection.
    fn set_data(&mut self, data: &AlignedData);

    /// Move the x-scale bounds, in epoch milliseconds.
    fn set_time_bounds(&mut self, min: f64, max: f64);
}

/// Factory seam wrapping the external charting library.
pub trait PlotEngine {
    /// Stable mountable surface the plot binds to. Provided by the host;
    /// its lifecycle is not managed here.
    type Surface;

    type Handle: PlotHandle;

    fn create_plot(
        &mut self,
        surface: &Self::Surface,
        opts: PlotOptions,
        data: &AlignedData,
    ) -> Result<Self::Handle, EngineError>;
}
