// File: crates/plot-sync/src/lib.rs
// Summary: Library entry point; exports the plot reconciliation API.

pub mod data;
pub mod config;
pub mod inputs;
pub mod engine;
pub mod classify;
pub mod controller;

pub use data::{AlignedData, Revision};
pub use config::{
    AxisPlacement, AxisSpec, Color, PlotConfig, PlotConfigBuilder, PlotHook, PlotOptions,
    ScaleSpec, SeriesSpec, SeriesStyle,
};
pub use inputs::{PlotInputs, TimeRange};
pub use engine::{EngineError, PlotEngine, PlotHandle};
pub use classify::{classify, UpdateDecision};
pub use controller::PlotController;
