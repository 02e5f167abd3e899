// File: crates/plot-sync/src/controller.rs
// Summary: Owner of the live plot handle; executes classified updates against it.

use log::debug;

use crate::classify::{classify, UpdateDecision};
use crate::engine::{EngineError, PlotEngine, PlotHandle};
use crate::inputs::PlotInputs;

type HandleReady<H> = Box<dyn FnMut(&H)>;

/// Sole owner of the plot handle. At most one handle is alive at any time;
/// the old one is always released before a replacement is constructed.
pub struct PlotController<E: PlotEngine> {
    engine: E,
    surface: E::Surface,
    handle: Option<E::Handle>,
    on_handle_ready: Option<HandleReady<E::Handle>>,
}

impl<E: PlotEngine> PlotController<E> {
    pub fn new(engine: E, surface: E::Surface) -> Self {
        Self { engine, surface, handle: None, on_handle_ready: None }
    }

    /// Register a callback invoked synchronously each time a handle is
    /// created, including on every rebuild, so collaborators can cache it
    /// for imperative access (zoom APIs, export).
    pub fn on_handle_ready(mut self, callback: impl FnMut(&E::Handle) + 'static) -> Self {
        self.on_handle_ready = Some(Box::new(callback));
        self
    }

    /// Build a plot for `inputs`, releasing any previous handle first.
    ///
    /// A zero-area surface is a valid hidden state, not an error: no handle
    /// is created and updates are suppressed until a rebuild with nonzero
    /// area. A construction failure propagates and leaves no live handle;
    /// the old one is already gone by then.
    pub fn initialize(&mut self, inputs: &PlotInputs) -> Result<(), EngineError> {
        self.handle = None;

        if inputs.width == 0 && inputs.height == 0 {
            debug!("plot init deferred: zero-area surface");
            return Ok(());
        }

        let opts = inputs.config.materialize(inputs.width, inputs.height);
        debug!(
            "initializing plot {}x{} ({} series, {} points)",
            opts.width,
            opts.height,
            opts.series.len(),
            inputs.data.point_count()
        );
        let handle = self.engine.create_plot(&self.surface, opts, &inputs.data)?;
        if let Some(ready) = self.on_handle_ready.as_mut() {
            ready(&handle);
        }
        self.handle = Some(handle);
        Ok(())
    }

    /// Apply the single cheapest operation for the `prev` -> `next` change.
    ///
    /// Without a live handle, everything short of a rebuild is skipped
    /// silently; the zero-area state tolerates missed updates until a
    /// rebuild happens.
    pub fn apply_update(&mut self, prev: &PlotInputs, next: &PlotInputs) -> Result<(), EngineError> {
        match classify(prev, next) {
            UpdateDecision::Resize => {
                if let Some(plot) = self.handle.as_mut() {
                    plot.set_size(next.width, next.height);
                }
            }
            UpdateDecision::Reinitialize => {
                debug!("reinitializing plot: config revision changed");
                self.initialize(next)?;
            }
            UpdateDecision::ReplaceData => {
                if let Some(plot) = self.handle.as_mut() {
                    plot.set_data(&next.data);
                }
            }
            UpdateDecision::RescaleTime => {
                if let Some(plot) = self.handle.as_mut() {
                    plot.set_time_bounds(
                        next.time_range.from_ms() as f64,
                        next.time_range.to_ms() as f64,
                    );
                }
            }
            UpdateDecision::NoOp => {}
        }
        Ok(())
    }

    /// Release the handle. Safe to call repeatedly or before any initialize.
    pub fn dispose(&mut self) {
        self.handle = None;
    }

    pub fn has_plot(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&E::Handle> {
        self.handle.as_ref()
    }

    pub fn handle_mut(&mut self) -> Option<&mut E::Handle> {
        self.handle.as_mut()
    }
}
