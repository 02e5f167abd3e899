// File: crates/plot-sync/src/classify.rs
// Summary: Pure classifier mapping an input snapshot pair to one update decision.

use crate::inputs::PlotInputs;

/// The single cheapest correct operation for one change event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateDecision {
    Resize,
    Reinitialize,
    ReplaceData,
    RescaleTime,
    NoOp,
}

pub fn same_dims(prev: &PlotInputs, next: &PlotInputs) -> bool {
    next.width == prev.width && next.height == prev.height
}

/// Config is compared by identity only, never deep-compared. Callers supply
/// a new revision only when semantics actually changed.
pub fn same_config(prev: &PlotInputs, next: &PlotInputs) -> bool {
    next.config.revision() == prev.config.revision()
}

/// Same identity-only policy as the config.
pub fn same_data(prev: &PlotInputs, next: &PlotInputs) -> bool {
    next.data.revision() == prev.data.revision()
}

/// The one field compared by value: hosts rebuild the window with equal
/// bounds on every render tick, and only a bounds change counts.
pub fn same_time_range(prev: &PlotInputs, next: &PlotInputs) -> bool {
    next.time_range.same_bounds(&prev.time_range)
}

/// Fixed precedence, first match wins; structural changes dominate
/// finer-grained ones. One decision per event: a caller that batches several
/// independent changes into one notification gets only the highest-precedence
/// action and picks up the rest on the next notification.
pub fn classify(prev: &PlotInputs, next: &PlotInputs) -> UpdateDecision {
    if !same_dims(prev, next) {
        UpdateDecision::Resize
    } else if !same_config(prev, next) {
        UpdateDecision::Reinitialize
    } else if !same_data(prev, next) {
        UpdateDecision::ReplaceData
    } else if !same_time_range(prev, next) {
        UpdateDecision::RescaleTime
    } else {
        UpdateDecision::NoOp
    }
}
