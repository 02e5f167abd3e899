// File: crates/plot-sync/tests/classify.rs
// Purpose: Precedence and equality rules of the update classifier.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use plot_sync::{
    classify, AlignedData, PlotConfig, PlotInputs, ScaleSpec, SeriesSpec, TimeRange,
    UpdateDecision,
};

fn dataset() -> Arc<AlignedData> {
    Arc::new(
        AlignedData::try_new(vec![0.0, 1.0, 2.0], vec![vec![10.0, 11.0, 12.0]])
            .expect("columns aligned"),
    )
}

fn config() -> Arc<PlotConfig> {
    Arc::new(
        PlotConfig::builder()
            .scale(ScaleSpec::time_x())
            .scale(ScaleSpec::linear("y"))
            .series(SeriesSpec::line("value"))
            .build(),
    )
}

fn window(from_s: i64, to_s: i64) -> TimeRange {
    TimeRange::new(
        Utc.timestamp_opt(from_s, 0).unwrap(),
        Utc.timestamp_opt(to_s, 0).unwrap(),
    )
}

fn snapshot(
    width: u32,
    height: u32,
    data: &Arc<AlignedData>,
    config: &Arc<PlotConfig>,
    range: TimeRange,
) -> PlotInputs {
    PlotInputs::new(width, height, Arc::clone(data), Arc::clone(config), range)
}

#[test]
fn dimension_change_wins_over_everything() {
    let prev = snapshot(300, 200, &dataset(), &config(), window(0, 60));
    // Every tracked field differs, yet the dimension check runs first.
    let next = snapshot(400, 200, &dataset(), &config(), window(60, 120));
    assert_eq!(classify(&prev, &next), UpdateDecision::Resize);
}

#[test]
fn height_only_change_resizes() {
    let data = dataset();
    let cfg = config();
    let prev = snapshot(300, 200, &data, &cfg, window(0, 60));
    let next = snapshot(300, 250, &data, &cfg, window(0, 60));
    assert_eq!(classify(&prev, &next), UpdateDecision::Resize);
}

#[test]
fn config_revision_beats_data_change() {
    let data = dataset();
    let prev = snapshot(300, 200, &data, &config(), window(0, 60));
    // Data also differs, but config identity dominates.
    let next = snapshot(300, 200, &dataset(), &config(), window(0, 60));
    assert_eq!(classify(&prev, &next), UpdateDecision::Reinitialize);
}

#[test]
fn content_equal_config_still_reinitializes() {
    let data = dataset();
    // Two builds with identical content get distinct revisions; identity
    // drives the decision, content equality is irrelevant.
    let prev = snapshot(300, 200, &data, &config(), window(0, 60));
    let next = snapshot(300, 200, &data, &config(), window(0, 60));
    assert_eq!(classify(&prev, &next), UpdateDecision::Reinitialize);
}

#[test]
fn data_revision_change_replaces_in_place() {
    let cfg = config();
    let prev = snapshot(300, 200, &dataset(), &cfg, window(0, 60));
    let next = snapshot(300, 200, &dataset(), &cfg, window(0, 60));
    assert_eq!(classify(&prev, &next), UpdateDecision::ReplaceData);
}

#[test]
fn moved_window_rescales() {
    let data = dataset();
    let cfg = config();
    let prev = snapshot(300, 200, &data, &cfg, window(0, 60));
    let next = snapshot(300, 200, &data, &cfg, window(60, 120));
    assert_eq!(classify(&prev, &next), UpdateDecision::RescaleTime);
}

#[test]
fn rebuilt_window_with_equal_bounds_is_noop() {
    let data = dataset();
    let cfg = config();
    let prev = snapshot(300, 200, &data, &cfg, window(0, 60));
    // Fresh TimeRange value, same bounds: the render-tick case.
    let next = snapshot(300, 200, &data, &cfg, window(0, 60));
    assert_eq!(classify(&prev, &next), UpdateDecision::NoOp);
}

#[test]
fn unchanged_inputs_are_noop() {
    let prev = snapshot(300, 200, &dataset(), &config(), window(0, 60));
    let next = prev.clone();
    assert_eq!(classify(&prev, &next), UpdateDecision::NoOp);
}
