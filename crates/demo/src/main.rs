// File: crates/demo/src/main.rs
// Summary: Demo drives a scripted update sequence through a stdout-tracing plot engine.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Duration, TimeZone, Utc};
use plot_sync::{
    AlignedData, AxisSpec, Color, EngineError, PlotConfig, PlotController, PlotEngine, PlotHandle,
    PlotHook, PlotInputs, PlotOptions, ScaleSpec, SeriesSpec, TimeRange,
};

/// Hook a config author might register to follow the visible window.
struct WindowWatcher;

impl PlotHook for WindowWatcher {
    fn on_time_bounds_changed(&self, min: f64, max: f64) {
        println!("    [hook] window now [{min:.0}, {max:.0}] ms");
    }
}

struct TracePlot {
    hooks: Vec<Arc<dyn PlotHook>>,
}

impl PlotHandle for TracePlot {
    fn set_size(&mut self, width: u32, height: u32) {
        println!("  [plot] resized to {width}x{height}");
        for hook in &self.hooks {
            hook.on_size_changed(width, height);
        }
    }

    fn set_data(&mut self, data: &AlignedData) {
        println!(
            "  [plot] dataset replaced in place: {} points, {} series",
            data.point_count(),
            data.series_count()
        );
        for hook in &self.hooks {
            hook.on_data_changed(data.point_count());
        }
    }

    fn set_time_bounds(&mut self, min: f64, max: f64) {
        println!("  [plot] x scale moved to [{min:.0}, {max:.0}] ms");
        for hook in &self.hooks {
            hook.on_time_bounds_changed(min, max);
        }
    }
}

impl Drop for TracePlot {
    fn drop(&mut self) {
        for hook in &self.hooks {
            hook.on_destroy();
        }
        println!("  [plot] destroyed");
    }
}

struct TraceEngine;

impl PlotEngine for TraceEngine {
    type Surface = String;
    type Handle = TracePlot;

    fn create_plot(
        &mut self,
        surface: &String,
        opts: PlotOptions,
        data: &AlignedData,
    ) -> Result<TracePlot, EngineError> {
        if opts.scales.is_empty() {
            return Err(EngineError::InvalidConfig("no scales defined".to_string()));
        }
        println!(
            "  [plot] built on '{surface}': {}x{}, {} series, {} points",
            opts.width,
            opts.height,
            opts.series.len(),
            data.point_count()
        );
        for hook in &opts.hooks {
            hook.on_init(opts.width, opts.height);
        }
        Ok(TracePlot { hooks: opts.hooks })
    }
}

fn main() -> Result<()> {
    // Accept a t,v CSV path from CLI or fall back to a synthesized waveform.
    let data = match std::env::args().nth(1) {
        Some(path) => load_xy_csv(Path::new(&path))
            .with_context(|| format!("failed to load CSV '{path}'"))?,
        None => synth_wave(512),
    };
    println!(
        "Loaded {} points across {} series",
        data.point_count(),
        data.series_count()
    );
    let data = Arc::new(data);

    let config = Arc::new(
        PlotConfig::builder()
            .scale(ScaleSpec::time_x())
            .scale(ScaleSpec::linear("y"))
            .axis(AxisSpec::bottom("time"))
            .axis(AxisSpec::left("value"))
            .series(SeriesSpec::line("signal").with_color(Color::rgb(64, 160, 255)))
            .hook(Arc::new(WindowWatcher))
            .build(),
    );

    let t0 = Utc.timestamp_opt(1_735_689_600, 0).unwrap(); // 2025-01-01T00:00:00Z
    let window =
        |offset_s: i64| TimeRange::new(t0 + Duration::seconds(offset_s), t0 + Duration::seconds(offset_s + 300));

    let mut controller = PlotController::new(TraceEngine, "main-panel".to_string())
        .on_handle_ready(|_plot| println!("  [host] new handle cached for imperative access"));

    let mut current = PlotInputs::new(800, 400, Arc::clone(&data), Arc::clone(&config), window(0));
    println!("-- initialize");
    controller.initialize(&current)?;

    println!("-- three render ticks, window rebuilt with unchanged bounds (expect silence)");
    for _ in 0..3 {
        let next = PlotInputs { time_range: window(0), ..current.clone() };
        controller.apply_update(&current, &next)?;
        current = next;
    }

    println!("-- window advances by 60s");
    let next = PlotInputs { time_range: window(60), ..current.clone() };
    controller.apply_update(&current, &next)?;
    current = next;

    println!("-- fresh dataset revision arrives");
    let next = PlotInputs { data: Arc::new(synth_wave(640)), ..current.clone() };
    controller.apply_update(&current, &next)?;
    current = next;

    println!("-- container resized");
    let next = PlotInputs { width: 1024, height: 640, ..current.clone() };
    controller.apply_update(&current, &next)?;
    current = next;

    println!("-- visual config rebuilt (same content, new revision)");
    let reconfigured = Arc::new(
        PlotConfig::builder()
            .scale(ScaleSpec::time_x())
            .scale(ScaleSpec::linear("y"))
            .axis(AxisSpec::bottom("time"))
            .axis(AxisSpec::left("value"))
            .series(SeriesSpec::line("signal").with_color(Color::rgb(64, 160, 255)))
            .hook(Arc::new(WindowWatcher))
            .build(),
    );
    let next = PlotInputs { config: reconfigured, ..current.clone() };
    controller.apply_update(&current, &next)?;

    println!("-- dispose");
    controller.dispose();
    Ok(())
}

fn synth_wave(n: usize) -> AlignedData {
    let t0 = 1_735_689_600_000f64; // x column in epoch ms, matching the time scale
    let x: Vec<f64> = (0..n).map(|i| t0 + i as f64 * 1000.0).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64 / 20.0).sin() * 10.0 + 20.0).collect();
    AlignedData::try_new(x, vec![y]).expect("columns generated with equal length")
}

fn load_xy_csv(path: &Path) -> Result<AlignedData> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in reader.records() {
        let record = record?;
        let t: f64 = record.get(0).context("missing t column")?.trim().parse()?;
        let v: f64 = record.get(1).context("missing v column")?.trim().parse()?;
        x.push(t);
        y.push(v);
    }
    AlignedData::try_new(x, vec![y]).map_err(anyhow::Error::msg)
}
