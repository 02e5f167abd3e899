// File: crates/plot-sync/src/config.rs
// Summary: Visual configuration handle, builder, and the materialized plot options.

use std::sync::Arc;

use crate::data::Revision;

/// Plain RGBA color; no renderer types at this layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Bars,
    Points,
}

/// Styling for one value column, matched to the dataset by position.
#[derive(Clone, Debug)]
pub struct SeriesSpec {
    pub label: String,
    pub style: SeriesStyle,
    pub color: Color,
    pub stroke_width: f32,
    pub scale_key: String,
}

impl SeriesSpec {
    pub fn line(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: SeriesStyle::Line,
            color: Color::rgb(64, 160, 255),
            stroke_width: 2.0,
            scale_key: "y".to_string(),
        }
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn on_scale(mut self, key: impl Into<String>) -> Self {
        self.scale_key = key.into();
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisPlacement {
    Bottom,
    Left,
    Right,
    Top,
}

#[derive(Clone, Debug)]
pub struct AxisSpec {
    pub label: String,
    pub placement: AxisPlacement,
    pub scale_key: String,
}

impl AxisSpec {
    pub fn bottom(label: impl Into<String>) -> Self {
        Self { label: label.into(), placement: AxisPlacement::Bottom, scale_key: "x".to_string() }
    }

    pub fn left(label: impl Into<String>) -> Self {
        Self { label: label.into(), placement: AxisPlacement::Left, scale_key: "y".to_string() }
    }
}

/// Scale descriptor. The time scale on x is what `set_time_bounds` moves.
#[derive(Clone, Debug)]
pub struct ScaleSpec {
    pub key: String,
    pub time: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ScaleSpec {
    pub fn time_x() -> Self {
        Self { key: "x".to_string(), time: true, min: None, max: None }
    }

    pub fn linear(key: impl Into<String>) -> Self {
        Self { key: key.into(), time: false, min: None, max: None }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Lifecycle callbacks carried inside the configuration. Engines fire these;
/// the reconciliation core passes them through verbatim and never calls or
/// registers any itself.
pub trait PlotHook {
    fn on_init(&self, _width: u32, _height: u32) {}
    fn on_size_changed(&self, _width: u32, _height: u32) {}
    fn on_data_changed(&self, _points: usize) {}
    fn on_time_bounds_changed(&self, _min: f64, _max: f64) {}
    fn on_destroy(&self) {}
}

/// Identity-compared descriptor of series, axes, and scales.
/// Callers build a new config (new revision) only when semantics actually
/// changed; the reconciler never looks inside.
pub struct PlotConfig {
    revision: Revision,
    series: Vec<SeriesSpec>,
    axes: Vec<AxisSpec>,
    scales: Vec<ScaleSpec>,
    hooks: Vec<Arc<dyn PlotHook>>,
}

impl PlotConfig {
    pub fn builder() -> PlotConfigBuilder {
        PlotConfigBuilder::default()
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn series(&self) -> &[SeriesSpec] {
        &self.series
    }

    pub fn axes(&self) -> &[AxisSpec] {
        &self.axes
    }

    pub fn scales(&self) -> &[ScaleSpec] {
        &self.scales
    }

    pub fn hooks(&self) -> &[Arc<dyn PlotHook>] {
        &self.hooks
    }

    /// Merge `{width, height}` with the structural description.
    /// The result is consumed verbatim by handle construction; contents are
    /// not validated or interpreted here.
    pub fn materialize(&self, width: u32, height: u32) -> PlotOptions {
        PlotOptions {
            width,
            height,
            series: self.series.clone(),
            axes: self.axes.clone(),
            scales: self.scales.clone(),
            hooks: self.hooks.clone(),
        }
    }
}

#[derive(Default)]
pub struct PlotConfigBuilder {
    series: Vec<SeriesSpec>,
    axes: Vec<AxisSpec>,
    scales: Vec<ScaleSpec>,
    hooks: Vec<Arc<dyn PlotHook>>,
}

impl PlotConfigBuilder {
    pub fn series(mut self, spec: SeriesSpec) -> Self {
        self.series.push(spec);
        self
    }

    pub fn axis(mut self, spec: AxisSpec) -> Self {
        self.axes.push(spec);
        self
    }

    pub fn scale(mut self, spec: ScaleSpec) -> Self {
        self.scales.push(spec);
        self
    }

    pub fn hook(mut self, hook: Arc<dyn PlotHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Finish the config and assign its identity token.
    pub fn build(self) -> PlotConfig {
        PlotConfig {
            revision: Revision::next(),
            series: self.series,
            axes: self.axes,
            scales: self.scales,
            hooks: self.hooks,
        }
    }
}

/// Structural description handed to the engine when a plot is built.
#[derive(Clone)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub series: Vec<SeriesSpec>,
    pub axes: Vec<AxisSpec>,
    pub scales: Vec<ScaleSpec>,
    pub hooks: Vec<Arc<dyn PlotHook>>,
}
