//! SVG charts for the dashboard and report screens
//!
//! Every chart takes `(label, value)` pairs; the shapes come from the pure
//! helpers in `geometry`.

pub mod bar_chart;
pub mod geometry;
pub mod line_chart;
pub mod pie_chart;

pub use bar_chart::BarChart;
pub use line_chart::LineChart;
pub use pie_chart::PieChart;

/// One labelled value of a chart series
pub type ChartPoint = (String, f64);
