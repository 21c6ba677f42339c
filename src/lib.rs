//! graphite-builder: describe Graphite charts with nested function calls.
//!
//! A [`ChartBuilder`] session collects query parameters and target
//! expressions, and renders them into a single URL for a Graphite render
//! endpoint (optionally wrapped in an `<img/>` tag).
//!
//! ```
//! use graphite_builder::ChartBuilder;
//!
//! let url = ChartBuilder::open([("base_url", "http://graphite/render")], |chart| {
//!     chart.set("width", 800)?;
//!     let steal = chart.sum_series(["web01.cpu-*.cpu-steal.value"]);
//!     let colored = chart.function("color", steal, "red")?;
//!     chart.target(chart.legend(colored, "Steal"));
//!     Ok(())
//! })?
//! .render()?;
//!
//! assert_eq!(
//!     url,
//!     "http://graphite/render?width=800&target=alias(color(sumSeries(web01.cpu-*.cpu-steal.value),'red'),'Steal')"
//! );
//! # Ok::<(), graphite_builder::GraphiteError>(())
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod interpreter;
pub mod render;
pub mod telemetry;

pub use api::{ChartBuilder, ChartBuilderConfig, InitialParameters};
pub use error::{BuildResult, GraphiteError};
