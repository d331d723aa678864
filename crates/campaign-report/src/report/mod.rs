//! HTML report generation.
//!
//! `report` holds the document builder, `plots` turns the trend dataset into
//! a Plotly chart, `render` walks the narrative content for a given layout
//! and section selection, and `theme` carries the stylesheet.
pub mod plots;
pub mod render;
pub mod report;
pub mod theme;

pub use render::{render_report, render_site, RenderContext};
pub use report::{Report, ReportSection};
