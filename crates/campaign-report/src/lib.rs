//! campaign-report: the DK white sneaker campaign review as a static HTML report.
//!
//! The crate resolves report images through an ordered fallback of candidate
//! locations, assembles the fixed brand-interest trend dataset, tracks which
//! report section is selected, and renders the narrative with Maud templates
//! and a Plotly trend chart.
//!
//! Rendering never fails on a missing image: the resolver reports absence as
//! a value and the renderer prints a visible warning in its place.
pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod report;
pub mod trend;
