//! trade-lens: a small dashboard over a trade indicator table.
//!
//! The dataset is loaded once at startup and never written to afterwards.
//! Every page follows the same pattern: read the selected dimensions from a
//! form, filter the table, optionally aggregate by year or decade, render an
//! SVG chart and return HTML.

pub mod chart;
pub mod data;
pub mod http;
