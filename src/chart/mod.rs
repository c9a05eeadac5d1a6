/// Chart layer: colour assignment and server-side SVG rendering.
///
/// Charts are rendered to an SVG string and embedded straight into the
/// returned HTML page; nothing is written to disk.

pub mod color;
pub mod render;

pub use render::{bar_chart, line_chart, ChartError, Series};
