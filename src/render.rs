//! Report rendering: the PNG chart and the HTML document that embeds it.

pub mod chart;
pub mod html;

pub use chart::{render_department_distribution, render_department_png};
pub use html::write_report;
