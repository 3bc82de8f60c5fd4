//! emodet-report — HTML rendering of saved quiz session reports.

pub mod html;

pub use html::{generate_html, write_html_report};
