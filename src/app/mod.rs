//! Thin shells around the core: URL handling and report rendering.

pub mod report;
pub mod url;

// Re-export public API
pub use report::{format_significant, render_outcome, render_report};
pub use url::parse_target;
