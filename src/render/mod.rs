//! Dashboard rendering (static HTML).

mod html;

pub use html::{escape_html, render_dashboard};
