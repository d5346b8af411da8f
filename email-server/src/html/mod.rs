//! HTML helpers for rendered email bodies.

pub mod escape;

pub use escape::escape_html;
