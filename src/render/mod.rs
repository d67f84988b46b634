//! Markup generation for the documentation website.

mod header;

pub use header::*;
