//! Site branding and notation plugin descriptors for the open music scanner.
//!
//! Two independent concerns live here:
//!
//! - [`render`]: the documentation website's header block (navigation tabs,
//!   logo, download button) as pure markup-building functions.
//! - [`plugins`]: immutable descriptors for external notation programs and a
//!   registry that discovers them from descriptor files on disk.
//!
//! The [`models`] module holds the shared data model: the fixed navigation
//! table and the per-render context.

pub mod models;
pub mod plugins;
pub mod render;
