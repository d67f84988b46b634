//! Data model for the site header and the plugin descriptors.
//!
//! # Core Concepts
//!
//! - [`NavEntry`]: one navigation tab — visible label, target URL, and a flag
//!   saying whether the URL is resolved against the page's root prefix. The
//!   label doubles as the page-identity key for active-tab matching.
//! - [`NAV_ENTRIES`]: the fixed, ordered navigation table. Order and values
//!   are part of the rendered markup's external contract.
//! - [`RenderContext`]: per-render parameters supplied by the caller — the
//!   root prefix for relative links and the label of the current page.
//!
//! Everything here is immutable after construction; nothing persists past a
//! single render.

mod context;
mod nav;

pub use context::*;
pub use nav::*;
