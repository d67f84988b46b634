//! External notation program descriptors.
//!
//! # Core Concepts
//!
//! - [`PluginDescriptor`]: an immutable record describing one external
//!   notation program — executable path, menu title, tooltip. Descriptors
//!   live as JSON files edited by the deployer; the executable path is
//!   environment-specific by nature.
//! - [`NotationPlugin`]: the one-method seam hosts program against. A host
//!   asks a plugin for the argument vector to run on an exported score file;
//!   it never sees how that vector was built.
//! - [`PluginRegistry`]: discovers descriptors from a directory. Loading is
//!   fail-soft: an unreadable or malformed descriptor file is logged and
//!   skipped, never fatal.
//!
//! Spawning the external process is the host's job, not ours. The registry
//! only hands out argument vectors; it performs no existence check on the
//! executable path.

mod registry;
mod types;

pub use registry::*;
pub use types::*;
