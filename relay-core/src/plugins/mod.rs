//! Plugin system for relay
//!
//! This module provides the infrastructure for loading and managing plugins:
//!
//! - [`PluginRegistry`]: loads plugin libraries and dispatches events to them
//! - [`PluginSet`]: the persisted list of plugin paths the CLI loads
//! - [`RegistryError`]: error types for plugin operations
//!
//! # Plugin Contract
//!
//! A plugin is a native dynamic library exporting one symbol,
//! `registerCallback`, which takes a null-terminated event name and returns
//! nothing. Relay invokes it with `"registerPlugin"` after a successful
//! load, `"removePlugin"` just before the library is closed, and with any
//! event broadcast through [`PluginRegistry::fire_callback`].
//!
//! Plugins are trusted native code: a plugin that crashes or corrupts
//! memory takes the host process with it, and a plugin that never returns
//! from its callback blocks dispatch. Neither can be contained here.
//!
//! # Example
//!
//! ```ignore
//! use relay_core::plugins::PluginRegistry;
//!
//! let mut registry = PluginRegistry::new();
//!
//! match registry.register("plugins/libstats.so")? {
//!     RegisterOutcome::Loaded => {}
//!     RegisterOutcome::AlreadyLoaded => {}
//!     RegisterOutcome::Missing => eprintln!("no such plugin on disk"),
//! }
//!
//! registry.fire_callback("session-started")?;
//! registry.remove("plugins/libstats.so");
//! ```

mod error;
mod native;
mod registry;
mod set;

pub use error::RegistryError;
pub use registry::{PluginRegistry, RegisterOutcome, RemoveOutcome};
pub use set::PluginSet;
