//! relay-core: Core library for the relay plugin loader
//!
//! This crate provides the foundational components for relay:
//!
//! - **Plugin registry** - [`PluginRegistry`] for loading native plugins and
//!   broadcasting named events to them in registration order
//! - **Persisted plugin set** - [`PluginSet`] tracking which plugin paths the
//!   CLI loads between invocations
//! - **Errors** - [`RegistryError`] for load and dispatch failures
//!
//! # Quick Start
//!
//! ```no_run
//! use relay_core::PluginRegistry;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = PluginRegistry::new();
//!
//!     // Load a plugin; it receives "registerPlugin" on success
//!     registry.register("plugins/libecho_plugin.so")?;
//!
//!     // Broadcast an event to every loaded plugin, in order
//!     registry.fire_callback("tick")?;
//!
//!     // Unload; the plugin receives "removePlugin" before its library closes
//!     registry.remove("plugins/libecho_plugin.so");
//!     Ok(())
//! }
//! ```

pub mod plugins;

// Re-export key types for convenience
pub use plugins::{PluginRegistry, PluginSet, RegisterOutcome, RegistryError, RemoveOutcome};
