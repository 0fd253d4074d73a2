//! Plugin registry error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the plugin registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The dynamic library could not be opened (corrupt file, wrong
    /// architecture, unmet link-time dependencies, permissions)
    #[error("Failed to load plugin library {path}: {source}")]
    LibraryLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The library opened but does not export the mandatory
    /// `registerCallback` entry point
    #[error("Plugin {path} has no usable entry point: {source}")]
    EntryPoint {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// Event names cross a C boundary and cannot contain NUL bytes
    #[error("Event name contains an interior NUL byte: {name:?}")]
    InvalidEventName { name: String },

    /// Plugin set error (parsing, saving, etc.)
    #[error("Plugin set error: {0}")]
    PluginSet(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
