//! Plugin registry - loads plugins and dispatches events in registration order

use std::ffi::{CStr, CString};
use std::path::{Path, PathBuf};

use super::error::RegistryError;
use super::native::NativeEntry;

const REGISTER_EVENT: &CStr = c"registerPlugin";
const REMOVE_EVENT: &CStr = c"removePlugin";

/// A loaded plugin: its identifying path and its open library
struct PluginHandle {
    /// Caller-supplied path, the plugin's identity. Compared literally;
    /// two spellings of the same file are two distinct plugins.
    path: PathBuf,
    /// Open library with its resolved entry point
    entry: NativeEntry,
}

impl Drop for PluginHandle {
    fn drop(&mut self) {
        // Notify before the library handle is closed. After this call
        // returns the entry point is never invoked again.
        self.entry.invoke(REMOVE_EVENT);
        tracing::debug!(plugin = %self.path.display(), "Plugin library closed");
    }
}

/// Result of a [`PluginRegistry::register`] call that did not hard-fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The library was opened, its entry point resolved, and the plugin
    /// notified with `"registerPlugin"`
    Loaded,
    /// An entry with this path already exists; registration is idempotent
    AlreadyLoaded,
    /// Nothing exists at this path on disk; best-effort no-op
    Missing,
}

/// Result of a [`PluginRegistry::remove`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The plugin was notified with `"removePlugin"` and its library closed
    Removed,
    /// No entry with this path; no-op
    NotLoaded,
}

/// The plugin registry: the set of currently loaded plugins and their
/// callable entry points.
///
/// Guarantees at most one loaded instance per path and synchronous,
/// registration-ordered event broadcast. All operations run to completion
/// on the calling thread; the registry carries no internal synchronization,
/// so concurrent callers must serialize access externally (the `&mut self`
/// receivers enforce a single writer within safe code).
pub struct PluginRegistry {
    /// Loaded plugins in registration order, unique by path
    entries: Vec<PluginHandle>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Load the plugin at `path` and notify it with `"registerPlugin"`.
    ///
    /// Registration is idempotent per path, and a path with no filesystem
    /// entity behind it is skipped rather than treated as an error; both
    /// soft conditions are reported through [`RegisterOutcome`] so callers
    /// can still distinguish them. Failing to open the library or to
    /// resolve its entry point is a hard error.
    pub fn register(&mut self, path: impl AsRef<Path>) -> Result<RegisterOutcome, RegistryError> {
        let path = path.as_ref();

        if self.contains(path) {
            tracing::debug!(plugin = %path.display(), "Plugin already registered, skipping");
            return Ok(RegisterOutcome::AlreadyLoaded);
        }

        if !path.exists() {
            tracing::debug!(plugin = %path.display(), "Plugin path does not exist, skipping");
            return Ok(RegisterOutcome::Missing);
        }

        let entry = NativeEntry::open(path)?;
        entry.invoke(REGISTER_EVENT);

        self.entries.push(PluginHandle {
            path: path.to_path_buf(),
            entry,
        });
        tracing::info!(plugin = %path.display(), "Plugin loaded");

        Ok(RegisterOutcome::Loaded)
    }

    /// Unload the plugin at `path`, if loaded.
    ///
    /// The plugin is notified with `"removePlugin"`, then its library is
    /// closed, exactly once. Remaining entries keep their relative order.
    /// Removing a path with no entry is a no-op.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> RemoveOutcome {
        let path = path.as_ref();

        let Some(index) = self.entries.iter().position(|e| e.path == path) else {
            tracing::debug!(plugin = %path.display(), "Plugin not registered, nothing to remove");
            return RemoveOutcome::NotLoaded;
        };

        // Dropping the handle notifies the plugin and closes its library.
        drop(self.entries.remove(index));
        tracing::info!(plugin = %path.display(), "Plugin removed");

        RemoveOutcome::Removed
    }

    /// Broadcast `name` to every loaded plugin, in registration order.
    ///
    /// Fully synchronous and blocking: the next plugin is not invoked until
    /// the previous one returns, and nothing is consumed from the plugins.
    /// A plugin that blocks indefinitely blocks the whole broadcast;
    /// plugins are contracted to do minimal synchronous work and hand
    /// heavier work to their own background mechanism.
    pub fn fire_callback(&self, name: &str) -> Result<(), RegistryError> {
        let event = CString::new(name).map_err(|_| RegistryError::InvalidEventName {
            name: name.to_string(),
        })?;

        for handle in &self.entries {
            tracing::trace!(plugin = %handle.path.display(), event = name, "Dispatching event");
            handle.entry.invoke(&event);
        }

        Ok(())
    }

    /// Paths of all loaded plugins, in registration order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.path.as_path())
    }

    /// Whether a plugin with this exact path is loaded
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.entries.iter().any(|e| e.path == path)
    }

    /// Number of loaded plugins
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no loaded plugins
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
