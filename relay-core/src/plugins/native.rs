//! Native library binding: open, resolve, invoke, close

use std::ffi::CStr;
use std::path::Path;

use libloading::Library;
use relay_plugin_api::{ENTRY_POINT, EntryPoint};

use super::error::RegistryError;

/// An open plugin library together with its resolved entry point.
///
/// The function pointer is only valid while the library stays open. Both
/// fields are private and dropped together, so the callback cannot be
/// invoked after the library is closed.
pub(crate) struct NativeEntry {
    /// Resolved `registerCallback` function
    callback: EntryPoint,
    /// Keep the library loaded
    _library: Library,
}

impl NativeEntry {
    /// Open the library at `path` and resolve the mandatory entry point.
    ///
    /// Fails with [`RegistryError::LibraryLoad`] if the library cannot be
    /// opened and [`RegistryError::EntryPoint`] if it opens but does not
    /// export `registerCallback`. No entry is ever constructed around an
    /// unresolved callback.
    pub(crate) fn open(path: &Path) -> Result<Self, RegistryError> {
        // SAFETY: opening a library runs its initializers. Relay only opens
        // paths the caller explicitly registered; plugins are trusted native
        // code by contract.
        let library = unsafe {
            Library::new(path).map_err(|source| RegistryError::LibraryLoad {
                path: path.to_path_buf(),
                source,
            })?
        };

        // SAFETY: the symbol is declared with the exact C ABI signature the
        // plugin contract mandates. The fn pointer is copied out of the
        // symbol and kept alongside the library that backs it.
        let callback = unsafe {
            *library
                .get::<EntryPoint>(ENTRY_POINT.as_bytes())
                .map_err(|source| RegistryError::EntryPoint {
                    path: path.to_path_buf(),
                    source,
                })?
        };

        Ok(Self {
            callback,
            _library: library,
        })
    }

    /// Invoke the plugin's entry point with one event name.
    ///
    /// Synchronous: control does not return until the plugin returns.
    pub(crate) fn invoke(&self, event: &CStr) {
        // SAFETY: the library backing `callback` is still open because it is
        // owned by `self`, and `event` is a valid null-terminated string
        // that outlives the call.
        unsafe { (self.callback)(event.as_ptr()) }
    }
}
