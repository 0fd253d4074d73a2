//! relay-plugin-api - Plugin API for the relay plugin loader
//!
//! This crate defines the contract between relay and its plugins. A relay
//! plugin is a native dynamic library that exports exactly one symbol,
//! `registerCallback`, taking a null-terminated byte string (the event
//! name) and returning nothing. Relay invokes it with lifecycle events and
//! with any event fired by the host application.
//!
//! Plugins written in Rust should use the [`export_callback!`] macro
//! rather than declaring the extern function by hand:
//!
//! ```ignore
//! use relay_plugin_api::{export_callback, REGISTER_EVENT, REMOVE_EVENT};
//!
//! fn on_event(event: &str) {
//!     match event {
//!         REGISTER_EVENT => eprintln!("loaded"),
//!         REMOVE_EVENT => eprintln!("unloading"),
//!         _ => {} // unrecognized events are ignored, never signaled back
//!     }
//! }
//!
//! export_callback!(on_event);
//! ```

use std::os::raw::c_char;

/// Name of the mandatory symbol every plugin must export.
pub const ENTRY_POINT: &str = "registerCallback";

/// Signature of the exported entry point.
///
/// The event name is a null-terminated byte string owned by the caller;
/// it is only valid for the duration of the call.
pub type EntryPoint = unsafe extern "C" fn(event: *const c_char);

/// Event sent once, immediately after a plugin is successfully loaded.
pub const REGISTER_EVENT: &str = "registerPlugin";

/// Event sent once, immediately before a plugin's library is closed.
pub const REMOVE_EVENT: &str = "removePlugin";

/// Export a `fn(&str)` handler as the relay plugin entry point.
///
/// Generates the C ABI `registerCallback` function that relay resolves at
/// load time. The generated shim ignores null or non-UTF-8 event names;
/// the handler only ever sees valid string slices.
///
/// # Usage
///
/// ```ignore
/// relay_plugin_api::export_callback!(my_handler);
/// ```
#[macro_export]
macro_rules! export_callback {
    ($handler:path) => {
        // The symbol name is contractual, so the camelCase lint is silenced.
        #[allow(non_snake_case)]
        #[unsafe(no_mangle)]
        pub extern "C" fn registerCallback(event: *const ::std::os::raw::c_char) {
            if event.is_null() {
                return;
            }
            // SAFETY: relay guarantees `event` points to a null-terminated
            // string that stays alive for the duration of this call.
            let event = unsafe { ::std::ffi::CStr::from_ptr(event) };
            if let Ok(event) = event.to_str() {
                let handler: fn(&str) = $handler;
                handler(event);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_point_name_matches_contract() {
        assert_eq!(ENTRY_POINT, "registerCallback");
    }

    #[test]
    fn test_lifecycle_event_names() {
        assert_eq!(REGISTER_EVENT, "registerPlugin");
        assert_eq!(REMOVE_EVENT, "removePlugin");
    }

    #[test]
    fn test_entry_point_signature_is_c_compatible() {
        // Compiles only if the alias stays a plain C fn pointer
        fn _takes_entry(_: EntryPoint) {}
    }
}
