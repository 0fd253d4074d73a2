//! Echo Plugin - A simple example plugin for relay
//!
//! This plugin demonstrates:
//! - Exporting the entry point with the `export_callback!` macro
//! - Reacting to the lifecycle events relay sends on load and unload
//! - Handling application events by name
//!
//! ## Building
//!
//! ```bash
//! cargo build --release
//! ```
//!
//! ## Installing
//!
//! ```bash
//! relay plugin add target/release/libecho_plugin.so
//! relay fire tick
//! ```

use relay_plugin_api::{REGISTER_EVENT, REMOVE_EVENT, export_callback};

fn on_event(event: &str) {
    match event {
        REGISTER_EVENT => eprintln!("[echo] loaded"),
        REMOVE_EVENT => eprintln!("[echo] unloading"),
        other => eprintln!("[echo] event: {other}"),
    }
}

export_callback!(on_event);
