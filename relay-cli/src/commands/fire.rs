//! Fire events through the plugin set

use anyhow::Result;
use clap::Args;
use relay_core::{PluginRegistry, PluginSet, RegisterOutcome};

/// Fire arguments
#[derive(Args)]
pub struct FireArgs {
    /// Event names to broadcast, in order
    #[arg(required = true)]
    pub events: Vec<String>,
}

/// Load every plugin in the set, broadcast the events, then unload.
///
/// Each plugin receives "registerPlugin" when it loads, the fired events
/// in argument order, and "removePlugin" when the registry is torn down.
pub fn run(args: FireArgs) -> Result<()> {
    let set_path = relay_paths::plugin_set_path();
    let set = PluginSet::load(&set_path)?;

    if set.is_empty() {
        println!("No plugins in set; nothing to fire");
        return Ok(());
    }

    let mut registry = PluginRegistry::new();
    for path in set.iter() {
        match registry.register(path) {
            Ok(RegisterOutcome::Loaded) => {}
            Ok(RegisterOutcome::AlreadyLoaded) => {}
            Ok(RegisterOutcome::Missing) => {
                tracing::warn!(plugin = %path.display(), "Plugin missing on disk, skipped");
            }
            Err(e) => {
                tracing::error!(plugin = %path.display(), error = %e, "Failed to load plugin");
            }
        }
    }

    for event in &args.events {
        registry.fire_callback(event)?;
    }

    println!(
        "Fired {} event(s) to {} plugin(s)",
        args.events.len(),
        registry.len()
    );

    // Dropping the registry notifies every plugin and closes its library
    Ok(())
}
