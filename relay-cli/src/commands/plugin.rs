//! Plugin set management commands

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use relay_core::PluginSet;

/// Plugin set management arguments
#[derive(Args)]
pub struct PluginArgs {
    #[command(subcommand)]
    pub command: PluginCommands,
}

/// Plugin subcommands
#[derive(Subcommand)]
pub enum PluginCommands {
    /// Add a plugin library to the set
    Add {
        /// Path to the plugin library
        path: PathBuf,
    },
    /// Remove a plugin library from the set
    Remove {
        /// Path to the plugin library
        path: PathBuf,
    },
    /// List plugins in load order
    List,
}

/// Run plugin command
pub fn run(args: PluginArgs) -> Result<()> {
    let set_path = relay_paths::plugin_set_path();
    let mut set = PluginSet::load(&set_path)?;

    match args.command {
        PluginCommands::Add { path } => {
            if !path.exists() {
                tracing::warn!(
                    plugin = %path.display(),
                    "Path does not exist; it will be skipped until it does"
                );
            }
            if set.add(path.clone()) {
                set.save(&set_path)?;
                println!("Added plugin: {}", path.display());
            } else {
                println!("Plugin already in set: {}", path.display());
            }
        }
        PluginCommands::Remove { path } => {
            if set.remove(&path) {
                set.save(&set_path)?;
                println!("Removed plugin: {}", path.display());
            } else {
                println!("Plugin not in set: {}", path.display());
            }
        }
        PluginCommands::List => {
            if set.is_empty() {
                println!("No plugins in set");
                println!();
                println!("To add a plugin:");
                println!("  1. Build it as a dynamic library exporting registerCallback");
                println!("  2. Add it: relay plugin add path/to/libmy_plugin.so");
                println!("  3. Send it events: relay fire my-event");
                return Ok(());
            }

            for path in set.iter() {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
