//! relay CLI subcommands

pub mod fire;
pub mod plugin;
