//! XDG Base Directory paths for relay.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths. This matches tools like gh, docker, kubectl.

use std::path::PathBuf;

/// Get the relay config directory.
///
/// Returns `$XDG_CONFIG_HOME/relay` if set, otherwise `~/.config/relay`.
/// This is where the persisted plugin set lives.
///
/// # Examples
///
/// ```
/// use relay_paths::config_dir;
///
/// let config = config_dir();
/// let set_path = config.join("plugins.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("relay")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/relay")
    } else {
        PathBuf::from(".config/relay")
    }
}

/// Default location of the persisted plugin set.
///
/// `$XDG_CONFIG_HOME/relay/plugins.toml` (or the `~/.config` fallback).
pub fn plugin_set_path() -> PathBuf {
    config_dir().join("plugins.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_relay() {
        let path = config_dir();
        assert!(
            path.ends_with("relay"),
            "config_dir should end with 'relay'"
        );
    }

    #[test]
    fn test_plugin_set_path_file_name() {
        let path = plugin_set_path();
        assert!(path.ends_with("plugins.toml"));
    }

    #[test]
    fn test_config_dir_respects_xdg_env() {
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/tmp/test-config");
        }
        let path = config_dir();
        assert_eq!(path, PathBuf::from("/tmp/test-config/relay"));
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }
}
