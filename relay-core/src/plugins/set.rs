//! Persisted plugin set - the plugin paths the CLI loads between runs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::RegistryError;

/// Ordered list of plugin paths, persisted as TOML
///
/// Stored in `~/.config/relay/plugins.toml`. Order is preserved because
/// plugins are registered, and therefore receive events, in the order
/// listed here. Paths are deduplicated literally, matching the registry's
/// notion of identity.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PluginSet {
    /// Plugin paths in load order
    #[serde(default)]
    pub plugins: Vec<PathBuf>,
}

impl PluginSet {
    /// Load the set from a TOML file
    ///
    /// Returns an empty set if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let set: Self =
            toml::from_str(&content).map_err(|e| RegistryError::PluginSet(e.to_string()))?;
        Ok(set)
    }

    /// Save the set to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), RegistryError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RegistryError::PluginSet(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent().filter(|p| !p.exists()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Append a plugin path; returns false if it was already present
    pub fn add(&mut self, plugin: impl Into<PathBuf>) -> bool {
        let plugin = plugin.into();
        if self.contains(&plugin) {
            return false;
        }
        self.plugins.push(plugin);
        true
    }

    /// Remove a plugin path; returns false if it wasn't present
    pub fn remove(&mut self, plugin: &Path) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|p| p != plugin);
        self.plugins.len() < before
    }

    /// Check if a plugin path is in the set
    pub fn contains(&self, plugin: &Path) -> bool {
        self.plugins.iter().any(|p| p == plugin)
    }

    /// Iterate over plugin paths in load order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.plugins.iter().map(PathBuf::as_path)
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_default_is_empty() {
        let set = PluginSet::default();
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_add_remove() {
        let mut set = PluginSet::default();

        assert!(set.add("plugins/liba.so"));
        assert!(set.contains(Path::new("plugins/liba.so")));
        assert!(!set.contains(Path::new("plugins/libb.so")));

        assert!(set.remove(Path::new("plugins/liba.so")));
        assert!(!set.contains(Path::new("plugins/liba.so")));
        assert!(!set.remove(Path::new("plugins/liba.so")));
    }

    #[test]
    fn test_set_add_deduplicates() {
        let mut set = PluginSet::default();
        assert!(set.add("plugins/liba.so"));
        assert!(!set.add("plugins/liba.so"));
        assert_eq!(set.plugins.len(), 1);
    }

    #[test]
    fn test_set_preserves_order() {
        let mut set = PluginSet::default();
        set.add("plugins/libc.so");
        set.add("plugins/liba.so");
        set.add("plugins/libb.so");

        let order: Vec<&Path> = set.iter().collect();
        assert_eq!(
            order,
            vec![
                Path::new("plugins/libc.so"),
                Path::new("plugins/liba.so"),
                Path::new("plugins/libb.so"),
            ]
        );
    }

    #[test]
    fn test_set_load_missing_file() {
        let set = PluginSet::load(Path::new("/nonexistent/path/plugins.toml")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugins.toml");

        let mut set = PluginSet::default();
        set.add("plugins/libstats.so");
        set.add("plugins/libecho.so");
        set.save(&path).unwrap();

        let loaded = PluginSet::load(&path).unwrap();
        assert!(loaded.contains(Path::new("plugins/libstats.so")));
        assert!(loaded.contains(Path::new("plugins/libecho.so")));
        let order: Vec<&Path> = loaded.iter().collect();
        assert_eq!(order[0], Path::new("plugins/libstats.so"));
    }

    #[test]
    fn test_set_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/plugins.toml");

        let set = PluginSet::default();
        set.save(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_set_load_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugins.toml");
        std::fs::write(&path, "plugins = 3").unwrap();

        let err = PluginSet::load(&path).unwrap_err();
        assert!(matches!(err, RegistryError::PluginSet(_)));
    }

    #[test]
    fn test_set_toml_format() {
        let mut set = PluginSet::default();
        set.add("plugins/libecho.so");

        let toml_str = toml::to_string_pretty(&set).unwrap();
        assert!(toml_str.contains("plugins"));
        assert!(toml_str.contains("libecho.so"));
    }
}
