use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TECURO_CONFIG environment variable (with tilde expansion)
/// 3. System config directory (`<config_dir>/tecuro/config.toml`)
///
/// Returns `None` when none of these is available; callers then run on defaults.
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TECURO_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("tecuro").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory or http(s) base URL holding `products.json`, `suits.json`
    /// and `ingredients.json`
    pub data_root: String,
    /// Page path the product browser lives at
    pub default_path: String,
    pub featured_limit: usize,
    pub search_debounce_ms: u64,
    pub search_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_root: "./assets/data".to_string(),
            default_path: "/products.html".to_string(),
            featured_limit: tecuro_engine::DEFAULT_FEATURED_LIMIT,
            search_debounce_ms: 200,
            search_threshold: tecuro_engine::DEFAULT_THRESHOLD,
        }
    }
}

impl Config {
    /// Load from the resolved path, or defaults when there is none.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn with_data_root(mut self, data_root: impl Into<String>) -> Self {
        self.data_root = data_root.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_root, "./assets/data");
        assert_eq!(config.featured_limit, 3);
        assert_eq!(config.search_debounce(), Duration::from_millis(200));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested/config.toml");

        let config = Config {
            featured_limit: 6,
            ..Config::default()
        }
        .with_data_root("https://cdn.example.com/data");

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "search_debounce_ms = 50\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.search_debounce_ms, 50);
        assert_eq!(loaded.default_path, "/products.html");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "featured_limit = \"many\"")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/srv/data"), PathBuf::from("/srv/data"));
        assert_eq!(expand_tilde("data/~/x"), PathBuf::from("data/~/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/catalog"), home.join("catalog"));
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some("/etc/tecuro.toml"));
        assert_eq!(path, Some(PathBuf::from("/etc/tecuro.toml")));
    }
}
