//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["topic-router.toml", ".topic-router.toml"];

/// Prefix of environment overrides; `__` separates nested keys
const ENV_PREFIX: &str = "TOPIC_ROUTER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TOPIC_ROUTER_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./topic-router.toml` or `./.topic-router.toml`
    /// 4. Global: `~/.config/topic-router/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the merged provider chain without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        // An explicitly named file must exist
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("topic-router").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert!(config.models.routing.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("topic-router"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[models]\nrouting = \"mistral\"").unwrap();

        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load(Some(file.path())).map_err(|e| *e)?;
            assert_eq!(config.models.routing.as_deref(), Some("mistral"));
            assert_eq!(config.ollama.base_url, "http://localhost:11434");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            let missing = jail.directory().join("no-such-config.toml");
            assert!(ConfigLoader::load(Some(&missing)).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_discovered() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "topic-router.toml",
                "[ollama]\nbase_url = \"http://project:11434\"",
            )?;
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.ollama.base_url, "http://project:11434");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "topic-router.toml",
                "[ollama]\nbase_url = \"http://project:11434\"\n[models]\nlisting = \"phi3\"",
            )?;
            jail.set_env("TOPIC_ROUTER_OLLAMA__BASE_URL", "http://env:11434");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.ollama.base_url, "http://env:11434");
            assert_eq!(config.models.listing.as_deref(), Some("phi3"));
            Ok(())
        });
    }
}
