//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "storefront";
const PROJECT_FILES: [&str; 2] = ["storefront.toml", ".storefront.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `STOREFRONT_` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./storefront.toml` or `./.storefront.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/storefront/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("STOREFRONT_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/storefront/config.toml if set,
    /// otherwise falls back to ~/.config/storefront/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_sources(config_path) {
            println!("  {}", line);
        }
    }

    /// One line per source, highest priority first
    pub fn config_sources(config_path: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec!["[     ] Env:      STOREFRONT_* variables".to_string()];

        match config_path {
            Some(path) if path.exists() => {
                lines.push(format!("[FOUND] Explicit: {}", path.display()))
            }
            Some(path) => lines.push(format!("[     ] Explicit: {}", path.display())),
            None => lines.push("[     ] Explicit: --config <path>".to_string()),
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("[FOUND] Project:  {}", path.display())),
            None => lines.push(
                "[     ] Project:  ./storefront.toml or ./.storefront.toml".to_string(),
            ),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("[{}] Global:   {}", mark, path.display()));
        }

        lines.push("[     ] Default:  built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.latency.chat_ms, 1500);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("storefront"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "storefront.toml",
                r#"
                [latency]
                chat_ms = 5
                "#,
            )?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.latency.chat_ms, 5);
            assert_eq!(config.latency.catalog_ms, 500);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("storefront.toml", "[output]\ncolor = false\n[latency]\nauth_ms = 1")?;
            jail.create_file("custom.toml", "[latency]\nauth_ms = 2")?;

            let config = ConfigLoader::load(Some(&PathBuf::from("custom.toml"))).unwrap();
            assert_eq!(config.latency.auth_ms, 2);
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("storefront.toml", "[latency]\nchat_ms = 5")?;
            jail.set_env("STOREFRONT_LATENCY__CHAT_MS", "7");
            jail.set_env("STOREFRONT_CATALOG__PATH", "other.json");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.latency.chat_ms, 7);
            assert_eq!(config.catalog.path, Some(PathBuf::from("other.json")));
            Ok(())
        });
    }

    #[test]
    fn test_config_sources_lists_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[latency]\nauth_ms = 2")?;

            let lines = ConfigLoader::config_sources(Some(&PathBuf::from("custom.toml")));
            assert_eq!(lines[1], "[FOUND] Explicit: custom.toml");
            assert!(lines[2].contains("Project"));
            assert!(lines.last().unwrap().contains("Default"));

            let lines = ConfigLoader::config_sources(Some(&PathBuf::from("missing.toml")));
            assert_eq!(lines[1], "[     ] Explicit: missing.toml");

            let lines = ConfigLoader::config_sources(None);
            assert!(lines[1].contains("--config"));
            Ok(())
        });
    }
}
