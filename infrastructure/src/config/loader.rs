//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `EXPERT_CONSULT_OPENAI__MODEL`.
const ENV_PREFIX: &str = "EXPERT_CONSULT_";

const PROJECT_CONFIG_FILES: [&str; 2] = ["expert-consult.toml", ".expert-consult.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `EXPERT_CONSULT_<SECTION>__<KEY>` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./expert-consult.toml` or `./.expert-consult.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/expert-consult/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Load defaults plus environment overrides, skipping all files (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        let figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        Self::with_env(figment).extract().map_err(Box::new)
    }

    fn with_env(figment: Figment) -> Figment {
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/expert-consult/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("expert-consult").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_CONFIG_FILES[0], PROJECT_CONFIG_FILES[1]
            );
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
    use consult_domain::{Model, OutputFormat, Persona};
    use figment::Jail;

    #[test]
    fn test_global_config_path_mentions_app_name() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("expert-consult"));
        }
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "expert-consult.toml",
                r#"
[openai]
model = "gpt-4o"

[consult]
default_persona = "nutritionist"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.openai.parse_model().0, Some(Model::Gpt4o));
            assert_eq!(
                config.consult.parse_default_persona().0,
                Some(Persona::Nutritionist)
            );
            // untouched sections keep defaults
            assert_eq!(config.openai.api_key_env, "OPENAI_API_KEY");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("expert-consult.toml", "[openai]\nmodel = \"gpt-4o\"\n")?;
            jail.create_file("custom.toml", "[openai]\nmodel = \"gpt-4.1\"\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.openai.parse_model().0, Some(Model::Gpt41));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("expert-consult.toml", "[output]\nformat = \"plain\"\n")?;
            jail.set_env("EXPERT_CONSULT_OUTPUT__FORMAT", "json");
            jail.set_env("EXPERT_CONSULT_OPENAI__BASE_URL", "http://localhost:8080");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            assert_eq!(config.openai.base_url, "http://localhost:8080");
            Ok(())
        });
    }

    #[test]
    fn test_load_without_files_ignores_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("expert-consult.toml", "[openai]\nmodel = \"gpt-4o\"\n")?;

            let config = ConfigLoader::load_without_files().map_err(|e| *e)?;
            assert!(config.openai.model.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("expert-consult.toml", "[openai\nmodel = ")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
