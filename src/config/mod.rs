pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_database_url, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://employee_tracker.db";
pub const DEFAULT_TITLE: &str = "Employee Manager";

/// Effective settings after merging the settings file and the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub init_schema: bool,
    pub show_banner: bool,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            init_schema: false,
            show_banner: true,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// File values over defaults.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            database_url: file.database.url.clone().unwrap_or(defaults.database_url),
            init_schema: file.database.init_schema.unwrap_or(defaults.init_schema),
            show_banner: file.display.banner.unwrap_or(defaults.show_banner),
            title: file.display.title.clone().unwrap_or(defaults.title),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_database_url("database_url", &self.database_url)?;
        validate_non_empty_string("title", &self.title)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn database_url(&self) -> &str {
        &self.database_url
    }

    fn init_schema(&self) -> bool {
        self.init_schema
    }

    fn show_banner(&self) -> bool {
        self.show_banner
    }

    fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "employee-tracker")]
#[command(about = "Browse and edit departments, roles and employees")]
pub struct CliConfig {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Create the database file and tables if they do not exist
    #[arg(long)]
    pub init_schema: bool,

    /// Skip the start-up banner
    #[arg(long)]
    pub no_banner: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command-line values override the settings file.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut settings = Settings::from_toml(&file);
        if let Some(url) = &self.database_url {
            settings.database_url = url.clone();
        }
        if self.init_schema {
            settings.init_schema = true;
        }
        if self.no_banner {
            settings.show_banner = false;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.title(), "Employee Manager");
        assert!(settings.show_banner());
        assert!(!settings.init_schema());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file = TomlConfig::from_toml_str(
            "[database]\nurl = \"sqlite::memory:\"\n[display]\nbanner = false\n",
        )
        .unwrap();
        let settings = Settings::from_toml(&file);

        assert_eq!(settings.database_url(), "sqlite::memory:");
        assert!(!settings.show_banner());
        assert_eq!(settings.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_non_sqlite_url_fails_validation() {
        let settings = Settings {
            database_url: "postgres://localhost/company".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[database]\nurl = \"sqlite://file.db\"\n[display]\ntitle = \"From File\""
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "employee-tracker",
            "--database-url",
            "sqlite://cli.db",
            "--config",
            file.path().to_str().unwrap(),
            "--no-banner",
            "--init-schema",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.database_url, "sqlite://cli.db");
        assert_eq!(settings.title, "From File");
        assert!(!settings.show_banner);
        assert!(settings.init_schema);
    }
}
