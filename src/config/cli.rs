use crate::config::ClientConfig;
use crate::domain::model::ClassId;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "class-directory")]
#[command(about = "Read classes from the admin class directory API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Base URL of the admin API")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "TOML file providing base_url")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Pretty-print the returned JSON")]
    pub pretty: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every class
    List,
    /// Fetch one class by identifier
    Get { id: String },
}

impl Command {
    pub fn class_id(&self) -> Option<ClassId> {
        match self {
            Command::List => None,
            Command::Get { id } => Some(ClassId::from(id.as_str())),
        }
    }
}

impl CliConfig {
    /// Flag, then config file, then `CLASS_DIRECTORY_BASE_URL`, then the default address.
    pub fn client_config(&self) -> Result<ClientConfig> {
        self.client_config_with(|key| std::env::var(key).ok())
    }

    pub fn client_config_with<F>(&self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = self.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
            return Ok(ClientConfig::new(base_url.trim()));
        }

        if let Some(path) = &self.config {
            let content = std::fs::read_to_string(path)?;
            return ClientConfig::from_toml_str_with(&content, lookup);
        }

        Ok(ClientConfig::from_lookup(lookup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_get_command() {
        let cli = CliConfig::try_parse_from([
            "class-directory",
            "--base-url",
            "https://api.example.test",
            "get",
            "42",
        ])
        .unwrap();

        assert_eq!(cli.command.class_id(), Some(ClassId::from("42")));
        assert_eq!(
            cli.client_config().unwrap().base_url,
            "https://api.example.test"
        );
    }

    #[test]
    fn test_flag_wins_over_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "http://from-file.test""#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "class-directory",
            "list",
            "--config",
            path.as_str(),
            "--base-url",
            "http://from-flag.test",
        ])
        .unwrap();

        assert_eq!(cli.client_config().unwrap().base_url, "http://from-flag.test");
    }

    #[test]
    fn test_config_file_used_without_flag() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "http://from-file.test""#).unwrap();

        let cli = CliConfig {
            base_url: None,
            config: Some(file.path().to_path_buf()),
            pretty: false,
            json_logs: false,
            verbose: false,
            command: Command::List,
        };

        let config = cli
            .client_config_with(|_| Some("https://env.example.test".to_string()))
            .unwrap();
        assert_eq!(config.base_url, "http://from-file.test");
        assert_eq!(cli.command.class_id(), None);
    }

    #[test]
    fn test_default_when_nothing_configured() {
        let cli = CliConfig {
            base_url: None,
            config: None,
            pretty: true,
            json_logs: false,
            verbose: false,
            command: Command::List,
        };

        assert_eq!(cli.client_config_with(|_| None).unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_env_used_when_no_flag_or_file() {
        let cli = CliConfig::try_parse_from(["class-directory", "get", "7"]).unwrap();
        let config = cli
            .client_config_with(|_| Some("https://env.example.test".to_string()))
            .unwrap();
        assert_eq!(config.base_url, "https://env.example.test");
    }
}
