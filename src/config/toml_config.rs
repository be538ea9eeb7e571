use crate::config::ClientConfig;
use crate::utils::error::{DirectoryError, Result};
use regex::Regex;
use std::path::Path;

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |key| std::env::var(key).ok())
    }

    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = substitute_env_vars(content, lookup)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${CLASS_DIRECTORY_BASE_URL})，未設定的保持原樣
fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigParse {
        message: format!("Invalid placeholder pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = ClientConfig::from_toml_str(r#"base_url = "https://api.example.test""#).unwrap();
        assert_eq!(config.base_url, "https://api.example.test");
    }

    #[test]
    fn test_env_placeholder_substitution() {
        let content = r#"base_url = "https://${API_HOST}:8443""#;
        let config = ClientConfig::from_toml_str_with(content, |key| match key {
            "API_HOST" => Some("classes.example.test".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.base_url, "https://classes.example.test:8443");
    }

    #[test]
    fn test_unset_placeholder_is_kept() {
        let content = r#"base_url = "${MISSING_HOST}""#;
        let config = ClientConfig::from_toml_str_with(content, |_| None).unwrap();
        assert_eq!(config.base_url, "${MISSING_HOST}");
    }

    #[test]
    fn test_missing_base_url_is_a_parse_error() {
        let err = ClientConfig::from_toml_str("timeout = 3").unwrap_err();
        assert!(matches!(err, DirectoryError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "http://127.0.0.1:9000""#).unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ClientConfig::from_file("/nonexistent/class-directory.toml").unwrap_err();
        assert!(matches!(err, DirectoryError::Io(_)));
    }
}
