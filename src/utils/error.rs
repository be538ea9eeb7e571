use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("{operation} failed with HTTP status {status}")]
    HttpStatus { operation: &'static str, status: u16 },

    #[error("{operation} request could not be completed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} returned a body that is not valid JSON: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Remote,
    Network,
    Payload,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    /// HTTP status code for `HttpStatus` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            DirectoryError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server answered 404. Not-found has no variant of its own.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::HttpStatus { .. } => ErrorCategory::Remote,
            DirectoryError::Transport { .. } => ErrorCategory::Network,
            DirectoryError::Decode { .. } => ErrorCategory::Payload,
            DirectoryError::Io(_)
            | DirectoryError::InvalidConfigValue { .. }
            | DirectoryError::MissingConfig { .. }
            | DirectoryError::ConfigParse { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DirectoryError::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            DirectoryError::HttpStatus { .. } => ErrorSeverity::High,
            DirectoryError::Transport { .. } => ErrorSeverity::Medium,
            DirectoryError::Decode { .. } => ErrorSeverity::High,
            _ => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DirectoryError::HttpStatus { status: 404, .. } => {
                "Check that the class identifier exists on the server".to_string()
            }
            DirectoryError::HttpStatus { status: 401 | 403, .. } => {
                "The API rejected the request; it may require credentials this client does not send"
                    .to_string()
            }
            DirectoryError::HttpStatus { status, .. } if *status >= 500 => {
                "The server failed to handle the request; try again later".to_string()
            }
            DirectoryError::HttpStatus { .. } => "Check the request against the API".to_string(),
            DirectoryError::Transport { .. } => {
                "Check that the base URL is reachable and the server is running".to_string()
            }
            DirectoryError::Decode { .. } => {
                "Check that the base URL points at the class directory API".to_string()
            }
            DirectoryError::Io(_) => "Check that the configuration file exists and is readable".to_string(),
            DirectoryError::InvalidConfigValue { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            DirectoryError::MissingConfig { field } => format!("Provide a value for '{}'", field),
            DirectoryError::ConfigParse { .. } => "Fix the syntax of the configuration file".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::HttpStatus { status: 404, .. } => "Class not found".to_string(),
            DirectoryError::HttpStatus { status, .. } => {
                format!("The class directory answered with status {}", status)
            }
            DirectoryError::Transport { .. } => "Could not reach the class directory".to_string(),
            DirectoryError::Decode { .. } => {
                "The class directory returned a malformed response".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
