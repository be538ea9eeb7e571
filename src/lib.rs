pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use crate::core::client::ClassDirectoryClient;
pub use crate::domain::model::{ClassId, ClassRecord};
pub use crate::domain::ports::ClassDirectory;
pub use crate::utils::error::{DirectoryError, Result};
