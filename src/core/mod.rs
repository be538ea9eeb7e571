pub mod client;

pub use crate::domain::model::{ClassId, ClassRecord};
pub use crate::domain::ports::ClassDirectory;
pub use crate::utils::error::Result;
