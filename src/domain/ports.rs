use crate::domain::model::{ClassId, ClassRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the remote class directory.
#[async_trait]
pub trait ClassDirectory: Send + Sync {
    async fn fetch_all(&self) -> Result<ClassRecord>;
    async fn fetch_by_id(&self, id: &ClassId) -> Result<ClassRecord>;
}
