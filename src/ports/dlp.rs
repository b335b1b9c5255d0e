use async_trait::async_trait;

use crate::domain::{ReidentifiedContent, ReidentifyRequest};
use crate::error::Result;

#[async_trait]
pub trait ReidentifyClient: Send + Sync {
    async fn reidentify(&self, request: &ReidentifyRequest) -> Result<ReidentifiedContent>;
}
