use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::domain::{FfxAlphabet, ReidentifiedContent, ReidentifyRequest};
use crate::error::{GcpSamplesError, Result};
use crate::ports::ReidentifyClient;

/// The surrogates in scope here were produced by an FPE transformation
/// over digits only.
const COMMON_ALPHABET: FfxAlphabet = FfxAlphabet::Numeric;

/// Maps the loaded arguments onto a request record. Pure, except that a
/// wrapped key which is not valid base64 fails here, before any remote
/// call.
pub fn build_request(
    project_id: String,
    text: String,
    key_name: String,
    wrapped_key: &str,
    surrogate_type: Option<String>,
) -> Result<ReidentifyRequest> {
    let key_material = BASE64
        .decode(wrapped_key.trim())
        .map_err(|e| GcpSamplesError::InvalidWrappedKey(e.to_string()))?;

    Ok(ReidentifyRequest {
        project_id,
        text,
        crypto_key_name: key_name,
        key_material,
        surrogate_type,
        alphabet: COMMON_ALPHABET,
    })
}

pub fn render(content: &ReidentifiedContent) -> &str {
    &content.value
}

pub struct ReidentifyService<C: ReidentifyClient> {
    client: Arc<C>,
}

impl<C: ReidentifyClient> ReidentifyService<C> {
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn run(&self, request: &ReidentifyRequest) -> Result<ReidentifiedContent> {
        tracing::info!(project = %request.project_id, "re-identifying content");
        self.client.reidentify(request).await
    }
}
