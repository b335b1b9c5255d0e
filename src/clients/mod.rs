mod dlp;
mod talent;

pub use dlp::GoogleDlpClient;
pub use talent::GoogleTalentClient;

use crate::error::{GcpSamplesError, Result};

pub(crate) fn http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("gcp-samples/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Passes a successful response through; turns anything else into an
/// opaque `Api` error carrying whatever message the service sent.
pub(crate) async fn expect_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let raw = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&raw)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or(raw);

    Err(GcpSamplesError::Api {
        service,
        status: status.as_u16(),
        message,
    })
}
