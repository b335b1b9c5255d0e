use std::sync::Arc;

use crate::clients::GoogleDlpClient;
use crate::config::Config;
use crate::error::Result;
use crate::services::ReidentifyService;
use crate::services::reidentify::{build_request, render};

pub async fn run(
    project_id: String,
    text: String,
    key_name: String,
    wrapped_key: &str,
    surrogate_type: Option<String>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let request = build_request(project_id, text, key_name, wrapped_key, surrogate_type)?;

    let credentials = config.resolve_credentials()?;
    let client = GoogleDlpClient::new(credentials, config.endpoints.dlp.clone())?;
    let service = ReidentifyService::new(Arc::new(client));

    let content = service.run(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        println!("{}", render(&content));
    }
    Ok(())
}
