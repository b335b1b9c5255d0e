use std::sync::Arc;

use crate::clients::GoogleTalentClient;
use crate::config::Config;
use crate::error::Result;
use crate::services::CommuteSearchService;
use crate::services::commute::{build_request, render_job};

pub async fn run(project_id: String, tenant_id: String, json: bool, config: &Config) -> Result<()> {
    let metadata = config.metadata.resolve();
    let request = build_request(project_id, tenant_id, metadata, &config.search);

    let credentials = config.resolve_credentials()?;
    let client = GoogleTalentClient::new(credentials, config.endpoints.talent.clone())?;
    let service = CommuteSearchService::new(Arc::new(client));

    if json {
        let jobs = service.collect(&request).await?;
        println!("{}", serde_json::to_string_pretty(&jobs)?);
    } else {
        let mut stream = service.stream(&request);
        while let Some(job) = stream.next().await? {
            for line in render_job(&job) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
