use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One `jobs:search` invocation against Cloud Talent, constrained to
/// jobs reachable within a commute budget.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchJobsRequest {
    pub project_id: String,
    pub tenant_id: String,
    pub metadata: RequestMetadata,
    pub query: JobQuery,
    pub order_by: Option<String>,
    pub custom_ranking: Option<CustomRankingInfo>,
    pub max_page_size: Option<u32>,
}

impl SearchJobsRequest {
    pub fn parent(&self) -> String {
        format!("projects/{}/tenants/{}", self.project_id, self.tenant_id)
    }
}

/// Caller attribution the service requires on every search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMetadata {
    pub domain: String,
    pub session_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    pub commute_filter: CommuteFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommuteFilter {
    pub method: CommuteMethod,
    pub travel_duration: Duration,
    pub start_coordinates: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommuteMethod {
    Driving,
    Transit,
    Walking,
    Cycling,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Optional result-ranking knobs; absent unless configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRankingInfo {
    pub importance_level: String,
    pub ranking_expression: String,
}

/// One search hit: the snippets the service composed plus the job itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingJob {
    pub job_summary: String,
    pub job_title_snippet: String,
    pub job: Job,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub title: String,
}
