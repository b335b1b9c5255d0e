use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::domain::{CommuteMethod, LatLng, MatchingJob, SearchJobsRequest};
use crate::error::Result;
use crate::ports::{JobSearchClient, SearchPage};

/// Cloud Talent Solution v4 REST adapter.
pub struct GoogleTalentClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl GoogleTalentClient {
    pub fn new(credentials: Credentials, endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: super::http_client()?,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    fn body_for<'a>(
        request: &'a SearchJobsRequest,
        page_token: Option<&'a str>,
    ) -> SearchBody<'a> {
        let filter = &request.query.commute_filter;
        SearchBody {
            request_metadata: WireRequestMetadata {
                domain: &request.metadata.domain,
                session_id: &request.metadata.session_id,
                user_id: &request.metadata.user_id,
            },
            job_query: WireJobQuery {
                commute_filter: WireCommuteFilter {
                    commute_method: filter.method,
                    travel_duration: format!("{}s", filter.travel_duration.as_secs()),
                    start_coordinates: filter.start_coordinates,
                },
            },
            order_by: request.order_by.as_deref(),
            custom_ranking_info: request.custom_ranking.as_ref().map(|ranking| {
                WireCustomRankingInfo {
                    importance_level: &ranking.importance_level,
                    ranking_expression: &ranking.ranking_expression,
                }
            }),
            max_page_size: request.max_page_size,
            page_token,
        }
    }
}

#[async_trait]
impl JobSearchClient for GoogleTalentClient {
    async fn search_page(
        &self,
        request: &SearchJobsRequest,
        page_token: Option<&str>,
    ) -> Result<SearchPage> {
        let url = format!("{}/v4/{}/jobs:search", self.endpoint, request.parent());
        tracing::debug!(%url, page_token = page_token.unwrap_or("<first>"), "calling jobs:search");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.credentials.token())
            .json(&Self::body_for(request, page_token))
            .send()
            .await?;
        let response = super::expect_success("talent", response).await?;

        let wire: SearchResponse = response.json().await?;
        Ok(SearchPage {
            jobs: wire.matching_jobs.into_iter().map(Into::into).collect(),
            next_page_token: wire.next_page_token,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody<'a> {
    request_metadata: WireRequestMetadata<'a>,
    job_query: WireJobQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_ranking_info: Option<WireCustomRankingInfo<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequestMetadata<'a> {
    domain: &'a str,
    session_id: &'a str,
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireJobQuery {
    commute_filter: WireCommuteFilter,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireCommuteFilter {
    commute_method: CommuteMethod,
    travel_duration: String,
    start_coordinates: LatLng,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireCustomRankingInfo<'a> {
    importance_level: &'a str,
    ranking_expression: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct SearchResponse {
    matching_jobs: Vec<WireMatchingJob>,
    next_page_token: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct WireMatchingJob {
    job_summary: String,
    job_title_snippet: String,
    job: WireJob,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct WireJob {
    name: String,
    title: String,
}

impl From<WireMatchingJob> for MatchingJob {
    fn from(wire: WireMatchingJob) -> Self {
        Self {
            job_summary: wire.job_summary,
            job_title_snippet: wire.job_title_snippet,
            job: crate::domain::Job {
                name: wire.job.name,
                title: wire.job.title,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{CommuteFilter, CustomRankingInfo, JobQuery, RequestMetadata};

    fn request() -> SearchJobsRequest {
        SearchJobsRequest {
            project_id: "my-project".to_string(),
            tenant_id: "my-tenant".to_string(),
            metadata: RequestMetadata {
                domain: "www.example.com".to_string(),
                session_id: "sess-3fa9c1".to_string(),
                user_id: "usr-8b02de".to_string(),
            },
            query: JobQuery {
                commute_filter: CommuteFilter {
                    method: CommuteMethod::Transit,
                    travel_duration: Duration::from_secs(1800),
                    start_coordinates: LatLng {
                        latitude: 37.422408,
                        longitude: 122.084068,
                    },
                },
            },
            order_by: None,
            custom_ranking: None,
            max_page_size: None,
        }
    }

    #[test]
    fn body_matches_rest_shape() {
        let body =
            serde_json::to_value(GoogleTalentClient::body_for(&request(), None)).unwrap();

        assert_eq!(
            body.pointer("/requestMetadata/domain"),
            Some(&serde_json::json!("www.example.com"))
        );
        assert_eq!(
            body.pointer("/jobQuery/commuteFilter/commuteMethod"),
            Some(&serde_json::json!("TRANSIT"))
        );
        assert_eq!(
            body.pointer("/jobQuery/commuteFilter/travelDuration"),
            Some(&serde_json::json!("1800s"))
        );
        assert_eq!(
            body.pointer("/jobQuery/commuteFilter/startCoordinates/latitude"),
            Some(&serde_json::json!(37.422408))
        );
        assert!(body.pointer("/orderBy").is_none());
        assert!(body.pointer("/customRankingInfo").is_none());
        assert!(body.pointer("/pageToken").is_none());
    }

    #[test]
    fn body_carries_optional_fields_when_set() {
        let mut req = request();
        req.order_by = Some("posting_publish_time desc".to_string());
        req.custom_ranking = Some(CustomRankingInfo {
            importance_level: "HIGH".to_string(),
            ranking_expression: "(someFieldLong + 25) * 0.25".to_string(),
        });
        req.max_page_size = Some(50);

        let body =
            serde_json::to_value(GoogleTalentClient::body_for(&req, Some("tok-2"))).unwrap();

        assert_eq!(
            body.pointer("/orderBy"),
            Some(&serde_json::json!("posting_publish_time desc"))
        );
        assert_eq!(
            body.pointer("/customRankingInfo/importanceLevel"),
            Some(&serde_json::json!("HIGH"))
        );
        assert_eq!(body.pointer("/maxPageSize"), Some(&serde_json::json!(50)));
        assert_eq!(body.pointer("/pageToken"), Some(&serde_json::json!("tok-2")));
    }

    #[test]
    fn response_parses_jobs_and_token() {
        let wire: SearchResponse = serde_json::from_str(
            r#"{
                "matchingJobs": [
                    {
                        "jobSummary": "A job in Mountain View.",
                        "jobTitleSnippet": "Software <b>Engineer</b>",
                        "job": {
                            "name": "projects/p/tenants/t/jobs/1",
                            "title": "Software Engineer"
                        }
                    }
                ],
                "nextPageToken": "tok-2",
                "totalSize": 42
            }"#,
        )
        .unwrap();

        assert_eq!(wire.matching_jobs.len(), 1);
        let job: MatchingJob = wire.matching_jobs.into_iter().next().unwrap().into();
        assert_eq!(job.job.name, "projects/p/tenants/t/jobs/1");
        assert_eq!(job.job_summary, "A job in Mountain View.");
        assert_eq!(wire.next_page_token.as_deref(), Some("tok-2"));
    }

    #[test]
    fn response_tolerates_empty_body() {
        let wire: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(wire.matching_jobs.is_empty());
        assert!(wire.next_page_token.is_none());
    }
}
