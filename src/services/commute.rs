use std::sync::Arc;
use std::time::Duration;

use crate::config::SearchTuning;
use crate::domain::{
    CommuteFilter, CommuteMethod, JobQuery, LatLng, MatchingJob, RequestMetadata,
    SearchJobsRequest,
};
use crate::error::Result;
use crate::ports::{JobSearchClient, JobStream};

// Commute budget the sample searches within: half an hour by public
// transit from the Mountain View campus.
const COMMUTE_METHOD: CommuteMethod = CommuteMethod::Transit;
const TRAVEL_DURATION: Duration = Duration::from_secs(1800);
const START_COORDINATES: LatLng = LatLng {
    latitude: 37.422408,
    longitude: 122.084068,
};

/// Maps the loaded arguments plus the fixed commute constants onto a
/// request record. Pure; never fails.
pub fn build_request(
    project_id: String,
    tenant_id: String,
    metadata: RequestMetadata,
    tuning: &SearchTuning,
) -> SearchJobsRequest {
    SearchJobsRequest {
        project_id,
        tenant_id,
        metadata,
        query: JobQuery {
            commute_filter: CommuteFilter {
                method: COMMUTE_METHOD,
                travel_duration: TRAVEL_DURATION,
                start_coordinates: START_COORDINATES,
            },
        },
        order_by: tuning.order_by.clone(),
        custom_ranking: tuning.custom_ranking.clone(),
        max_page_size: tuning.max_page_size,
    }
}

/// One line per documented field, in documented order.
pub fn render_job(job: &MatchingJob) -> [String; 4] {
    [
        format!("Job summary: {}", job.job_summary),
        format!("Job title snippet: {}", job.job_title_snippet),
        format!("Job name: {}", job.job.name),
        format!("Job title: {}", job.job.title),
    ]
}

pub struct CommuteSearchService<C: JobSearchClient> {
    client: Arc<C>,
}

impl<C: JobSearchClient> CommuteSearchService<C> {
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Lazy, forward-only iteration over every matching job.
    pub fn stream<'a>(&'a self, request: &'a SearchJobsRequest) -> JobStream<'a, C> {
        tracing::info!(parent = %request.parent(), "searching jobs by commute");
        JobStream::new(self.client.as_ref(), request)
    }

    /// Drains the stream; used for machine-readable output.
    pub async fn collect(&self, request: &SearchJobsRequest) -> Result<Vec<MatchingJob>> {
        let mut stream = self.stream(request);
        let mut jobs = Vec::new();
        while let Some(job) = stream.next().await? {
            jobs.push(job);
        }
        Ok(jobs)
    }
}
