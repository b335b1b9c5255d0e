use std::collections::VecDeque;

use async_trait::async_trait;

use crate::domain::{MatchingJob, SearchJobsRequest};
use crate::error::Result;

#[async_trait]
pub trait JobSearchClient: Send + Sync {
    /// Fetches one page of results. `page_token` is `None` for the first
    /// page and the token from the previous page afterwards.
    async fn search_page(
        &self,
        request: &SearchJobsRequest,
        page_token: Option<&str>,
    ) -> Result<SearchPage>;
}

#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub jobs: Vec<MatchingJob>,
    pub next_page_token: Option<String>,
}

/// Pull cursor over the server-paginated result set.
///
/// Forward-only, single-pass, finite. Each advance may block on a
/// further page fetch; once `next` returns `Ok(None)` the stream is
/// exhausted and cannot be restarted.
pub struct JobStream<'a, C: JobSearchClient + ?Sized> {
    client: &'a C,
    request: &'a SearchJobsRequest,
    buffer: VecDeque<MatchingJob>,
    next_token: Option<String>,
    started: bool,
}

impl<'a, C: JobSearchClient + ?Sized> JobStream<'a, C> {
    pub fn new(client: &'a C, request: &'a SearchJobsRequest) -> Self {
        Self {
            client,
            request,
            buffer: VecDeque::new(),
            next_token: None,
            started: false,
        }
    }

    pub async fn next(&mut self) -> Result<Option<MatchingJob>> {
        loop {
            if let Some(job) = self.buffer.pop_front() {
                return Ok(Some(job));
            }
            if self.started && self.next_token.is_none() {
                return Ok(None);
            }
            let page = self
                .client
                .search_page(self.request, self.next_token.as_deref())
                .await?;
            self.started = true;
            self.next_token = page.next_page_token.filter(|token| !token.is_empty());
            self.buffer.extend(page.jobs);
        }
    }
}
