pub mod commute;
pub mod id;
pub mod reidentify;

pub use commute::{
    CommuteFilter, CommuteMethod, CustomRankingInfo, Job, JobQuery, LatLng, MatchingJob,
    RequestMetadata, SearchJobsRequest,
};
pub use reidentify::{FfxAlphabet, ReidentifiedContent, ReidentifyRequest};
