pub mod dlp;
pub mod talent;

pub use dlp::ReidentifyClient;
pub use talent::{JobSearchClient, JobStream, SearchPage};
