pub mod commute;
pub mod reidentify;

pub use commute::CommuteSearchService;
pub use reidentify::ReidentifyService;
