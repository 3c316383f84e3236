pub mod resolver_service;
pub mod submission_service;

pub use resolver_service::NearbyMosqueResolver;
pub use submission_service::SubmissionService;
