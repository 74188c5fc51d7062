mod repository;

pub use repository::{ReviewFilter, ReviewRepository};

pub mod mock;
pub use mock::MockReviewRepository;
