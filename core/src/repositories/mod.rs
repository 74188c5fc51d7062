//! Repository traits abstracting persistence from the domain layer.
//!
//! Concrete MySQL implementations live in the infrastructure crate. The
//! in-memory mocks live next to each trait and are exported for use by
//! service tests here and the HTTP integration tests in the API crate.

pub mod analytics;
pub mod car;
pub mod rental;
pub mod review;
pub mod user;

pub use analytics::AnalyticsRepository;
pub use car::CarRepository;
pub use rental::RentalRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;

pub use analytics::MockAnalyticsRepository;
pub use car::MockCarRepository;
pub use rental::MockRentalRepository;
pub use review::MockReviewRepository;
pub use user::MockUserRepository;
