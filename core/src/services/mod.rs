//! Business services containing domain logic and use cases.

pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod rental;
pub mod review;
pub mod token;

// Re-export commonly used types
pub use analytics::AnalyticsService;
pub use auth::{AuthService, AuthServiceConfig};
pub use catalog::{CatalogService, ImageAttachment, ImageAttachmentResult, NewCar, UpdateCar};
pub use rental::{BookingRequest, RentalService, ValidBooking};
pub use review::{NewReview, ReviewService, ReviewUpdate};
pub use token::{IssuedToken, TokenService, TokenServiceConfig};
