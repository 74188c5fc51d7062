//! Domain entities representing core business objects.

pub mod car;
pub mod rental;
pub mod review;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use car::{Car, CarStatus, CAR_CATEGORIES, MAX_SEATS, MIN_SEATS};
pub use rental::{Rental, MAX_ADDITIONAL_DRIVERS};
pub use review::{Review, MAX_RATING, MIN_COMMENT_LENGTH, MIN_RATING};
pub use token::{Claims, JWT_AUDIENCE, JWT_ISSUER, TOKEN_EXPIRY_HOURS};
pub use user::{Role, User, ADMIN_USER_ID};
