//! Analytics route handlers
//!
//! Reporting endpoints over the rental, car, and review data. Fleet-wide
//! reports are admin only, per-user reports are admin-or-self, and the
//! category summary is public. Analytics responses carry `data` without a
//! `count`, unlike the resource listings.

pub mod cars;
pub mod categories;
pub mod rentals;
pub mod users;

pub use cars::{car_availability, car_performance};
pub use categories::categories;
pub use rentals::rental_statistics;
pub use users::{user_history, user_reviews};
