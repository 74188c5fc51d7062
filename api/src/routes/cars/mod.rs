//! Car catalog route handlers
//!
//! Public catalog reads plus the admin-only fleet management endpoints,
//! including the batch image upload.

pub mod catalog;
pub mod manage;
pub mod upload_batch;

pub use catalog::{detail, list};
pub use manage::{create, delete, update};
pub use upload_batch::upload_batch;
