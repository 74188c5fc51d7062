//! Car catalog service
//!
//! Public catalog reads plus the admin-only fleet management operations:
//! create, update, delete, and batch image attachment. Every save enforces
//! the catalog invariants (closed category list, seat and price bounds, and
//! at least one image reference per car).

mod service;

#[cfg(test)]
mod tests;

pub use service::{CatalogService, ImageAttachment, ImageAttachmentResult, NewCar, UpdateCar};
