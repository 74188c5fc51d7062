//! Type definitions module with domain-specific sub-modules
//!
//! This module organizes types into logical categories:
//! - `range` - Calendar date ranges and the booking overlap test
//! - `response` - The standard API response envelope

pub mod range;
pub mod response;

// Re-export commonly used types at module level
pub use range::DateRange;
pub use response::ApiResponse;
