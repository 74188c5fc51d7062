//! Reporting and analytics service
//!
//! Thin access-control and parameter-validation layer over the reporting
//! queries. The aggregations themselves run in the repository; this service
//! decides who may ask and turns raw date strings into validated windows.

mod service;

#[cfg(test)]
mod tests;

pub use service::AnalyticsService;
