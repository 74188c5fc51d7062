mod repository;

pub use repository::AnalyticsRepository;

pub mod mock;
pub use mock::MockAnalyticsRepository;

#[cfg(test)]
mod tests;
