mod repository;

pub use repository::CarRepository;

pub mod mock;
pub use mock::MockCarRepository;
