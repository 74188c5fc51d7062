mod repository;

pub use repository::RentalRepository;

pub mod mock;
pub use mock::MockRentalRepository;
