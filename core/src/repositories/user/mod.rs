mod repository;

pub use repository::UserRepository;

pub mod mock;
pub use mock::MockUserRepository;

#[cfg(test)]
mod tests;
