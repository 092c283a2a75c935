// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
