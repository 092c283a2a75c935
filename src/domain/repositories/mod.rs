// Repository abstractions (ports) owned by the domain layer
// Implementations live in the infrastructure layer

pub mod user_repository;

pub use user_repository::{FilterCriteria, StoreError, StoreResult, UserRepository};
