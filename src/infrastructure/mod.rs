// Infrastructure layer module
// Contains the storage adapters behind the domain repository interfaces
// Follows Hexagonal Architecture

pub mod repositories;
