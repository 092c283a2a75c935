// Domain layer module exports
// Domain is independent of HTTP and storage concerns

pub mod repositories;
pub mod user;
