// User domain module
// Record type, closed role/status enums, and the write-validation rules

#![allow(clippy::module_inception)]

pub mod user;
pub mod validation;
pub mod value_objects;

// Re-export main types for convenience
pub use user::{User, UserDraft, UserPatch};
pub use validation::{validate, UserPayload, Violation};
pub use value_objects::{Role, Status};
