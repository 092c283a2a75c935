//! User Directory API Library
//!
//! This library provides the core functionality for the user directory API,
//! including domain logic, repositories, and infrastructure components.

pub mod api;
pub mod domain;
pub mod infrastructure;
