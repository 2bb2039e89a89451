//! # Blog Core
//!
//! The domain layer of the blog service: the post entity, its errors, and the
//! store port. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
