//! # cantinho-core
//!
//! Core types, traits, and abstractions for the Cantinho backend.
//!
//! This crate provides the account and resource models and the
//! [`DocumentStore`] seam that the database layer implements.

pub mod data_uri;
pub mod defaults;
pub mod error;
pub mod ids;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use data_uri::Attachment;
pub use error::{Error, Result};
pub use ids::{SequentialIds, UuidIds};
pub use models::*;
pub use traits::*;
