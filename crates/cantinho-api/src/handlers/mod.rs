//! Route handlers, grouped by surface.

pub mod auth;
pub mod health;
pub mod memories;
pub mod resources;
