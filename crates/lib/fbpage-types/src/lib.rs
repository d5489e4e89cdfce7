//! Payload models and Graph field constants for fbpage-mcp.
//!
//! This crate defines the request and result shapes shared by the forwarding
//! layer and both caller-facing surfaces.

pub mod metrics;
pub mod models;
pub mod schema;

pub use metrics::{Metric, Reaction};
pub use models::*;
