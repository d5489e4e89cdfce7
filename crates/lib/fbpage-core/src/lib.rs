//! Core services for fbpage-mcp.
//!
//! This crate owns the configuration snapshot, the Graph API transport seam,
//! and the control plane that turns each page operation into remote calls.

pub mod config;
pub mod control;
pub mod error;
pub mod graph;
pub mod sentiment;

pub use config::GraphConfig;
pub use control::PageControlPlane;
pub use error::GraphError;
