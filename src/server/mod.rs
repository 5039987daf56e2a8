//! Server module for building the dashboard HTTP server
//!
//! `ServerBuilder` assembles a `DashboardHost` and exposes it over REST:
//! - Record filtering and lookup
//! - Table sorting and statistics
//! - Chat relay and subject report links

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::DashboardHost;
