//! HTTP info and health-check service.
//!
//! Reports host/system metadata, process uptime, and per-request metadata,
//! and exposes a liveness endpoint for orchestration probes. Every request is
//! answered from freshly computed snapshots; the only long-lived state is the
//! start timestamp captured at process initialization.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Error types and the JSON error envelope
//! - [`host`]: Host introspection behind the [`host::HostInfoProvider`] trait
//! - [`runtime`]: Uptime and wall-clock snapshot computation
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod host;
pub mod runtime;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
