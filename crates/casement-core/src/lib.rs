//! Casement Core
//!
//! This crate contains the ambient functionality shared by the Casement crates:
//! logging bootstrap, profiling hooks, geometry primitives and configuration.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod profiling;

pub use config::{Config, ProfilingMode};
pub use geometry::Size;
