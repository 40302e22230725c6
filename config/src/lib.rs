//! Deployment configuration for the movie review program.

pub mod constants;
pub mod env;

pub use env::{Environment, NetworkConfig};
