//! Core application functionality
//!
//! This module contains the inspector binary's plumbing:
//! - CLI handling
//! - User configuration
//! - Error reporting
//! - The runner that paints a requested part

pub mod cli;
pub mod config;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::{CliArgs, PaintRequest};
pub use config::ConfigFile;
pub use runner::{paint, run_app};
