//! Application configuration management
//!
//! This module handles the user configuration file. CLI arguments live in
//! `core::cli` and take priority over anything loaded here.

pub mod user_config;

pub use user_config::{ConfigFile, APP_DIR_NAME};
