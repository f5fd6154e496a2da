//! Configuration module for SmartSave
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User preference persistence

pub mod paths;
pub mod settings;

pub use paths::SmartSavePaths;
pub use settings::Settings;
