//! TailorKit Settings Crate
//!
//! Handles drafting defaults, export options and constant-table overrides,
//! stored as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, ConfigFormat, DraftingSettings, ExportSettings};
pub use error::{SettingsError, SettingsResult};
