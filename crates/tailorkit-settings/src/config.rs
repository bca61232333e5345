//! Configuration management
//!
//! Stores drafting defaults, export options and the constant table the
//! assembler drafts with. Files are JSON or TOML, chosen by extension.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tailorkit_core::{Unit, MAX_RESOLUTION};
use tailorkit_drafting::{
    ConstantTable, DraftRequest, ExportFormat, GarmentStyle, Measurements, PatternAssembler,
    RenderOptions, MAX_CANVAS_SIDE,
};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// Defaults applied to every drafting request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftingSettings {
    pub unit: Unit,
    pub style: GarmentStyle,
    /// Points sampled per Bezier curve
    pub resolution: usize,
    /// Used in exported file names
    pub client_name: String,
}

impl Default for DraftingSettings {
    fn default() -> Self {
        Self {
            unit: Unit::Centimeters,
            style: GarmentStyle::Pants,
            resolution: tailorkit_core::DEFAULT_RESOLUTION,
            client_name: "client".to_string(),
        }
    }
}

/// Where and how documents are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportSettings {
    pub format: ExportFormat,
    /// Current directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub render: RenderOptions,
}

impl ExportSettings {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub drafting: DraftingSettings,
    pub export: ExportSettings,
    pub constants: ConstantTable,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Loads `path`, or the defaults when the file does not exist yet.
    ///
    /// A path that cannot be inspected is an I/O error, not a missing file.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.try_exists()? {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let resolution = self.drafting.resolution;
        if !(1..=MAX_RESOLUTION).contains(&resolution) {
            return Err(SettingsError::invalid(
                "drafting.resolution",
                format!("{} must be between 1 and {}", resolution, MAX_RESOLUTION),
            ));
        }

        let render = &self.export.render;
        let sides = 1..=MAX_CANVAS_SIDE;
        if !sides.contains(&render.width) || !sides.contains(&render.height) {
            return Err(SettingsError::invalid(
                "export.render",
                format!(
                    "image size {}x{} must be between 1 and {} per side",
                    render.width, render.height, MAX_CANVAS_SIDE
                ),
            ));
        }
        if !(0.0..0.5).contains(&render.padding) {
            return Err(SettingsError::invalid(
                "export.render.padding",
                format!("{} must be in [0, 0.5)", render.padding),
            ));
        }

        self.constants.validate()?;
        Ok(())
    }

    /// An assembler drafting with this config's constants and resolution
    pub fn assembler(&self) -> PatternAssembler {
        PatternAssembler::new(self.constants.clone()).with_resolution(self.drafting.resolution)
    }

    /// A request using the configured unit and style
    pub fn request(&self, measurements: Measurements) -> DraftRequest {
        DraftRequest::new(measurements, self.drafting.unit, self.drafting.style)
    }
}

/// `<platform config dir>/tailorkit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))?;
    path.push("tailorkit");
    path.push("config.toml");
    Ok(path)
}
