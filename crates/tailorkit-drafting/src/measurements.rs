//! Body measurements and drafting requests
//!
//! A [`DraftRequest`] bundles everything one generation needs. It is built
//! once, validated on construction and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tailorkit_core::{parse_length, DraftingError, Unit};

/// Waist, hips and length in a single unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurements")]
pub struct Measurements {
    waist: f64,
    hips: f64,
    length: f64,
}

#[derive(Deserialize)]
struct RawMeasurements {
    waist: f64,
    hips: f64,
    length: f64,
}

impl TryFrom<RawMeasurements> for Measurements {
    type Error = DraftingError;

    fn try_from(raw: RawMeasurements) -> Result<Self, Self::Error> {
        Measurements::new(raw.waist, raw.hips, raw.length)
    }
}

impl Measurements {
    /// Validates and creates a measurement set.
    ///
    /// Every value must be finite and strictly positive.
    pub fn new(waist: f64, hips: f64, length: f64) -> Result<Self, DraftingError> {
        for (name, value) in [("waist", waist), ("hips", hips), ("length", length)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DraftingError::invalid_measurement(name, value));
            }
        }
        Ok(Self {
            waist,
            hips,
            length,
        })
    }

    /// Parses typed measurements in `unit`, then validates them.
    ///
    /// Inches also accept fractions such as `31 1/2`.
    pub fn parse(
        waist: &str,
        hips: &str,
        length: &str,
        unit: Unit,
    ) -> Result<Self, DraftingError> {
        let read = |name: &str, text: &str| {
            parse_length(text, unit).map_err(|reason| DraftingError::MalformedMeasurement {
                name: name.to_string(),
                reason,
            })
        };
        Self::new(
            read("waist", waist)?,
            read("hips", hips)?,
            read("length", length)?,
        )
    }

    pub fn waist(&self) -> f64 {
        self.waist
    }

    pub fn hips(&self) -> f64 {
        self.hips
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

/// Garment block to draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentStyle {
    /// Front and back pants block
    #[default]
    Pants,
    /// Pants block with pocket, darts, waistband and pocket bag
    PantsWithExtras,
    /// Flared skirt block with a seam allowance cut line
    SkirtLike,
}

impl GarmentStyle {
    pub fn all() -> [GarmentStyle; 3] {
        [Self::Pants, Self::PantsWithExtras, Self::SkirtLike]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pants => "pants",
            Self::PantsWithExtras => "pants_with_extras",
            Self::SkirtLike => "skirt_like",
        }
    }

    /// Whether the block has a crotch seam
    pub fn is_pants(&self) -> bool {
        matches!(self, Self::Pants | Self::PantsWithExtras)
    }
}

impl fmt::Display for GarmentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GarmentStyle {
    type Err = DraftingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pants" => Ok(Self::Pants),
            "pants_with_extras" | "extras" => Ok(Self::PantsWithExtras),
            "skirt_like" | "skirt" => Ok(Self::SkirtLike),
            _ => Err(DraftingError::UnsupportedStyle(s.to_string())),
        }
    }
}

/// Immutable input to one pattern generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftRequest {
    pub measurements: Measurements,
    pub unit: Unit,
    pub style: GarmentStyle,
}

impl DraftRequest {
    pub fn new(measurements: Measurements, unit: Unit, style: GarmentStyle) -> Self {
        Self {
            measurements,
            unit,
            style,
        }
    }

    /// Builds a request from raw values and unit/style tokens.
    pub fn parse(
        waist: f64,
        hips: f64,
        length: f64,
        unit: &str,
        style: &str,
    ) -> Result<Self, DraftingError> {
        Ok(Self::new(
            Measurements::new(waist, hips, length)?,
            unit.parse()?,
            style.parse()?,
        ))
    }
}
