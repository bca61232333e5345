//! Unit-keyed drafting constants
//!
//! Every literal the drafting formulas need (eases, dart sizes, pocket
//! dimensions, layout gaps, fabric widths) lives in one [`UnitConstants`]
//! record per unit. A [`ConstantTable`] holds both records and is injected
//! into the assembler once; the unit flag of a request is the only thing
//! that selects between them.

use serde::{Deserialize, Serialize};
use tailorkit_core::{DraftingError, Unit};

/// Constants for the basic front/back pants block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantsConstants {
    /// Horizontal reach of the front crotch point past the centre front
    pub front_crotch_extension: f64,
    /// Subtracted from the quarter hip to get the hem width
    pub hem_reduction: f64,
    /// Gap between the front and back pieces in the layout
    pub piece_gap: f64,
    /// How far the centre back waist rises above the front waist line
    pub back_rise: f64,
    /// Extra width on the back side seam
    pub back_side_ease: f64,
}

/// Constants for the production pants variant (darts, pocket, extras)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtrasConstants {
    /// Taken from the front quarter hip and added to the back
    pub hip_ease: f64,
    pub front_dart_width: f64,
    pub back_dart_width: f64,
    pub front_dart_length: f64,
    pub back_dart_length: f64,
    /// Pocket opening distance from the side seam along the waist
    pub pocket_inset: f64,
    /// Pocket opening distance down the side seam
    pub pocket_depth: f64,
    /// Added to the waist measurement for the waistband length
    pub waistband_ease: f64,
    pub waistband_height: f64,
    /// Layout gap between the hem line and the waistband
    pub waistband_gap: f64,
    /// Layout gap between the front side seam and the pocket bag
    pub pocket_bag_gap: f64,
    /// Pocket bag top edge distance below the waist line
    pub pocket_bag_drop: f64,
    pub pocket_bag_width: f64,
    pub pocket_bag_height: f64,
}

/// Constants for the flared skirt-style block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkirtConstants {
    /// Distance from waist down to the hip line
    pub hip_depth: f64,
    /// Extra width at the hem beyond the quarter hip
    pub hem_flare: f64,
    /// Offset between the sew line and the cut line
    pub seam_allowance: f64,
}

/// Constants for fabric estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricConstants {
    /// Standard bolt width
    pub fabric_width: f64,
    /// Added to twice the length for pants (waistband, pockets)
    pub pants_allowance: f64,
    /// Added to the length for skirts, and to the hips for the width check
    pub skirt_allowance: f64,
}

/// All constants for one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConstants {
    pub pants: PantsConstants,
    pub extras: ExtrasConstants,
    pub skirt: SkirtConstants,
    pub fabric: FabricConstants,
}

impl UnitConstants {
    /// Centimeter table
    pub fn metric() -> Self {
        Self {
            pants: PantsConstants {
                front_crotch_extension: 4.0,
                hem_reduction: 2.0,
                piece_gap: 15.0,
                back_rise: 2.0,
                back_side_ease: 1.0,
            },
            extras: ExtrasConstants {
                hip_ease: 1.0,
                front_dart_width: 2.0,
                back_dart_width: 3.0,
                front_dart_length: 8.0,
                back_dart_length: 10.0,
                pocket_inset: 4.0,
                pocket_depth: 14.0,
                waistband_ease: 5.0,
                waistband_height: 4.0,
                waistband_gap: 10.0,
                pocket_bag_gap: 10.0,
                pocket_bag_drop: 5.0,
                pocket_bag_width: 16.0,
                pocket_bag_height: 28.0,
            },
            skirt: SkirtConstants {
                hip_depth: 20.0,
                hem_flare: 5.0,
                seam_allowance: 1.0,
            },
            fabric: FabricConstants {
                fabric_width: 140.0,
                pants_allowance: 20.0,
                skirt_allowance: 10.0,
            },
        }
    }

    /// Inch table
    pub fn imperial() -> Self {
        Self {
            pants: PantsConstants {
                front_crotch_extension: 1.5,
                hem_reduction: 1.0,
                piece_gap: 6.0,
                back_rise: 1.0,
                back_side_ease: 1.0,
            },
            extras: ExtrasConstants {
                hip_ease: 0.5,
                front_dart_width: 0.75,
                back_dart_width: 1.25,
                front_dart_length: 3.5,
                back_dart_length: 4.0,
                pocket_inset: 1.5,
                pocket_depth: 5.5,
                waistband_ease: 5.0,
                waistband_height: 1.5,
                waistband_gap: 4.0,
                pocket_bag_gap: 4.0,
                pocket_bag_drop: 5.0,
                pocket_bag_width: 7.0,
                pocket_bag_height: 11.0,
            },
            skirt: SkirtConstants {
                hip_depth: 8.0,
                hem_flare: 2.0,
                seam_allowance: 0.5,
            },
            fabric: FabricConstants {
                fabric_width: 58.0,
                pants_allowance: 8.0,
                skirt_allowance: 4.0,
            },
        }
    }

    /// Rejects negative or non-finite entries, and zero where a size is required
    pub fn validate(&self, label: &str) -> Result<(), DraftingError> {
        let sizes = [
            ("pants.front_crotch_extension", self.pants.front_crotch_extension),
            ("extras.front_dart_width", self.extras.front_dart_width),
            ("extras.back_dart_width", self.extras.back_dart_width),
            ("extras.front_dart_length", self.extras.front_dart_length),
            ("extras.back_dart_length", self.extras.back_dart_length),
            ("extras.pocket_depth", self.extras.pocket_depth),
            ("extras.waistband_height", self.extras.waistband_height),
            ("extras.pocket_bag_width", self.extras.pocket_bag_width),
            ("extras.pocket_bag_height", self.extras.pocket_bag_height),
            ("skirt.hip_depth", self.skirt.hip_depth),
            ("skirt.seam_allowance", self.skirt.seam_allowance),
            ("fabric.fabric_width", self.fabric.fabric_width),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(DraftingError::InvalidProportions(format!(
                    "constant {}.{} must be positive, got {}",
                    label, name, value
                )));
            }
        }

        let offsets = [
            ("pants.hem_reduction", self.pants.hem_reduction),
            ("pants.piece_gap", self.pants.piece_gap),
            ("pants.back_rise", self.pants.back_rise),
            ("pants.back_side_ease", self.pants.back_side_ease),
            ("extras.hip_ease", self.extras.hip_ease),
            ("extras.pocket_inset", self.extras.pocket_inset),
            ("extras.waistband_ease", self.extras.waistband_ease),
            ("extras.waistband_gap", self.extras.waistband_gap),
            ("extras.pocket_bag_gap", self.extras.pocket_bag_gap),
            ("extras.pocket_bag_drop", self.extras.pocket_bag_drop),
            ("skirt.hem_flare", self.skirt.hem_flare),
            ("fabric.pants_allowance", self.fabric.pants_allowance),
            ("fabric.skirt_allowance", self.fabric.skirt_allowance),
        ];
        for (name, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(DraftingError::InvalidProportions(format!(
                    "constant {}.{} must be zero or positive, got {}",
                    label, name, value
                )));
            }
        }

        Ok(())
    }
}

/// Constant records for both units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantTable {
    #[serde(default = "UnitConstants::metric")]
    pub cm: UnitConstants,
    #[serde(default = "UnitConstants::imperial")]
    pub inch: UnitConstants,
}

impl Default for ConstantTable {
    fn default() -> Self {
        Self {
            cm: UnitConstants::metric(),
            inch: UnitConstants::imperial(),
        }
    }
}

impl ConstantTable {
    /// The record for `unit`
    pub fn for_unit(&self, unit: Unit) -> &UnitConstants {
        match unit {
            Unit::Centimeters => &self.cm,
            Unit::Inches => &self.inch,
        }
    }

    /// Validates both records
    pub fn validate(&self) -> Result<(), DraftingError> {
        self.cm.validate("cm")?;
        self.inch.validate("inch")
    }
}
