//! Fabric yardage estimate
//!
//! Pants take two lengths of fabric plus an allowance for the waistband
//! and pocket pieces. A skirt takes one length plus hem and waist
//! allowance, doubled when the hips do not fit across a single bolt width.

use serde::{Deserialize, Serialize};
use std::fmt;
use tailorkit_core::{DraftingError, FabricUnit, Unit};

use crate::constants::ConstantTable;
use crate::measurements::GarmentStyle;
use crate::pieces::PatternSet;

/// How the skirt is laid out on the fabric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FabricLayout {
    SingleWidth,
    DoubleWidth,
}

impl fmt::Display for FabricLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleWidth => write!(f, "Single Width"),
            Self::DoubleWidth => write!(f, "Double Width"),
        }
    }
}

/// Amount of fabric to buy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FabricEstimate {
    /// Quantity in `unit`
    pub amount: f64,
    pub unit: FabricUnit,
    /// Only reported for skirts
    pub layout: Option<FabricLayout>,
    /// Bolt width assumed, in the measurement unit
    pub fabric_width: f64,
}

impl fmt::Display for FabricEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.unit)?;
        if let Some(layout) = self.layout {
            write!(f, " ({})", layout)?;
        }
        Ok(())
    }
}

/// Estimates the fabric needed for `style`.
///
/// `length` and `hips` are in `unit` and must be positive and finite.
pub fn estimate_fabric(
    style: GarmentStyle,
    length: f64,
    hips: f64,
    unit: Unit,
    table: &ConstantTable,
) -> Result<FabricEstimate, DraftingError> {
    for (name, value) in [("length", length), ("hips", hips)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(DraftingError::invalid_measurement(name, value));
        }
    }

    Ok(estimate_unchecked(style, length, hips, unit, table))
}

/// Estimates the fabric for an already generated pattern.
pub fn estimate_for(set: &PatternSet, table: &ConstantTable) -> FabricEstimate {
    let request = &set.request;
    let m = request.measurements;
    estimate_unchecked(request.style, m.length(), m.hips(), request.unit, table)
}

fn estimate_unchecked(
    style: GarmentStyle,
    length: f64,
    hips: f64,
    unit: Unit,
    table: &ConstantTable,
) -> FabricEstimate {
    let k = &table.for_unit(unit).fabric;
    let fabric_unit = unit.fabric_unit();

    let (needed, layout) = if style.is_pants() {
        (length * 2.0 + k.pants_allowance, None)
    } else {
        let single = length + k.skirt_allowance;
        if hips + k.skirt_allowance < k.fabric_width {
            (single, Some(FabricLayout::SingleWidth))
        } else {
            (single * 2.0, Some(FabricLayout::DoubleWidth))
        }
    };

    FabricEstimate {
        amount: needed / fabric_unit.units_per(),
        unit: fabric_unit,
        layout,
        fabric_width: k.fabric_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(style: GarmentStyle, length: f64, hips: f64, unit: Unit) -> FabricEstimate {
        estimate_fabric(style, length, hips, unit, &ConstantTable::default()).unwrap()
    }

    #[test]
    fn test_pants_metric() {
        let e = estimate(GarmentStyle::PantsWithExtras, 100.0, 100.0, Unit::Centimeters);
        assert!((e.amount - 2.2).abs() < 1e-12);
        assert_eq!(e.to_string(), "2.20 Meters");
        assert_eq!(e.layout, None);
    }

    #[test]
    fn test_pants_imperial() {
        let e = estimate(GarmentStyle::Pants, 41.0, 40.0, Unit::Inches);
        // (82 + 8) / 36
        assert_eq!(e.to_string(), "2.50 Yards");
    }

    #[test]
    fn test_skirt_single_width() {
        let e = estimate(GarmentStyle::SkirtLike, 60.0, 98.0, Unit::Centimeters);
        assert_eq!(e.to_string(), "0.70 Meters (Single Width)");
    }

    #[test]
    fn test_skirt_double_width() {
        let e = estimate(GarmentStyle::SkirtLike, 60.0, 130.0, Unit::Centimeters);
        assert_eq!(e.layout, Some(FabricLayout::DoubleWidth));
        assert_eq!(e.to_string(), "1.40 Meters (Double Width)");

        // 56 + 4 is not below a 58 inch bolt
        let e = estimate(GarmentStyle::SkirtLike, 41.0, 56.0, Unit::Inches);
        assert_eq!(e.to_string(), "2.50 Yards (Double Width)");
    }

    #[test]
    fn test_rejects_bad_input() {
        let table = ConstantTable::default();
        assert!(estimate_fabric(GarmentStyle::Pants, 0.0, 100.0, Unit::Centimeters, &table).is_err());
        assert!(
            estimate_fabric(GarmentStyle::Pants, 100.0, f64::NAN, Unit::Centimeters, &table).is_err()
        );
    }
}
