//! Unit handling
//!
//! Patterns are drafted in either centimeters or inches. The unit never
//! converts measurements; it only selects which constant table applies
//! and how lengths are labelled. Supports decimal and fractional inch
//! parsing for measurement input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DraftingError;

/// Measurement unit for a drafting request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeters,
    /// Inches
    #[serde(rename = "inch")]
    Inches,
}

impl Default for Unit {
    fn default() -> Self {
        Self::Centimeters
    }
}

impl Unit {
    /// Short label used next to lengths ("cm" or "inch")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "inch",
        }
    }

    /// Unit that fabric is sold in for this measurement system
    pub fn fabric_unit(&self) -> FabricUnit {
        match self {
            Self::Centimeters => FabricUnit::Meters,
            Self::Inches => FabricUnit::Yards,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Unit {
    type Err = DraftingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeters),
            "inch" | "inches" | "in" => Ok(Self::Inches),
            _ => Err(DraftingError::UnsupportedUnit(s.to_string())),
        }
    }
}

/// Unit fabric quantities are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FabricUnit {
    /// Meters (metric)
    Meters,
    /// Yards (imperial)
    Yards,
}

impl FabricUnit {
    /// Number of measurement units in one fabric unit (100 cm, 36 in)
    pub fn units_per(&self) -> f64 {
        match self {
            Self::Meters => 100.0,
            Self::Yards => 36.0,
        }
    }
}

impl fmt::Display for FabricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meters => write!(f, "Meters"),
            Self::Yards => write!(f, "Yards"),
        }
    }
}

/// Format length value for display
///
/// * `value` - Length in `unit`
/// * `unit` - Unit the value is expressed in
pub fn format_length(value: f64, unit: Unit) -> String {
    format!("{:.1} {}", value, unit.label())
}

/// Format a seam allowance the way it is written on a pattern
///
/// Inches are shown as eighths reduced to lowest terms ("1/2", "1 1/4");
/// values off the eighth grid and centimeters print as plain numbers.
pub fn format_allowance(value: f64, unit: Unit) -> String {
    let eighths = (value * 8.0).round();
    if unit == Unit::Centimeters || eighths <= 0.0 || (value * 8.0 - eighths).abs() > 1e-9 {
        return value.to_string();
    }

    let eighths = eighths as u64;
    let whole = eighths / 8;
    let mut num = eighths % 8;
    let mut den = 8;
    while num != 0 && num % 2 == 0 {
        num /= 2;
        den /= 2;
    }

    match (whole, num) {
        (w, 0) => w.to_string(),
        (0, n) => format!("{}/{}", n, den),
        (w, n) => format!("{} {}/{}", w, n, den),
    }
}

/// Parse a measurement string
///
/// * `input` - String to parse
/// * `unit` - Assumed unit; inches additionally accept fractions ("31 1/2")
pub fn parse_length(input: &str, unit: Unit) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty measurement".to_string());
    }

    match unit {
        Unit::Centimeters => input.parse::<f64>().map_err(|e| e.to_string()),
        Unit::Inches => {
            if !input.contains('/') {
                return input.parse::<f64>().map_err(|e| e.to_string());
            }

            let mut total = 0.0;
            for part in input.split_whitespace() {
                if part.contains('/') {
                    let frac_parts: Vec<&str> = part.split('/').collect();
                    if frac_parts.len() != 2 {
                        return Err("Invalid fraction format".to_string());
                    }
                    let num = frac_parts[0]
                        .parse::<f64>()
                        .map_err(|_| "Invalid numerator")?;
                    let den = frac_parts[1]
                        .parse::<f64>()
                        .map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total += num / den;
                } else {
                    total += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }
            Ok(total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("cm".parse::<Unit>().unwrap(), Unit::Centimeters);
        assert_eq!("Centimeters".parse::<Unit>().unwrap(), Unit::Centimeters);
        assert_eq!("inch".parse::<Unit>().unwrap(), Unit::Inches);
        assert_eq!(" inches ".parse::<Unit>().unwrap(), Unit::Inches);
        assert_eq!("in".parse::<Unit>().unwrap(), Unit::Inches);
    }

    #[test]
    fn test_unsupported_unit() {
        let err = "mm".parse::<Unit>().unwrap_err();
        assert_eq!(err, DraftingError::UnsupportedUnit("mm".to_string()));
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(Unit::Centimeters.to_string(), "cm");
        assert_eq!(Unit::Inches.to_string(), "inch");
        assert_eq!(Unit::Centimeters.fabric_unit(), FabricUnit::Meters);
        assert_eq!(Unit::Inches.fabric_unit(), FabricUnit::Yards);
        assert_eq!(FabricUnit::Yards.units_per(), 36.0);
    }

    #[test]
    fn test_unit_serde_tokens() {
        assert_eq!(serde_json::to_string(&Unit::Centimeters).unwrap(), "\"cm\"");
        assert_eq!(
            serde_json::from_str::<Unit>("\"inch\"").unwrap(),
            Unit::Inches
        );
    }

    #[test]
    fn test_format_allowance() {
        assert_eq!(format_allowance(0.5, Unit::Inches), "1/2");
        assert_eq!(format_allowance(0.625, Unit::Inches), "5/8");
        assert_eq!(format_allowance(1.25, Unit::Inches), "1 1/4");
        assert_eq!(format_allowance(2.0, Unit::Inches), "2");
        assert_eq!(format_allowance(0.3, Unit::Inches), "0.3");
        assert_eq!(format_allowance(1.0, Unit::Centimeters), "1");
        assert_eq!(format_allowance(1.5, Unit::Centimeters), "1.5");
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(85.0, Unit::Centimeters), "85.0 cm");
        assert_eq!(format_length(35.5, Unit::Inches), "35.5 inch");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_length("80", Unit::Centimeters).unwrap(), 80.0);
        assert_eq!(parse_length("  31.5 ", Unit::Inches).unwrap(), 31.5);
    }

    #[test]
    fn test_parse_inch_fraction() {
        assert_eq!(parse_length("31 1/2", Unit::Inches).unwrap(), 31.5);
        assert_eq!(parse_length("1/4", Unit::Inches).unwrap(), 0.25);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_length("", Unit::Centimeters).is_err());
        assert!(parse_length("abc", Unit::Centimeters).is_err());
        assert!(parse_length("1/0", Unit::Inches).is_err());
        assert!(parse_length("1/2/3", Unit::Inches).is_err());
        // fractions are an imperial convenience only
        assert!(parse_length("1/2", Unit::Centimeters).is_err());
    }
}
