use tailorkit_core::Unit;
use tailorkit_drafting::{generate_with_defaults, DraftRequest, GarmentStyle, Measurements, PatternSet};

pub fn request(waist: f64, hips: f64, length: f64, unit: Unit, style: GarmentStyle) -> DraftRequest {
    DraftRequest::new(Measurements::new(waist, hips, length).unwrap(), unit, style)
}

pub fn draft(waist: f64, hips: f64, length: f64, unit: Unit, style: GarmentStyle) -> PatternSet {
    generate_with_defaults(&request(waist, hips, length, unit, style)).unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
