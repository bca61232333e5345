use crate::common::{approx, draft, request};
use tailorkit_core::{DraftingError, Point, Unit};
use tailorkit_drafting::{generate_with_defaults, Anchor, GarmentStyle, PieceKind};

#[test]
fn test_reference_front_piece() {
    let set = draft(80.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::Pants);
    assert_eq!(set.piece_names(), vec!["front", "back"]);

    let front = set.get(PieceKind::Front).unwrap();
    assert_eq!(front.local_anchor(Anchor::HemInner), Some(Point::new(0.0, 0.0)));
    assert_eq!(front.local_anchor(Anchor::WaistCenter).unwrap().y, 105.0);

    let waist_y = front.anchor(Anchor::WaistCenter).unwrap().y;
    let crotch_y = front.anchor(Anchor::CrotchTip).unwrap().y;
    assert!(approx(waist_y - crotch_y, 25.0));
    assert_eq!(set.derived.crotch_depth, Some(25.0));
    assert_eq!(set.derived.quarter_waist, 20.0);
    assert_eq!(set.derived.quarter_hip, 25.0);

    assert_eq!(front.anchor(Anchor::CrotchTip), Some(Point::new(-4.0, 80.0)));
    assert_eq!(front.anchor(Anchor::HemOuter), Some(Point::new(23.0, 0.0)));
}

#[test]
fn test_front_outline_order() {
    let set = draft(80.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::Pants);
    let front = set.get(PieceKind::Front).unwrap();
    let points = front.polygon.points();

    // rise (21) + hem inner + hem outer + hip curve (21) + closing point
    assert_eq!(points.len(), 45);
    assert_eq!(points[0], Point::new(0.0, 105.0));
    assert_eq!(points[20], Point::new(-4.0, 80.0));
    assert_eq!(points[21], Point::new(0.0, 0.0));
    assert_eq!(points[22], Point::new(23.0, 0.0));
    assert_eq!(points[23], Point::new(25.0, 80.0));
    assert_eq!(points[43], Point::new(20.0, 105.0));
    assert_eq!(points[44], points[0]);
}

#[test]
fn test_back_piece_placement() {
    let set = draft(80.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::Pants);
    let back = set.get(PieceKind::Back).unwrap();

    assert_eq!(set.derived.back_offset, Some(65.0));
    assert_eq!(back.origin, Point::new(65.0, 0.0));
    assert_eq!(back.local_anchor(Anchor::CrotchTip), Some(Point::new(-10.0, 80.0)));
    assert_eq!(back.local_anchor(Anchor::WaistCenter), Some(Point::new(0.0, 107.0)));
    assert_eq!(back.local_anchor(Anchor::HipSide), Some(Point::new(26.0, 80.0)));
    assert_eq!(back.polygon.len(), 45);
}

#[test]
fn test_inch_table_selected_by_unit() {
    let inch = draft(32.0, 40.0, 41.0, Unit::Inches, GarmentStyle::Pants);
    let front = inch.get(PieceKind::Front).unwrap();
    assert_eq!(front.local_anchor(Anchor::CrotchTip).unwrap().x, -1.5);
    assert_eq!(inch.derived.front_crotch_extension, Some(1.5));
    // hips / 2 + 6
    assert_eq!(inch.derived.back_offset, Some(26.0));
    assert_eq!(
        inch.get(PieceKind::Back).unwrap().local_anchor(Anchor::WaistCenter).unwrap().y,
        42.0
    );

    // Same numbers in centimeters use the centimeter table
    let cm = draft(32.0, 40.0, 41.0, Unit::Centimeters, GarmentStyle::Pants);
    assert_eq!(cm.derived.front_crotch_extension, Some(4.0));
    assert_eq!(cm.derived.back_offset, Some(35.0));
}

#[test]
fn test_waist_larger_than_hips_still_drafts() {
    let set = draft(110.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::Pants);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_length_above_crotch_line_rejected() {
    let req = request(80.0, 100.0, 20.0, Unit::Centimeters, GarmentStyle::Pants);
    assert!(matches!(
        generate_with_defaults(&req),
        Err(DraftingError::InvalidProportions(_))
    ));
}

#[test]
fn test_narrow_hips_leave_no_hem() {
    // hips / 4 - 2 <= 0
    let req = request(6.0, 8.0, 105.0, Unit::Centimeters, GarmentStyle::Pants);
    assert!(matches!(
        generate_with_defaults(&req),
        Err(DraftingError::InvalidProportions(_))
    ));
}
