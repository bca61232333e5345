use crate::common::{draft, request};
use tailorkit_core::{DraftingError, Point, Unit};
use tailorkit_drafting::{generate_with_defaults, Anchor, GarmentStyle, PieceKind};

#[test]
fn test_sew_line_anchors() {
    let set = draft(72.0, 98.0, 60.0, Unit::Centimeters, GarmentStyle::SkirtLike);
    assert_eq!(set.piece_names(), vec!["front", "front_cut"]);
    assert_eq!(set.derived.hip_depth, Some(20.0));
    assert_eq!(set.derived.crotch_depth, None);

    let front = set.get(PieceKind::Front).unwrap();
    assert_eq!(front.anchor(Anchor::WaistCenter), Some(Point::new(0.0, 60.0)));
    assert_eq!(front.anchor(Anchor::WaistSide), Some(Point::new(18.0, 60.0)));
    assert_eq!(front.anchor(Anchor::HipSide), Some(Point::new(24.5, 40.0)));
    assert_eq!(front.anchor(Anchor::HemOuter), Some(Point::new(29.5, 0.0)));
    assert_eq!(front.local_anchor(Anchor::HemInner), Some(Point::origin()));

    let points = front.polygon.points();
    // waist centre, hem inner, hem outer, side curve (21), closing point
    assert_eq!(points.len(), 25);
    assert_eq!(points[3], Point::new(24.5, 40.0));
    assert_eq!(points[23], Point::new(18.0, 60.0));
}

#[test]
fn test_cut_line_offset_by_seam_allowance() {
    let set = draft(72.0, 98.0, 60.0, Unit::Centimeters, GarmentStyle::SkirtLike);
    let sew = set.get(PieceKind::Front).unwrap();
    let cut = set.get(PieceKind::FrontCut).unwrap();

    assert_eq!(cut.label, "CUT LINE (1 cm)");
    assert_eq!(cut.anchor(Anchor::WaistSide), Some(Point::new(19.0, 61.0)));
    assert_eq!(cut.anchor(Anchor::HemOuter), Some(Point::new(30.5, -1.0)));

    let sew_bounds = sew.bounds().unwrap();
    let cut_bounds = cut.bounds().unwrap();
    assert!(cut_bounds.contains(&sew_bounds));
    assert_eq!(cut_bounds.max_y, sew_bounds.max_y + 1.0);
    assert_eq!(cut_bounds.min_y, sew_bounds.min_y - 1.0);
    assert_eq!(cut_bounds.max_x, sew_bounds.max_x + 1.0);
}

#[test]
fn test_inch_seam_allowance() {
    let set = draft(28.0, 38.0, 24.0, Unit::Inches, GarmentStyle::SkirtLike);
    let cut = set.get(PieceKind::FrontCut).unwrap();
    assert_eq!(cut.label, "CUT LINE (1/2 inch)");
    assert_eq!(cut.anchor(Anchor::HemInner), Some(Point::new(0.0, -0.5)));
    // 38 / 4 + 2 + 0.5
    assert_eq!(cut.anchor(Anchor::HemOuter).unwrap().x, 12.0);
}

#[test]
fn test_skirt_shorter_than_hip_depth_rejected() {
    let req = request(72.0, 98.0, 15.0, Unit::Centimeters, GarmentStyle::SkirtLike);
    assert!(matches!(
        generate_with_defaults(&req),
        Err(DraftingError::InvalidProportions(_))
    ));
}
