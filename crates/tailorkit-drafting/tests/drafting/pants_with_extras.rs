use crate::common::{draft, request};
use tailorkit_core::{DraftingError, Point, Unit};
use tailorkit_drafting::{
    generate, generate_with_defaults, Anchor, ConstantTable, GarmentStyle, PieceKind,
};

#[test]
fn test_piece_set() {
    let set = draft(80.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::PantsWithExtras);
    assert_eq!(
        set.piece_names(),
        vec!["front", "back", "waistband", "pocket_bag", "front_dart", "back_dart"]
    );
    assert_eq!(set.derived.front_crotch_extension, Some(100.0 / 16.0));
    assert_eq!(set.derived.back_crotch_extension, Some(12.5));
}

#[test]
fn test_front_pocket_and_dart() {
    let set = draft(80.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::PantsWithExtras);
    let front = set.get(PieceKind::Front).unwrap();

    assert_eq!(front.anchor(Anchor::HipSide), Some(Point::new(24.0, 80.0)));
    assert_eq!(front.anchor(Anchor::WaistSide), Some(Point::new(21.0, 105.0)));
    assert_eq!(front.anchor(Anchor::PocketTop), Some(Point::new(17.0, 105.0)));
    assert_eq!(front.anchor(Anchor::PocketBottom), Some(Point::new(24.0, 91.0)));
    assert_eq!(front.anchor(Anchor::DartLeft), Some(Point::new(7.5, 105.0)));
    assert_eq!(front.anchor(Anchor::DartApex), Some(Point::new(8.5, 97.0)));
    assert_eq!(front.anchor(Anchor::DartRight), Some(Point::new(9.5, 105.0)));

    // rise (21) + hem inner/outer, hip, pocket bottom/top, three dart points, closing point
    let points = front.polygon.points();
    assert_eq!(points.len(), 30);
    assert_eq!(&points[21..29], &[
        Point::new(0.0, 0.0),
        Point::new(24.0, 0.0),
        Point::new(24.0, 80.0),
        Point::new(24.0, 91.0),
        Point::new(17.0, 105.0),
        Point::new(9.5, 105.0),
        Point::new(8.5, 97.0),
        Point::new(7.5, 105.0),
    ]);
}

#[test]
fn test_back_dart() {
    let set = draft(80.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::PantsWithExtras);
    let back = set.get(PieceKind::Back).unwrap();
    assert_eq!(back.local_anchor(Anchor::WaistSide), Some(Point::new(24.0, 105.0)));
    assert_eq!(back.local_anchor(Anchor::HemOuter), Some(Point::new(26.0, 0.0)));
    assert_eq!(back.anchor(Anchor::DartLeft), Some(Point::new(75.5, 106.0)));
    assert_eq!(back.anchor(Anchor::DartApex), Some(Point::new(77.0, 95.0)));
    assert_eq!(back.anchor(Anchor::DartRight), Some(Point::new(78.5, 106.0)));

    let dart = set.get(PieceKind::BackDart).unwrap();
    assert_eq!(dart.cut_count, 0);
    assert_eq!(
        dart.polygon.vertices(),
        &[
            Point::new(75.5, 106.0),
            Point::new(77.0, 95.0),
            Point::new(78.5, 106.0),
        ]
    );
}

#[test]
fn test_front_dart_narrower_than_back() {
    let set = draft(80.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::PantsWithExtras);
    let width = |kind| {
        let piece = set.get(kind).unwrap();
        piece.anchor(Anchor::DartRight).unwrap().x - piece.anchor(Anchor::DartLeft).unwrap().x
    };
    assert!(width(PieceKind::FrontDart) < width(PieceKind::BackDart));
}

#[test]
fn test_waistband_and_pocket_bag() {
    let set = draft(80.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::PantsWithExtras);

    let band = set.get(PieceKind::Waistband).unwrap();
    assert_eq!(band.anchor(Anchor::CornerBottomLeft), Some(Point::new(0.0, -14.0)));
    assert_eq!(band.anchor(Anchor::CornerTopRight), Some(Point::new(85.0, -10.0)));
    assert_eq!(band.cut_count, 1);

    let bag = set.get(PieceKind::PocketBag).unwrap();
    assert_eq!(bag.anchor(Anchor::CornerBottomLeft), Some(Point::new(34.0, 72.0)));
    assert_eq!(bag.anchor(Anchor::CornerTopRight), Some(Point::new(50.0, 100.0)));
    assert_eq!(bag.origin, Point::new(34.0, 72.0));
}

#[test]
fn test_inch_extras() {
    let set = draft(32.0, 40.0, 41.0, Unit::Inches, GarmentStyle::PantsWithExtras);
    let band = set.get(PieceKind::Waistband).unwrap();
    assert_eq!(band.anchor(Anchor::CornerBottomLeft), Some(Point::new(0.0, -5.5)));
    assert_eq!(band.anchor(Anchor::CornerTopRight), Some(Point::new(37.0, -4.0)));

    let front = set.get(PieceKind::Front).unwrap();
    // 40 / 4 - 0.5
    assert_eq!(front.anchor(Anchor::HipSide).unwrap().x, 9.5);
    assert_eq!(front.anchor(Anchor::PocketBottom).unwrap().y, 41.0 - 5.5);
}

#[test]
fn test_tiny_waist_rejects_front_dart() {
    let req = request(8.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::PantsWithExtras);
    match generate_with_defaults(&req) {
        Err(DraftingError::DegenerateDart { piece, .. }) => assert_eq!(piece, "front"),
        other => panic!("expected a degenerate dart, got {:?}", other),
    }
}

#[test]
fn test_long_dart_rejected_not_clamped() {
    let mut table = ConstantTable::default();
    table.cm.extras.back_dart_length = 30.0;
    let req = request(80.0, 100.0, 105.0, Unit::Centimeters, GarmentStyle::PantsWithExtras);
    match generate(&req, &table) {
        Err(DraftingError::DegenerateDart { piece, reason }) => {
            assert_eq!(piece, "back");
            assert!(reason.contains("crotch line"));
        }
        other => panic!("expected a degenerate dart, got {:?}", other),
    }
}

#[test]
fn test_pocket_deeper_than_crotch_rejected() {
    // crotch depth 10 < pocket depth 14
    let req = request(30.0, 40.0, 105.0, Unit::Centimeters, GarmentStyle::PantsWithExtras);
    assert!(matches!(
        generate_with_defaults(&req),
        Err(DraftingError::InvalidProportions(_))
    ));
}
