use crate::common::{draft, request};
use proptest::prelude::*;
use tailorkit_core::Unit;
use tailorkit_drafting::{generate_with_defaults, Anchor, GarmentStyle, PieceKind};

fn style() -> impl Strategy<Value = GarmentStyle> {
    prop_oneof![
        Just(GarmentStyle::Pants),
        Just(GarmentStyle::PantsWithExtras),
        Just(GarmentStyle::SkirtLike),
    ]
}

/// Realistic bodies: waist at most the hips, hips well above the pocket depth
fn body(unit: Unit) -> impl Strategy<Value = (f64, f64, f64)> {
    let (hips, length) = match unit {
        Unit::Centimeters => (70.0..150.0, 60.0..130.0),
        Unit::Inches => (28.0..60.0, 24.0..50.0),
    };
    (hips, 0.6f64..1.0, length).prop_map(|(hips, ratio, length)| (hips * ratio, hips, length))
}

fn unit_and_body() -> impl Strategy<Value = (Unit, (f64, f64, f64))> {
    prop_oneof![
        body(Unit::Centimeters).prop_map(|b| (Unit::Centimeters, b)),
        body(Unit::Inches).prop_map(|b| (Unit::Inches, b)),
    ]
}

proptest! {
    #[test]
    fn every_outline_is_closed_ccw_and_simple(
        (unit, (waist, hips, length)) in unit_and_body(),
        style in style(),
    ) {
        let set = generate_with_defaults(&request(waist, hips, length, unit, style)).unwrap();
        prop_assert!(!set.is_empty());
        for piece in set.pieces() {
            prop_assert!(piece.polygon.is_closed(), "{} not closed", piece.kind);
            prop_assert!(piece.polygon.is_ccw(), "{} not counter-clockwise", piece.kind);
            prop_assert!(piece.polygon.is_simple(), "{} self-intersects", piece.kind);
            let consecutive_repeat = piece
                .polygon
                .points()
                .windows(2)
                .any(|w| w[0] == w[1]);
            prop_assert!(!consecutive_repeat, "{} repeats a point", piece.kind);
        }
    }

    #[test]
    fn generation_is_idempotent(
        (unit, (waist, hips, length)) in unit_and_body(),
        style in style(),
    ) {
        let req = request(waist, hips, length, unit, style);
        let first = generate_with_defaults(&req).unwrap();
        let second = generate_with_defaults(&req).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn hip_derived_offsets_scale_linearly(hips in 60.0f64..100.0, style in prop_oneof![
        Just(GarmentStyle::Pants),
        Just(GarmentStyle::PantsWithExtras),
    ]) {
        let single = draft(hips * 0.8, hips, 130.0, Unit::Centimeters, style);
        let double = draft(hips * 0.8, hips * 2.0, 130.0, Unit::Centimeters, style);

        let crotch_depth = |set: &tailorkit_drafting::PatternSet| {
            let front = set.get(PieceKind::Front).unwrap();
            front.anchor(Anchor::WaistCenter).unwrap().y - front.anchor(Anchor::CrotchTip).unwrap().y
        };
        prop_assert!((crotch_depth(&double) - 2.0 * crotch_depth(&single)).abs() < 1e-9);

        let back_ext = |set: &tailorkit_drafting::PatternSet| {
            set.get(PieceKind::Back).unwrap().local_anchor(Anchor::CrotchTip).unwrap().x
        };
        prop_assert!((back_ext(&double) - 2.0 * back_ext(&single)).abs() < 1e-9);

        let quarter_hip = |set: &tailorkit_drafting::PatternSet| set.derived.quarter_hip;
        prop_assert!((quarter_hip(&double) - 2.0 * quarter_hip(&single)).abs() < 1e-9);
    }
}

#[test]
fn test_basic_front_hip_side_scales_with_hips() {
    let single = draft(80.0, 100.0, 130.0, Unit::Centimeters, GarmentStyle::Pants);
    let double = draft(80.0, 200.0, 130.0, Unit::Centimeters, GarmentStyle::Pants);
    let hip_x = |set: &tailorkit_drafting::PatternSet| {
        set.get(PieceKind::Front).unwrap().local_anchor(Anchor::HipSide).unwrap().x
    };
    assert_eq!(hip_x(&single), 25.0);
    assert_eq!(hip_x(&double), 50.0);
}
