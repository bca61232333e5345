//! Production pants block: front with slanted pocket opening and waist dart,
//! back with waist dart, plus waistband, pocket bag and dart markings.

use tailorkit_core::{DraftingError, Point, Polygon, PolygonBuilder};

use super::{require, Draft, DraftContext};
use crate::pieces::{Anchor, DerivedMeasures, PatternPiece, PieceKind};

/// A dart carved into a waistline
struct Dart {
    left: Point,
    apex: Point,
    right: Point,
}

impl Dart {
    fn triangle(&self) -> Polygon {
        let mut outline = PolygonBuilder::new();
        outline.push(self.left).push(self.apex).push(self.right);
        outline.finish()
    }

    fn anchors(&self) -> [(Anchor, Point); 3] {
        [
            (Anchor::DartLeft, self.left),
            (Anchor::DartApex, self.apex),
            (Anchor::DartRight, self.right),
        ]
    }
}

/// Darts are rejected rather than clamped when they leave the seam
fn fit_dart(
    piece: PieceKind,
    segment: (f64, f64),
    center_x: f64,
    width: f64,
    leg_y: f64,
    apex_y: f64,
    crotch_y: f64,
) -> Result<Dart, DraftingError> {
    let (seg_start, seg_end) = segment;
    let left = center_x - width / 2.0;
    let right = center_x + width / 2.0;

    if left <= seg_start || right >= seg_end {
        return Err(DraftingError::DegenerateDart {
            piece: piece.to_string(),
            reason: format!(
                "dart of width {} does not fit the waist segment {:.2}..{:.2}",
                width, seg_start, seg_end
            ),
        });
    }
    if apex_y <= crotch_y {
        return Err(DraftingError::DegenerateDart {
            piece: piece.to_string(),
            reason: format!(
                "dart apex at y={:.2} reaches the crotch line at y={:.2}",
                apex_y, crotch_y
            ),
        });
    }

    Ok(Dart {
        left: Point::new(left, leg_y),
        apex: Point::new(center_x, apex_y),
        right: Point::new(right, leg_y),
    })
}

fn rectangle(
    kind: PieceKind,
    label: &str,
    cut_count: u32,
    (x, y): (f64, f64),
    (w, h): (f64, f64),
) -> PatternPiece {
    let bottom_left = Point::new(x, y);
    let bottom_right = Point::new(x + w, y);
    let top_right = Point::new(x + w, y + h);
    let top_left = Point::new(x, y + h);

    let mut outline = PolygonBuilder::new();
    outline
        .push(bottom_left)
        .push(bottom_right)
        .push(top_right)
        .push(top_left);
    PatternPiece::new(kind, label, cut_count, bottom_left, outline.finish()).with_anchors([
        (Anchor::CornerBottomLeft, bottom_left),
        (Anchor::CornerBottomRight, bottom_right),
        (Anchor::CornerTopRight, top_right),
        (Anchor::CornerTopLeft, top_left),
    ])
}

pub(super) fn draft(ctx: &DraftContext<'_>) -> Result<Draft, DraftingError> {
    let k = &ctx.constants.extras;
    let length = ctx.measurements.length();
    let hips = ctx.measurements.hips();
    let waist = ctx.measurements.waist();

    let crotch_depth = hips / 4.0;
    let quarter_waist = waist / 4.0;
    let quarter_hip = hips / 4.0;
    let front_hip = quarter_hip - k.hip_ease;
    let back_hip = quarter_hip + k.hip_ease;
    let front_waist = quarter_waist - k.hip_ease + k.front_dart_width;
    let back_waist = quarter_waist + k.hip_ease + k.back_dart_width;
    let front_ext = hips / 16.0;
    let back_ext = hips / 8.0;
    let offset = hips / 2.0 + ctx.constants.pants.piece_gap;
    let back_rise = ctx.constants.pants.back_rise;

    require(length > crotch_depth, || {
        format!(
            "length {} must exceed the crotch depth {}",
            length, crotch_depth
        )
    })?;
    require(front_hip > 0.0, || {
        format!("hip ease {} leaves no front hip width", k.hip_ease)
    })?;
    require(k.pocket_depth < crotch_depth, || {
        format!(
            "pocket opening depth {} must stay above the crotch line at depth {}",
            k.pocket_depth, crotch_depth
        )
    })?;

    let crotch_y = length - crotch_depth;

    // Front
    let waist_center = Point::new(0.0, length);
    let crotch_level = Point::new(0.0, crotch_y);
    let crotch_tip = Point::new(-front_ext, crotch_y);
    let hem_inner = Point::origin();
    let hem_outer = Point::new(front_hip, 0.0);
    let hip_side = Point::new(front_hip, crotch_y);
    let waist_side = Point::new(front_waist, length);
    let pocket_top = Point::new(front_waist - k.pocket_inset, length);
    let pocket_bottom = Point::new(front_hip, length - k.pocket_depth);

    // The side edge nearest the dart is the pocket slant or the hip line,
    // whichever is further in.
    let front_dart = fit_dart(
        PieceKind::Front,
        (0.0, pocket_top.x.min(front_hip)),
        pocket_top.x / 2.0,
        k.front_dart_width,
        length,
        length - k.front_dart_length,
        crotch_y,
    )?;

    let rise = ctx.curve(
        waist_center,
        crotch_tip,
        Point::new(0.0, length - crotch_depth / 2.0),
    )?;
    let mut outline = PolygonBuilder::new();
    outline
        .extend(rise)
        .push(hem_inner)
        .push(hem_outer)
        .push(hip_side)
        .push(pocket_bottom)
        .push(pocket_top)
        .push(front_dart.right)
        .push(front_dart.apex)
        .push(front_dart.left);
    let front = PatternPiece::new(PieceKind::Front, "FRONT", 2, hem_inner, outline.finish())
        .with_anchors([
            (Anchor::WaistCenter, waist_center),
            (Anchor::WaistSide, waist_side),
            (Anchor::HipSide, hip_side),
            (Anchor::CrotchLevel, crotch_level),
            (Anchor::CrotchTip, crotch_tip),
            (Anchor::HemInner, hem_inner),
            (Anchor::HemOuter, hem_outer),
            (Anchor::PocketTop, pocket_top),
            (Anchor::PocketBottom, pocket_bottom),
        ])
        .with_anchors(front_dart.anchors());

    // Back
    let b_waist_center = Point::new(offset, length + back_rise);
    let b_crotch_level = Point::new(offset, crotch_y);
    let b_crotch_tip = Point::new(offset - back_ext, crotch_y);
    let b_hem_inner = Point::new(offset, 0.0);
    let b_hem_outer = Point::new(offset + back_hip, 0.0);
    let b_hip_side = Point::new(offset + back_hip, crotch_y);
    let b_waist_side = Point::new(offset + back_waist, length);

    let back_dart = fit_dart(
        PieceKind::Back,
        (offset, offset + back_waist.min(back_hip)),
        offset + back_waist / 2.0,
        k.back_dart_width,
        length + back_rise / 2.0,
        length - k.back_dart_length,
        crotch_y,
    )?;

    let rise = ctx.curve(
        b_waist_center,
        b_crotch_tip,
        Point::new(offset, length - crotch_depth / 2.0),
    )?;
    let hip = ctx.curve(b_hip_side, b_waist_side, Point::new(b_hip_side.x, length))?;
    let mut outline = PolygonBuilder::new();
    outline
        .extend(rise)
        .push(b_hem_inner)
        .push(b_hem_outer)
        .extend(hip)
        .push(back_dart.right)
        .push(back_dart.apex)
        .push(back_dart.left);
    let back = PatternPiece::new(PieceKind::Back, "BACK", 2, b_hem_inner, outline.finish())
        .with_anchors([
            (Anchor::WaistCenter, b_waist_center),
            (Anchor::WaistSide, b_waist_side),
            (Anchor::HipSide, b_hip_side),
            (Anchor::CrotchLevel, b_crotch_level),
            (Anchor::CrotchTip, b_crotch_tip),
            (Anchor::HemInner, b_hem_inner),
            (Anchor::HemOuter, b_hem_outer),
        ])
        .with_anchors(back_dart.anchors());

    // Waistband below the hem, pocket bag beside the front
    let waistband = rectangle(
        PieceKind::Waistband,
        "WAISTBAND",
        1,
        (0.0, -k.waistband_gap - k.waistband_height),
        (waist + k.waistband_ease, k.waistband_height),
    );
    let pocket_top_y = length - k.pocket_bag_drop;
    let pocket_bag = rectangle(
        PieceKind::PocketBag,
        "POCKET BAG",
        2,
        (front_hip + k.pocket_bag_gap, pocket_top_y - k.pocket_bag_height),
        (k.pocket_bag_width, k.pocket_bag_height),
    );

    let front_dart_piece = PatternPiece::new(
        PieceKind::FrontDart,
        "DART",
        0,
        hem_inner,
        front_dart.triangle(),
    )
    .with_anchors(front_dart.anchors());
    let back_dart_piece = PatternPiece::new(
        PieceKind::BackDart,
        "DART",
        0,
        b_hem_inner,
        back_dart.triangle(),
    )
    .with_anchors(back_dart.anchors());

    Ok(Draft {
        derived: DerivedMeasures {
            quarter_waist,
            quarter_hip,
            crotch_depth: Some(crotch_depth),
            front_crotch_extension: Some(front_ext),
            back_crotch_extension: Some(back_ext),
            back_offset: Some(offset),
            hip_depth: None,
        },
        pieces: vec![
            front,
            back,
            waistband,
            pocket_bag,
            front_dart_piece,
            back_dart_piece,
        ],
    })
}
