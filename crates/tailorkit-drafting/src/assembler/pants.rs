//! Basic front and back pants block.

use tailorkit_core::{DraftingError, Point, PolygonBuilder};

use super::{require, Draft, DraftContext};
use crate::pieces::{Anchor, DerivedMeasures, PatternPiece, PieceKind};

pub(super) fn draft(ctx: &DraftContext<'_>) -> Result<Draft, DraftingError> {
    let k = &ctx.constants.pants;
    let length = ctx.measurements.length();
    let hips = ctx.measurements.hips();

    let crotch_depth = hips / 4.0;
    let quarter_waist = ctx.measurements.waist() / 4.0;
    let quarter_hip = hips / 4.0;
    let front_ext = k.front_crotch_extension;
    let back_ext = hips / 10.0;
    let hem_width = quarter_hip - k.hem_reduction;
    let offset = hips / 2.0 + k.piece_gap;

    require(length > crotch_depth, || {
        format!(
            "length {} must exceed the crotch depth {}",
            length, crotch_depth
        )
    })?;
    require(hem_width > 0.0, || {
        format!(
            "hem reduction {} leaves no hem on a quarter hip of {}",
            k.hem_reduction, quarter_hip
        )
    })?;

    let crotch_y = length - crotch_depth;

    // Front
    let waist_center = Point::new(0.0, length);
    let waist_side = Point::new(quarter_waist, length);
    let hip_side = Point::new(quarter_hip, crotch_y);
    let crotch_level = Point::new(0.0, crotch_y);
    let crotch_tip = Point::new(-front_ext, crotch_y);
    let hem_inner = Point::origin();
    let hem_outer = Point::new(hem_width, 0.0);

    let rise = ctx.curve(
        waist_center,
        crotch_tip,
        Point::new(0.0, crotch_y + crotch_depth / 2.0),
    )?;
    let hip = ctx.curve(hip_side, waist_side, Point::new(hip_side.x, length))?;

    let mut outline = PolygonBuilder::new();
    outline
        .extend(rise)
        .push(hem_inner)
        .push(hem_outer)
        .extend(hip);
    let front = PatternPiece::new(PieceKind::Front, "FRONT", 2, hem_inner, outline.finish())
        .with_anchors([
            (Anchor::WaistCenter, waist_center),
            (Anchor::WaistSide, waist_side),
            (Anchor::HipSide, hip_side),
            (Anchor::CrotchLevel, crotch_level),
            (Anchor::CrotchTip, crotch_tip),
            (Anchor::HemInner, hem_inner),
            (Anchor::HemOuter, hem_outer),
        ]);

    // Back
    let ease = k.back_side_ease;
    let b_waist_center = Point::new(offset, length + k.back_rise);
    let b_waist_side = Point::new(offset + quarter_waist + ease, length);
    let b_hip_side = Point::new(offset + quarter_hip + ease, crotch_y);
    let b_crotch_level = Point::new(offset, crotch_y);
    let b_crotch_tip = Point::new(offset - back_ext, crotch_y);
    let b_hem_inner = Point::new(offset, 0.0);
    let b_hem_outer = Point::new(offset + hem_width + ease, 0.0);

    let rise = ctx.curve(
        b_waist_center,
        b_crotch_tip,
        Point::new(offset, crotch_y + crotch_depth / 3.0),
    )?;
    let hip = ctx.curve(b_hip_side, b_waist_side, Point::new(b_hip_side.x, length))?;

    let mut outline = PolygonBuilder::new();
    outline
        .extend(rise)
        .push(b_hem_inner)
        .push(b_hem_outer)
        .extend(hip);
    let back = PatternPiece::new(PieceKind::Back, "BACK", 2, b_hem_inner, outline.finish())
        .with_anchors([
            (Anchor::WaistCenter, b_waist_center),
            (Anchor::WaistSide, b_waist_side),
            (Anchor::HipSide, b_hip_side),
            (Anchor::CrotchLevel, b_crotch_level),
            (Anchor::CrotchTip, b_crotch_tip),
            (Anchor::HemInner, b_hem_inner),
            (Anchor::HemOuter, b_hem_outer),
        ]);

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
        pieces: vec![front, back],
    })
}
