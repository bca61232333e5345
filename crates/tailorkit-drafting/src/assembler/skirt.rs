//! Flared skirt block: sew line and seam allowance cut line.

use tailorkit_core::{format_allowance, DraftingError, Point, PolygonBuilder};

use super::{require, Draft, DraftContext};
use crate::pieces::{Anchor, DerivedMeasures, PatternPiece, PieceKind};

struct SideSeam {
    waist_center: Point,
    waist_side: Point,
    hip_side: Point,
    hem_outer: Point,
    hem_inner: Point,
    control: Point,
}

impl SideSeam {
    /// Centre front down to the hem, across, then up the side curve.
    fn piece(
        &self,
        ctx: &DraftContext<'_>,
        kind: PieceKind,
        label: &str,
        cut_count: u32,
    ) -> Result<PatternPiece, DraftingError> {
        let side = ctx.curve(self.hip_side, self.waist_side, self.control)?;
        let mut outline = PolygonBuilder::starting_at(self.waist_center);
        outline
            .push(self.hem_inner)
            .push(self.hem_outer)
            .extend(side);
        Ok(
            PatternPiece::new(kind, label, cut_count, self.hem_inner, outline.finish())
                .with_anchors([
                    (Anchor::WaistCenter, self.waist_center),
                    (Anchor::WaistSide, self.waist_side),
                    (Anchor::HipSide, self.hip_side),
                    (Anchor::HemOuter, self.hem_outer),
                    (Anchor::HemInner, self.hem_inner),
                ]),
        )
    }
}

pub(super) fn draft(ctx: &DraftContext<'_>) -> Result<Draft, DraftingError> {
    let k = &ctx.constants.skirt;
    let length = ctx.measurements.length();
    let quarter_waist = ctx.measurements.waist() / 4.0;
    let quarter_hip = ctx.measurements.hips() / 4.0;
    let hip_depth = k.hip_depth;
    let flare = k.hem_flare;
    let sa = k.seam_allowance;

    require(length > hip_depth, || {
        format!("length {} must exceed the hip depth {}", length, hip_depth)
    })?;

    let hip_y = length - hip_depth;
    let control_y = length - hip_depth / 3.0;

    let sew = SideSeam {
        waist_center: Point::new(0.0, length),
        waist_side: Point::new(quarter_waist, length),
        hip_side: Point::new(quarter_hip, hip_y),
        hem_outer: Point::new(quarter_hip + flare, 0.0),
        hem_inner: Point::origin(),
        control: Point::new(quarter_hip, control_y),
    };
    let cut = SideSeam {
        waist_center: Point::new(0.0, length + sa),
        waist_side: Point::new(quarter_waist + sa, length + sa),
        hip_side: Point::new(quarter_hip + sa, hip_y),
        hem_outer: Point::new(quarter_hip + flare + sa, -sa),
        hem_inner: Point::new(0.0, -sa),
        control: Point::new(quarter_hip + sa, control_y),
    };

    let front = sew.piece(ctx, PieceKind::Front, "FRONT", 2)?;
    let cut_label = format!("CUT LINE ({} {})", format_allowance(sa, ctx.unit), ctx.unit);
    let front_cut = cut.piece(ctx, PieceKind::FrontCut, &cut_label, 2)?;

    Ok(Draft {
        derived: DerivedMeasures {
            quarter_waist,
            quarter_hip,
            crotch_depth: None,
            front_crotch_extension: None,
            back_crotch_extension: None,
            back_offset: None,
            hip_depth: Some(hip_depth),
        },
        pieces: vec![front, front_cut],
    })
}
