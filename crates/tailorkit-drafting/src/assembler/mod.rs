//! Pattern Assembler
//!
//! Derives anchor points from a [`DraftRequest`], samples the curved seams
//! and concatenates everything into one closed outline per piece.
//!
//! Generation is a pure function of the request, the constant table and the
//! curve resolution: the same inputs always give identical polygons.

mod pants;
mod pants_with_extras;
mod skirt;

use tailorkit_core::{
    check_resolution, sample_quadratic, DraftingError, Point, Unit, DEFAULT_RESOLUTION,
};
use tracing::{debug, info, warn};

use crate::constants::{ConstantTable, UnitConstants};
use crate::measurements::{DraftRequest, GarmentStyle, Measurements};
use crate::pieces::{DerivedMeasures, PatternPiece, PatternSet};

/// Generates pattern sets against an injected constant table
#[derive(Debug, Clone)]
pub struct PatternAssembler {
    constants: ConstantTable,
    resolution: usize,
}

impl Default for PatternAssembler {
    fn default() -> Self {
        Self::new(ConstantTable::default())
    }
}

impl PatternAssembler {
    pub fn new(constants: ConstantTable) -> Self {
        Self {
            constants,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Sets the number of intervals each curved seam is sampled at
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Drafts every piece of the requested style.
    ///
    /// # Errors
    /// * [`DraftingError::DegenerateCurve`] for a resolution outside
    ///   `1..=MAX_RESOLUTION`
    /// * [`DraftingError::InvalidProportions`] when the measurements cannot
    ///   hold the drafted features or the constant table is malformed
    /// * [`DraftingError::DegenerateDart`] when a dart does not fit its seam
    /// * [`DraftingError::SelfIntersecting`] when an outline crosses itself
    pub fn generate(&self, request: &DraftRequest) -> Result<PatternSet, DraftingError> {
        check_resolution(self.resolution)?;

        let constants = self.constants.for_unit(request.unit);
        constants.validate(request.unit.label())?;

        let m = request.measurements;
        if m.waist() > m.hips() {
            warn!(
                waist = m.waist(),
                hips = m.hips(),
                "Waist exceeds hips; drafting anyway"
            );
        }

        let ctx = DraftContext {
            measurements: m,
            unit: request.unit,
            constants,
            resolution: self.resolution,
        };

        let draft = match request.style {
            GarmentStyle::Pants => pants::draft(&ctx)?,
            GarmentStyle::PantsWithExtras => pants_with_extras::draft(&ctx)?,
            GarmentStyle::SkirtLike => skirt::draft(&ctx)?,
        };

        let mut set = PatternSet::new(*request, draft.derived);
        for piece in draft.pieces {
            check_outline(&piece)?;
            debug!(
                piece = %piece.kind,
                points = piece.polygon.len(),
                area = piece.polygon.area(),
                "Assembled piece"
            );
            set.insert(piece);
        }

        info!(
            style = %request.style,
            unit = %request.unit,
            pieces = set.len(),
            "Generated pattern"
        );
        Ok(set)
    }
}

/// Drafts `request` against `constants` at the default resolution.
pub fn generate(
    request: &DraftRequest,
    constants: &ConstantTable,
) -> Result<PatternSet, DraftingError> {
    PatternAssembler::new(constants.clone()).generate(request)
}

/// Drafts `request` against the built-in constant tables.
pub fn generate_with_defaults(request: &DraftRequest) -> Result<PatternSet, DraftingError> {
    PatternAssembler::default().generate(request)
}

/// Inputs shared by the per-style drafting functions
pub(crate) struct DraftContext<'a> {
    pub measurements: Measurements,
    pub unit: Unit,
    pub constants: &'a UnitConstants,
    pub resolution: usize,
}

impl DraftContext<'_> {
    /// Samples the seam from `start` to `end` pulled toward `control`
    pub fn curve(
        &self,
        start: Point,
        end: Point,
        control: Point,
    ) -> Result<Vec<Point>, DraftingError> {
        sample_quadratic(start, end, control, self.resolution)
    }
}

/// Output of one per-style drafting function
pub(crate) struct Draft {
    pub derived: DerivedMeasures,
    pub pieces: Vec<PatternPiece>,
}

/// Fails with `InvalidProportions` unless `condition` holds
pub(crate) fn require(
    condition: bool,
    reason: impl FnOnce() -> String,
) -> Result<(), DraftingError> {
    if condition {
        Ok(())
    } else {
        Err(DraftingError::InvalidProportions(reason()))
    }
}

fn check_outline(piece: &PatternPiece) -> Result<(), DraftingError> {
    if !piece.polygon.is_closed() || !piece.polygon.is_simple() {
        return Err(DraftingError::SelfIntersecting {
            piece: piece.kind.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(style: GarmentStyle) -> DraftRequest {
        DraftRequest::new(
            Measurements::new(80.0, 100.0, 105.0).unwrap(),
            Unit::Centimeters,
            style,
        )
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let assembler = PatternAssembler::default().with_resolution(0);
        assert_eq!(
            assembler.generate(&request(GarmentStyle::Pants)),
            Err(DraftingError::DegenerateCurve { resolution: 0 })
        );
    }

    #[test]
    fn test_huge_resolution_rejected_without_sampling() {
        for resolution in [tailorkit_core::MAX_RESOLUTION + 1, usize::MAX] {
            let assembler = PatternAssembler::default().with_resolution(resolution);
            assert_eq!(
                assembler.generate(&request(GarmentStyle::Pants)),
                Err(DraftingError::DegenerateCurve { resolution })
            );
        }
    }

    #[test]
    fn test_resolution_controls_point_count() {
        let coarse = PatternAssembler::default()
            .with_resolution(4)
            .generate(&request(GarmentStyle::Pants))
            .unwrap();
        let fine = generate_with_defaults(&request(GarmentStyle::Pants)).unwrap();
        let front = crate::pieces::PieceKind::Front;
        assert!(
            coarse.get(front).unwrap().polygon.len() < fine.get(front).unwrap().polygon.len()
        );
    }

    #[test]
    fn test_malformed_table_rejected() {
        let mut table = ConstantTable::default();
        table.cm.skirt.hip_depth = 0.0;
        let err = generate(&request(GarmentStyle::SkirtLike), &table).unwrap_err();
        assert!(matches!(err, DraftingError::InvalidProportions(_)));
    }

    #[test]
    fn test_bowtie_outline_rejected() {
        use crate::pieces::PieceKind;
        use tailorkit_core::Polygon;

        let bowtie = Polygon::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
        ]);
        let piece = PatternPiece::new(PieceKind::Back, "BACK", 2, Point::origin(), bowtie);
        assert_eq!(
            check_outline(&piece),
            Err(DraftingError::SelfIntersecting {
                piece: "back".to_string()
            })
        );
    }

    #[test]
    fn test_require() {
        assert!(require(true, || unreachable!()).is_ok());
        assert_eq!(
            require(false, || "nope".to_string()),
            Err(DraftingError::InvalidProportions("nope".to_string()))
        );
    }
}
