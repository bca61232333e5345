//! Pattern pieces and the set produced by one generation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tailorkit_core::{Bounds, Point, Polygon};

use crate::measurements::DraftRequest;

/// Named garment piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Front,
    Back,
    Waistband,
    PocketBag,
    FrontDart,
    BackDart,
    /// Seam allowance cut line around the front
    FrontCut,
}

impl PieceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Waistband => "waistband",
            Self::PocketBag => "pocket_bag",
            Self::FrontDart => "front_dart",
            Self::BackDart => "back_dart",
            Self::FrontCut => "front_cut",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named construction point of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Anchor {
    WaistCenter,
    WaistSide,
    HipSide,
    CrotchLevel,
    CrotchTip,
    HemInner,
    HemOuter,
    PocketTop,
    PocketBottom,
    DartLeft,
    DartApex,
    DartRight,
    CornerBottomLeft,
    CornerBottomRight,
    CornerTopRight,
    CornerTopLeft,
}

/// One closed outline with its anchors, in layout coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPiece {
    pub kind: PieceKind,
    pub label: String,
    /// How many times the piece is cut from fabric; zero for markings
    pub cut_count: u32,
    /// Local origin in layout space
    pub origin: Point,
    pub polygon: Polygon,
    pub anchors: BTreeMap<Anchor, Point>,
}

impl PatternPiece {
    pub fn new(
        kind: PieceKind,
        label: impl Into<String>,
        cut_count: u32,
        origin: Point,
        polygon: Polygon,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            cut_count,
            origin,
            polygon,
            anchors: BTreeMap::new(),
        }
    }

    pub fn with_anchors<I>(mut self, anchors: I) -> Self
    where
        I: IntoIterator<Item = (Anchor, Point)>,
    {
        self.anchors.extend(anchors);
        self
    }

    /// Anchor in layout coordinates
    pub fn anchor(&self, anchor: Anchor) -> Option<Point> {
        self.anchors.get(&anchor).copied()
    }

    /// Anchor relative to the piece origin
    pub fn local_anchor(&self, anchor: Anchor) -> Option<Point> {
        self.anchor(anchor).map(|p| p.relative_to(&self.origin))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.polygon.bounds()
    }
}

/// Quantities derived from the measurements before any anchor is placed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedMeasures {
    pub quarter_waist: f64,
    pub quarter_hip: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crotch_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_crotch_extension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_crotch_extension: Option<f64>,
    /// Horizontal placement of the back piece
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_depth: Option<f64>,
}

/// Every piece of one generated pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSet {
    pub request: DraftRequest,
    pub derived: DerivedMeasures,
    pieces: BTreeMap<PieceKind, PatternPiece>,
}

impl PatternSet {
    pub fn new(request: DraftRequest, derived: DerivedMeasures) -> Self {
        Self {
            request,
            derived,
            pieces: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, piece: PatternPiece) {
        self.pieces.insert(piece.kind, piece);
    }

    pub fn get(&self, kind: PieceKind) -> Option<&PatternPiece> {
        self.pieces.get(&kind)
    }

    pub fn contains(&self, kind: PieceKind) -> bool {
        self.pieces.contains_key(&kind)
    }

    /// Pieces in kind order
    pub fn pieces(&self) -> impl Iterator<Item = &PatternPiece> {
        self.pieces.values()
    }

    pub fn piece_names(&self) -> Vec<&'static str> {
        self.pieces.keys().map(PieceKind::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Bounding box of the whole layout
    pub fn bounds(&self) -> Option<Bounds> {
        self.pieces
            .values()
            .filter_map(PatternPiece::bounds)
            .reduce(|a, b| a.union(&b))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
