//! Labeled diagram of a pattern set
//!
//! A [`Diagram`] is the renderer-neutral description of what to draw: one
//! styled, labeled outline per piece plus a title, notes and legend
//! entries. The SVG and raster renderers both consume it.

use serde::{Deserialize, Serialize};
use tailorkit_core::{Bounds, Point, Polygon, Unit};

use crate::measurements::GarmentStyle;
use crate::pieces::{PatternPiece, PatternSet, PieceKind};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const DARK_GREY: Color = Color::rgb(64, 64, 64);
    pub const GRID: Color = Color::rgb(221, 221, 221);

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Stroke and fill of one outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieceStyle {
    pub stroke: Color,
    /// Stroke width in pixels
    pub stroke_width: f64,
    pub line: LineStyle,
    pub fill: Option<Color>,
    pub fill_opacity: f64,
}

impl PieceStyle {
    const fn outline(stroke: Color, line: LineStyle) -> Self {
        Self {
            stroke,
            stroke_width: 1.5,
            line,
            fill: None,
            fill_opacity: 0.0,
        }
    }

    const fn filled(stroke: Color, fill: Color, fill_opacity: f64) -> Self {
        Self {
            stroke,
            stroke_width: 1.5,
            line: LineStyle::Solid,
            fill: Some(fill),
            fill_opacity,
        }
    }

    /// Drawing style of `kind` within a `style` pattern
    pub fn for_piece(kind: PieceKind, style: GarmentStyle) -> Self {
        match (kind, style) {
            (PieceKind::Front, GarmentStyle::SkirtLike) => Self {
                stroke_width: 2.5,
                ..Self::filled(Color::BLACK, Color::PINK, 0.2)
            },
            (PieceKind::Front, _) => Self::filled(Color::NAVY, Color::LIGHT_BLUE, 0.3),
            (PieceKind::Back, _) => Self::filled(Color::DARK_RED, Color::PINK, 0.3),
            (PieceKind::Waistband, _) => Self::outline(Color::GREEN, LineStyle::Solid),
            (PieceKind::PocketBag, _) => Self::outline(Color::BLUE, LineStyle::Dashed),
            (PieceKind::FrontDart | PieceKind::BackDart, _) => {
                Self::filled(Color::DARK_GREY, Color::DARK_GREY, 0.25)
            }
            (PieceKind::FrontCut, _) => Self::outline(Color::RED, LineStyle::Dashed),
        }
    }
}

/// One drawn outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramItem {
    pub kind: PieceKind,
    pub polygon: Polygon,
    pub style: PieceStyle,
    /// Text drawn inside the piece; lines separated by `\n`
    pub label: Option<String>,
    pub label_at: Point,
    pub legend: String,
}

/// Everything needed to draw one pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub title: String,
    pub unit: Unit,
    pub notes: Vec<String>,
    pub items: Vec<DiagramItem>,
}

impl Diagram {
    /// Builds one item per piece of `set`, in piece order.
    pub fn from_pattern_set(set: &PatternSet, title: impl Into<String>) -> Self {
        let style = set.request.style;
        let items = set
            .pieces()
            .map(|piece| DiagramItem {
                kind: piece.kind,
                polygon: piece.polygon.clone(),
                style: PieceStyle::for_piece(piece.kind, style),
                label: piece_label(piece),
                label_at: piece
                    .bounds()
                    .map(|b| b.center())
                    .unwrap_or(piece.origin),
                legend: legend_entry(piece, style),
            })
            .collect();

        Self {
            title: title.into(),
            unit: set.request.unit,
            notes: Vec::new(),
            items,
        }
    }

    /// Adds a line of text under the title
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Bounding box of every outline
    pub fn bounds(&self) -> Option<Bounds> {
        self.items
            .iter()
            .filter_map(|item| item.polygon.bounds())
            .reduce(|a, b| a.union(&b))
    }

    /// Distinct legend entries with the style they were first drawn in
    pub fn legend(&self) -> Vec<(&str, PieceStyle)> {
        let mut entries: Vec<(&str, PieceStyle)> = Vec::new();
        for item in &self.items {
            if !entries.iter().any(|(text, _)| *text == item.legend) {
                entries.push((item.legend.as_str(), item.style));
            }
        }
        entries
    }

    /// Major grid spacing in pattern units
    pub fn grid_step(&self) -> f64 {
        match self.unit {
            Unit::Centimeters => 10.0,
            Unit::Inches => 4.0,
        }
    }
}

fn piece_label(piece: &PatternPiece) -> Option<String> {
    match piece.kind {
        PieceKind::Front | PieceKind::Back => {
            Some(format!("{}\n(Cut {})", piece.label, piece.cut_count))
        }
        PieceKind::Waistband => {
            let length = piece.bounds().map(|b| b.width()).unwrap_or_default();
            Some(format!("{}\nL:{:.1}", piece.label, length))
        }
        PieceKind::PocketBag => Some(piece.label.replace(' ', "\n")),
        PieceKind::FrontDart | PieceKind::BackDart | PieceKind::FrontCut => None,
    }
}

fn legend_entry(piece: &PatternPiece, style: GarmentStyle) -> String {
    match piece.kind {
        PieceKind::Front if style == GarmentStyle::SkirtLike => "Sew Line".to_string(),
        PieceKind::Front => "Front".to_string(),
        PieceKind::Back => "Back".to_string(),
        PieceKind::Waistband => "Waistband".to_string(),
        PieceKind::PocketBag => "Pocket Bag".to_string(),
        PieceKind::FrontDart | PieceKind::BackDart => "Dart".to_string(),
        PieceKind::FrontCut => piece.label.clone(),
    }
}
