//! # TailorKit Drafting
//!
//! Turns three body measurements into sewing-pattern outlines and the
//! documents that present them.
//!
//! ## Components
//!
//! - **Constants**: unit-keyed tables of eases, dart sizes and layout gaps
//! - **Measurements**: validated waist/hips/length plus unit and style
//! - **Assembler**: anchor derivation and polygon assembly per garment style
//! - **Fabric**: yardage estimate
//! - **Diagram**: styled, labeled outlines ready to draw
//! - **Rendering**: SVG text and tiny-skia raster output
//! - **Export**: in-memory documents with unique file names
//!
//! ## Pipeline
//!
//! ```text
//! DraftRequest ──► PatternAssembler ──► PatternSet
//!                                          │
//!                                          ├──► estimate_for ──► FabricEstimate
//!                                          └──► Diagram ──► export_document ──► bytes
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tailorkit_drafting::{generate_with_defaults, DraftRequest, Diagram};
//!
//! let request = DraftRequest::parse(80.0, 100.0, 105.0, "cm", "pants")?;
//! let set = generate_with_defaults(&request)?;
//! let diagram = Diagram::from_pattern_set(&set, "Pattern");
//! ```

pub mod assembler;
pub mod constants;
pub mod diagram;
pub mod export;
pub mod fabric;
pub mod measurements;
pub mod pieces;
pub mod renderer;
pub mod svg_renderer;
pub mod viewport;

pub use assembler::{generate, generate_with_defaults, PatternAssembler};
pub use constants::{
    ConstantTable, ExtrasConstants, FabricConstants, PantsConstants, SkirtConstants,
    UnitConstants,
};
pub use diagram::{Color, Diagram, DiagramItem, LineStyle, PieceStyle};
pub use export::{export_document, sanitize_client_name, ExportFormat, ExportedDocument};
pub use fabric::{estimate_fabric, estimate_for, FabricEstimate, FabricLayout};
pub use measurements::{DraftRequest, GarmentStyle, Measurements};
pub use pieces::{Anchor, DerivedMeasures, PatternPiece, PatternSet, PieceKind};
pub use renderer::{encode_png, render_image};
pub use svg_renderer::{render_document, RenderOptions, MAX_CANVAS_SIDE};
pub use viewport::Viewport;
