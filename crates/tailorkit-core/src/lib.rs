//! # TailorKit Core
//!
//! Core types and utilities shared by the TailorKit crates:
//! measurement units, 2-D geometry, the quadratic Bezier sampler used for
//! curved seams, and the error taxonomy.

pub mod bezier;
pub mod error;
pub mod geometry;
pub mod units;

pub use bezier::{
    check_resolution, sample_quadratic, QuadraticBezier, DEFAULT_RESOLUTION, MAX_RESOLUTION,
};
pub use error::{DraftingError, Error, Result};
pub use geometry::{Bounds, Point, Polygon, PolygonBuilder};
pub use units::{format_allowance, format_length, parse_length, FabricUnit, Unit};
