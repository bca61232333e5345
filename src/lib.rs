//! # TailorKit
//!
//! Sewing pattern drafting from three body measurements:
//! - Pants blocks, with optional waistband, pocket bag and darts
//! - Flared skirt blocks with a seam allowance cut line
//! - Fabric yardage estimates
//! - SVG and PNG pattern diagrams with unique export names
//!
//! ## Architecture
//!
//! TailorKit is organized as a workspace with multiple crates:
//!
//! 1. **tailorkit-core** - Units, geometry, Bezier sampling, errors
//! 2. **tailorkit-drafting** - Pattern assembly, fabric estimate, diagrams, export
//! 3. **tailorkit-settings** - JSON/TOML configuration
//! 4. **tailorkit** - Command-line binary that integrates all crates

pub use tailorkit_core::{
    format_length, parse_length, sample_quadratic, Bounds, DraftingError, Error, FabricUnit, Point,
    Polygon, QuadraticBezier, Result, Unit,
};

pub use tailorkit_drafting::{
    estimate_fabric, estimate_for, export_document, generate, Anchor, ConstantTable, Diagram,
    DraftRequest, ExportFormat, ExportedDocument, FabricEstimate, GarmentStyle, Measurements,
    PatternAssembler, PatternPiece, PatternSet, PieceKind, RenderOptions,
};

pub use tailorkit_settings::{default_config_path, Config, SettingsError};

use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Everything one drafting run produces
#[derive(Debug, Clone)]
pub struct DraftOutcome {
    pub set: PatternSet,
    pub fabric: FabricEstimate,
    pub document: ExportedDocument,
}

/// Drafts `request` with `config` and renders the diagram in `format`.
///
/// Nothing is written to disk; call [`ExportedDocument::save_in`] to keep it.
pub fn draft_pattern(
    config: &Config,
    request: &DraftRequest,
    format: ExportFormat,
) -> Result<DraftOutcome> {
    let set = config.assembler().generate(request)?;
    let fabric = estimate_for(&set, &config.constants);
    let m = request.measurements;
    let client = &config.drafting.client_name;

    let diagram = Diagram::from_pattern_set(&set, &format!("Pattern for {}", client))
        .with_note(format!(
            "Waist {} / Hips {} / Length {}",
            format_length(m.waist(), request.unit),
            format_length(m.hips(), request.unit),
            format_length(m.length(), request.unit)
        ))
        .with_note(format!("Fabric needed: {}", fabric));
    let document = export_document(&diagram, client, format, &config.export.render)?;

    info!(
        style = %request.style,
        pieces = set.len(),
        fabric = %fabric,
        "Drafted pattern"
    );
    Ok(DraftOutcome {
        set,
        fabric,
        document,
    })
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for command results
/// - RUST_LOG environment variable support, falling back to `info`
///   (`debug` when `verbose`)
/// - JSON lines instead of text when `json` is set
pub fn init_logging(verbose: bool, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(verbose)
            .with_level(true)
            .with_line_number(verbose);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
