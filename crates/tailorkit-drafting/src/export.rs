//! Document export
//!
//! Builds the downloadable document for a diagram entirely in memory. Every
//! call gets its own buffer and a file name carrying a fresh UUID, so two
//! exports for the same client never collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tailorkit_core::{Error, Result};
use tracing::{debug, info};
use uuid::Uuid;

use crate::diagram::Diagram;
use crate::renderer::{encode_png, render_image};
use crate::svg_renderer::{render_document, RenderOptions};

/// Document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Svg,
    Png,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            other => Err(Error::other(format!("Unsupported export format: {}", other))),
        }
    }
}

/// A rendered document held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the document into `dir` under its own file name.
    ///
    /// Fails rather than overwrite an existing file.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        file.write_all(&self.bytes)?;
        debug!("Saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Reduces a client name to characters safe in a file name.
///
/// Letters, digits, `-` and `_` are kept; whitespace runs become a single
/// `_`; anything else is dropped. An empty result falls back to `client`.
pub fn sanitize_client_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
        } else if c.is_whitespace() && !out.ends_with('_') {
            out.push('_');
        }
    }
    if out.is_empty() {
        "client".to_string()
    } else {
        out
    }
}

/// Renders `diagram` in `format` and wraps the bytes with a unique name.
pub fn export_document(
    diagram: &Diagram,
    client_name: &str,
    format: ExportFormat,
    options: &RenderOptions,
) -> Result<ExportedDocument> {
    let bytes = match format {
        ExportFormat::Svg => render_document(diagram, options).into_bytes(),
        ExportFormat::Png => encode_png(&render_image(diagram, options)?)?,
    };

    let file_name = format!(
        "{}_pattern_{}.{}",
        sanitize_client_name(client_name),
        Uuid::new_v4(),
        format.extension()
    );
    info!(file = %file_name, bytes = bytes.len(), "Exported pattern document");

    Ok(ExportedDocument {
        file_name,
        format,
        bytes,
    })
}
