//! SVG renderer for pattern diagrams
//!
//! Produces a standalone SVG document:
//! - light grid in pattern units
//! - one filled/stroked path per piece
//! - centred multi-line piece labels
//! - title, notes and legend

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::diagram::{Color, Diagram, DiagramItem, LineStyle, PieceStyle};
use crate::viewport::Viewport;

const MAX_GRID_LINES: usize = 100;
const LABEL_FONT_SIZE: f64 = 14.0;
const TITLE_FONT_SIZE: f64 = 18.0;
const LEGEND_FONT_SIZE: f64 = 12.0;

/// Largest canvas side, in pixels, either renderer accepts
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Output size and decorations shared by the SVG and PNG renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Fraction of the canvas kept free on each side
    pub padding: f64,
    pub show_grid: bool,
    pub show_legend: bool,
    /// Generation timestamp in the SVG metadata
    pub include_timestamp: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            padding: 0.08,
            show_grid: true,
            show_legend: true,
            include_timestamp: true,
        }
    }
}

impl RenderOptions {
    /// The viewport fitting `diagram` into this canvas
    pub fn viewport_for(&self, diagram: &Diagram) -> Viewport {
        match diagram.bounds() {
            Some(bounds) => {
                Viewport::fitted(self.width as f64, self.height as f64, &bounds, self.padding)
            }
            None => Viewport::new(self.width as f64, self.height as f64),
        }
    }
}

/// Escapes text for element content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders an outline as SVG path commands in pixel space
pub fn render_outline(item: &DiagramItem, viewport: &Viewport) -> String {
    let mut path = String::new();
    for (i, point) in item.polygon.vertices().iter().enumerate() {
        let (x, y) = viewport.world_point_to_pixel(point);
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{} {:.2} {:.2} ", cmd, x, y);
    }
    if !path.is_empty() {
        path.push('Z');
    }
    path
}

/// Renders the grid as SVG path commands covering the whole canvas
pub fn render_grid(viewport: &Viewport, base_step: f64) -> String {
    let width = viewport.canvas_width();
    let height = viewport.canvas_height();
    let top_left = viewport.pixel_to_world(0.0, 0.0);
    let bottom_right = viewport.pixel_to_world(width, height);

    let world_left = top_left.x.min(bottom_right.x);
    let world_right = top_left.x.max(bottom_right.x);
    let world_bottom = top_left.y.min(bottom_right.y);
    let world_top = top_left.y.max(bottom_right.y);

    // Widen the step until the grid is no denser than MAX_GRID_LINES
    let mut step = base_step;
    while (world_right - world_left) / step > MAX_GRID_LINES as f64
        || (world_top - world_bottom) / step > MAX_GRID_LINES as f64
    {
        step *= 10.0;
    }

    let mut path = String::new();
    let mut x = (world_left / step).ceil() * step;
    while x <= world_right {
        let (px, _) = viewport.world_to_pixel(x, 0.0);
        let _ = write!(path, "M {:.2} 0 L {:.2} {} ", px, px, height);
        x += step;
    }
    let mut y = (world_bottom / step).ceil() * step;
    while y <= world_top {
        let (_, py) = viewport.world_to_pixel(0.0, y);
        let _ = write!(path, "M 0 {:.2} L {} {:.2} ", py, width, py);
        y += step;
    }
    path
}

fn style_attributes(style: &PieceStyle) -> String {
    let mut attrs = format!(
        "stroke=\"{}\" stroke-width=\"{}\"",
        style.stroke.to_hex(),
        style.stroke_width
    );
    match style.fill {
        Some(fill) => {
            let _ = write!(
                attrs,
                " fill=\"{}\" fill-opacity=\"{}\"",
                fill.to_hex(),
                style.fill_opacity
            );
        }
        None => attrs.push_str(" fill=\"none\""),
    }
    if style.line == LineStyle::Dashed {
        attrs.push_str(" stroke-dasharray=\"8 4\"");
    }
    attrs
}

fn render_label(out: &mut String, text: &str, x: f64, y: f64) {
    let lines: Vec<&str> = text.lines().collect();
    // Centre the block vertically on the anchor
    let first_dy = -(lines.len() as f64 - 1.0) / 2.0 * 1.2;
    let _ = write!(
        out,
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
         font-family=\"sans-serif\" font-size=\"{}\" font-weight=\"bold\">",
        x, y, LABEL_FONT_SIZE
    );
    for (i, line) in lines.iter().enumerate() {
        let dy = if i == 0 { first_dy } else { 1.2 };
        let _ = write!(
            out,
            "<tspan x=\"{:.2}\" dy=\"{:.2}em\">{}</tspan>",
            x,
            dy,
            escape_xml(line)
        );
    }
    out.push_str("</text>\n");
}

fn render_legend(out: &mut String, diagram: &Diagram, options: &RenderOptions) {
    let entries = diagram.legend();
    if entries.is_empty() {
        return;
    }

    let row = LEGEND_FONT_SIZE * 1.6;
    let box_width = 190.0;
    let box_height = row * entries.len() as f64 + 12.0;
    let left = options.width as f64 - box_width - 10.0;
    let top = 10.0;

    let _ = writeln!(
        out,
        "  <g class=\"legend\">\n    <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{}\" height=\"{:.2}\" \
         fill=\"{}\" fill-opacity=\"0.9\" stroke=\"{}\"/>",
        left,
        top,
        box_width,
        box_height,
        Color::WHITE.to_hex(),
        Color::GRID.to_hex()
    );
    for (i, (text, style)) in entries.iter().enumerate() {
        let y = top + 6.0 + row * (i as f64 + 0.5);
        let _ = writeln!(
            out,
            "    <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            left + 8.0,
            y,
            left + 36.0,
            y,
            style_attributes(&PieceStyle {
                fill: None,
                ..*style
            })
        );
        let _ = writeln!(
            out,
            "    <text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\" font-family=\"sans-serif\" \
             font-size=\"{}\">{}</text>",
            left + 44.0,
            y,
            LEGEND_FONT_SIZE,
            escape_xml(text)
        );
    }
    out.push_str("  </g>\n");
}

/// Renders `diagram` as a complete SVG document.
pub fn render_document(diagram: &Diagram, options: &RenderOptions) -> String {
    let viewport = options.viewport_for(diagram);
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = options.width,
        h = options.height
    );
    let _ = writeln!(out, "  <title>{}</title>", escape_xml(&diagram.title));
    if options.include_timestamp {
        let _ = writeln!(
            out,
            "  <desc>Drafted in {} on {}</desc>",
            diagram.unit,
            chrono::Utc::now().to_rfc3339()
        );
    }
    let _ = writeln!(
        out,
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        Color::WHITE.to_hex()
    );

    if options.show_grid {
        let _ = writeln!(
            out,
            "  <path class=\"grid\" d=\"{}\" stroke=\"{}\" stroke-width=\"0.5\" fill=\"none\"/>",
            render_grid(&viewport, diagram.grid_step()).trim_end(),
            Color::GRID.to_hex()
        );
    }

    for item in &diagram.items {
        let _ = writeln!(
            out,
            "  <path class=\"piece {}\" d=\"{}\" {} stroke-linejoin=\"round\"/>",
            item.kind,
            render_outline(item, &viewport),
            style_attributes(&item.style)
        );
    }

    for item in &diagram.items {
        if let Some(label) = &item.label {
            let (x, y) = viewport.world_point_to_pixel(&item.label_at);
            render_label(&mut out, label, x, y);
        }
    }

    let _ = writeln!(
        out,
        "  <text x=\"10\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" font-weight=\"bold\">{}</text>",
        TITLE_FONT_SIZE + 6.0,
        TITLE_FONT_SIZE,
        escape_xml(&diagram.title)
    );
    for (i, note) in diagram.notes.iter().enumerate() {
        let _ = writeln!(
            out,
            "  <text x=\"10\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"{}\">{}</text>",
            TITLE_FONT_SIZE + 6.0 + LEGEND_FONT_SIZE * 1.5 * (i as f64 + 1.0),
            LEGEND_FONT_SIZE,
            escape_xml(note)
        );
    }

    if options.show_legend {
        render_legend(&mut out, diagram, options);
    }

    out.push_str("</svg>\n");
    out
}
