//! Raster renderer for pattern diagrams
//! Renders a diagram to an image buffer using tiny-skia.
//!
//! Features:
//! - Anti-aliased outlines and translucent fills
//! - Dashed strokes for pocket bags and cut lines
//! - Optional grid and legend swatches
//!
//! Text is only drawn by the SVG renderer.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use tailorkit_core::{Error, Result};
use tiny_skia::{
    Color as SkiaColor, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform,
};

use crate::diagram::{Color, Diagram, DiagramItem, LineStyle};
use crate::svg_renderer::{RenderOptions, MAX_CANVAS_SIDE};
use crate::viewport::Viewport;

fn skia_color(color: Color, alpha: f64) -> SkiaColor {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    SkiaColor::from_rgba8(color.r, color.g, color.b, a)
}

fn draw_grid(pixmap: &mut Pixmap, viewport: &Viewport, step: f64) {
    let width = viewport.canvas_width();
    let height = viewport.canvas_height();
    let top_left = viewport.pixel_to_world(0.0, 0.0);
    let bottom_right = viewport.pixel_to_world(width, height);

    let mut step = step;
    while (bottom_right.x - top_left.x) / step > 100.0 || (top_left.y - bottom_right.y) / step > 100.0
    {
        step *= 10.0;
    }

    let mut pb = PathBuilder::new();
    let mut x = (top_left.x / step).ceil() * step;
    while x <= bottom_right.x {
        let (px, _) = viewport.world_to_pixel(x, 0.0);
        pb.move_to(px as f32, 0.0);
        pb.line_to(px as f32, height as f32);
        x += step;
    }
    let mut y = (bottom_right.y / step).ceil() * step;
    while y <= top_left.y {
        let (_, py) = viewport.world_to_pixel(0.0, y);
        pb.move_to(0.0, py as f32);
        pb.line_to(width as f32, py as f32);
        y += step;
    }

    if let Some(path) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color(skia_color(Color::GRID, 1.0));
        paint.anti_alias = false;
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn draw_item(pixmap: &mut Pixmap, item: &DiagramItem, transform: Transform, zoom: f32) {
    let mut pb = PathBuilder::new();
    for (i, p) in item.polygon.vertices().iter().enumerate() {
        if i == 0 {
            pb.move_to(p.x as f32, p.y as f32);
        } else {
            pb.line_to(p.x as f32, p.y as f32);
        }
    }
    pb.close();
    let Some(path) = pb.finish() else {
        return;
    };

    let style = &item.style;
    if let Some(fill) = style.fill {
        let mut paint = Paint::default();
        paint.set_color(skia_color(fill, style.fill_opacity));
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
    }

    let mut paint = Paint::default();
    paint.set_color(skia_color(style.stroke, 1.0));
    paint.anti_alias = true;
    // Widths are in pixels; the transform scales world units by `zoom`
    let mut stroke = Stroke {
        width: style.stroke_width as f32 / zoom,
        ..Default::default()
    };
    if style.line == LineStyle::Dashed {
        stroke.dash = StrokeDash::new(vec![8.0 / zoom, 4.0 / zoom], 0.0);
    }
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
}

fn draw_legend_swatches(pixmap: &mut Pixmap, diagram: &Diagram, options: &RenderOptions) {
    let entries = diagram.legend();
    let left = options.width as f32 - 40.0;
    for (i, (_, style)) in entries.iter().enumerate() {
        let top = 10.0 + i as f32 * 20.0;
        let Some(rect) = Rect::from_xywh(left, top, 28.0, 12.0) else {
            continue;
        };
        let path = PathBuilder::from_rect(rect);
        let mut paint = Paint::default();
        paint.set_color(skia_color(style.fill.unwrap_or(Color::WHITE), 1.0));
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        paint.set_color(skia_color(style.stroke, 1.0));
        let stroke = Stroke {
            width: 2.0,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

/// Renders `diagram` to an RGB image.
pub fn render_image(diagram: &Diagram, options: &RenderOptions) -> Result<RgbImage> {
    let width = options.width;
    let height = options.height;
    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(Error::render(format!(
            "canvas {}x{} exceeds {} pixels per side",
            width, height, MAX_CANVAS_SIDE
        )));
    }
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::render(format!("invalid canvas size {}x{}", width, height)))?;
    pixmap.fill(skia_color(Color::WHITE, 1.0));

    let viewport = options.viewport_for(diagram);
    if options.show_grid {
        draw_grid(&mut pixmap, &viewport, diagram.grid_step());
    }

    // pixel_x = world_x * zoom + pan_x
    // pixel_y = canvas_height - (world_y * zoom + pan_y)
    let zoom = viewport.zoom() as f32;
    let transform = Transform::from_scale(zoom, -zoom).post_translate(
        viewport.pan_x() as f32,
        height as f32 - viewport.pan_y() as f32,
    );
    for item in &diagram.items {
        draw_item(&mut pixmap, item, transform, zoom);
    }

    if options.show_legend {
        draw_legend_swatches(&mut pixmap, diagram, options);
    }

    // Background is opaque, so premultiplied channels equal the straight ones
    let data = pixmap.data();
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let idx = (y as usize * width as usize + x as usize) * 4;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    }))
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::render(format!("PNG encoding failed: {}", e)))?;
    Ok(bytes)
}
