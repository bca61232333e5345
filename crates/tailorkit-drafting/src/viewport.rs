//! Viewport and coordinate transformation for diagram rendering.
//!
//! Pattern space has +Y pointing up toward the waist; image space has +Y
//! pointing down. The viewport maps one onto the other with a zoom and a
//! pan offset.

use std::fmt;
use tailorkit_core::{Bounds, Point};

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 50.0;

/// Zoom and pan for one canvas size
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport with (0,0) near the bottom-left corner.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        const MARGIN: f64 = 5.0;
        Self {
            zoom: 1.0,
            pan_x: MARGIN,
            pan_y: MARGIN,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Pixels per pattern unit
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, ignored outside 0.1..50.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Converts pixel coordinates (0,0 top-left) to pattern coordinates.
    ///
    /// ```text
    /// world_x = (pixel_x - pan_x) / zoom
    /// world_y = (canvas_height - pixel_y - pan_y) / zoom
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        let world_x = (pixel_x - self.pan_x) / self.zoom;
        let world_y = (self.canvas_height - pixel_y - self.pan_y) / self.zoom;
        Point::new(world_x, world_y)
    }

    /// Converts pattern coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel_x = world_x * zoom + pan_x
    /// pixel_y = canvas_height - (world_y * zoom + pan_y)
    /// ```
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        let pixel_x = world_x * self.zoom + self.pan_x;
        let pixel_y = self.canvas_height - (world_y * self.zoom + self.pan_y);
        (pixel_x, pixel_y)
    }

    pub fn world_point_to_pixel(&self, point: &Point) -> (f64, f64) {
        self.world_to_pixel(point.x, point.y)
    }

    /// Centers `bounds` in the canvas, leaving `padding` (fraction of the
    /// canvas, 0.0 - 0.5) free on every side.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, padding: f64) {
        let width = bounds.width();
        let height = bounds.height();
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / width;
        let zoom_y = (self.canvas_height * padding_factor) / height;
        let new_zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);

        let content_pixel_width = width * new_zoom;
        let content_pixel_height = height * new_zoom;
        let left = self.canvas_width / 2.0 - content_pixel_width / 2.0;
        let top = self.canvas_height / 2.0 - content_pixel_height / 2.0;

        // pan_y = canvas_height - pixel_y - world_y * zoom, taken at the bottom edge
        self.zoom = new_zoom;
        self.pan_x = left - bounds.min_x * new_zoom;
        self.pan_y = self.canvas_height - top - content_pixel_height - bounds.min_y * new_zoom;
    }

    /// A viewport of the given size already fitted to `bounds`
    pub fn fitted(canvas_width: f64, canvas_height: f64, bounds: &Bounds, padding: f64) -> Self {
        let mut viewport = Self::new(canvas_width, canvas_height);
        viewport.fit_to_bounds(bounds, padding);
        viewport
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
