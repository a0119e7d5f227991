//! Shared geometric and color primitives used by the selection widgets and the canvas.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounds widget-space coordinates to the nearest pixel.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(x.round() as i32, y.round() as i32)
    }
}

/// Drawable surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: i32,
    pub height: i32,
}

impl SurfaceSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn bounds(self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Axis-aligned rectangle stored as its extrema, `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Canonical rectangle spanned by two diagonal corners, in either order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    pub const fn width(self) -> i32 {
        self.max_x - self.min_x
    }

    pub const fn height(self) -> i32 {
        self.max_y - self.min_y
    }

    pub fn area(self) -> i64 {
        i64::from(self.width().max(0)) * i64::from(self.height().max(0))
    }

    pub fn intersection_area(self, other: Rect) -> i64 {
        let overlap = Rect::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        );
        if overlap.width() <= 0 || overlap.height() <= 0 {
            return 0;
        }
        overlap.area()
    }

    /// Coordinate list in surface order: `[x0, y0, x1, y1]`.
    pub const fn coords(self) -> [i32; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

/// The five rectangles that dim everything outside a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGeometry {
    pub top: Rect,
    pub left: Rect,
    pub right: Rect,
    pub bottom: Rect,
    pub inner: Rect,
}

impl OverlayGeometry {
    pub fn compute(inner: Rect, surface: SurfaceSize) -> Self {
        let outer = surface.bounds();
        Self {
            top: Rect::new(outer.min_x, outer.min_y, outer.max_x, inner.min_y),
            left: Rect::new(outer.min_x, inner.min_y, inner.min_x, inner.max_y),
            right: Rect::new(inner.max_x, inner.min_y, outer.max_x, inner.max_y),
            bottom: Rect::new(outer.min_x, inner.max_y, outer.max_x, outer.max_y),
            inner,
        }
    }

    pub const fn masks(&self) -> [Rect; 4] {
        [self.top, self.left, self.right, self.bottom]
    }

    /// Masks followed by the inner rectangle, in shape creation order.
    pub const fn tiles(&self) -> [Rect; 5] {
        [self.top, self.left, self.right, self.bottom, self.inner]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Channels scaled to `0.0..=1.0` for cairo.
    pub fn unit_rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}
