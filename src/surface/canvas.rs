use crate::geometry::SurfaceSize;
use crate::ui::{LineStyle, RectStyle};

use super::{Coords, ShapeId, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line(LineStyle),
    Rectangle(RectStyle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub coords: Coords,
    pub visible: bool,
}

/// In-memory retained shape list, painted in creation order.
#[derive(Debug, Clone)]
pub struct ShapeCanvas {
    size: SurfaceSize,
    shapes: Vec<Shape>,
}

impl ShapeCanvas {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            shapes: Vec::new(),
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|shape| shape.visible)
    }

    fn push(&mut self, kind: ShapeKind, coords: Coords) -> ShapeId {
        let id = ShapeId(self.shapes.len());
        self.shapes.push(Shape {
            kind,
            coords,
            visible: true,
        });
        id
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        let shape = self.shapes.get_mut(id.index());
        if shape.is_none() {
            tracing::warn!(?id, "ignoring update for unknown canvas shape");
        }
        shape
    }
}

impl Surface for ShapeCanvas {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn create_line(&mut self, coords: Coords, style: LineStyle) -> ShapeId {
        self.push(ShapeKind::Line(style), coords)
    }

    fn create_rectangle(&mut self, coords: Coords, style: RectStyle) -> ShapeId {
        self.push(ShapeKind::Rectangle(style), coords)
    }

    fn set_coords(&mut self, id: ShapeId, coords: Coords) {
        if let Some(shape) = self.shape_mut(id) {
            shape.coords = coords;
        }
    }

    fn set_visible(&mut self, id: ShapeId, visible: bool) {
        if let Some(shape) = self.shape_mut(id) {
            shape.visible = visible;
        }
    }
}
