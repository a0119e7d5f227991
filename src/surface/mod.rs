//! Drawable surface contract shared by the selection widgets.
//!
//! Shapes are created once and then moved around by coordinate list, the
//! same way a retained-mode canvas works. The GTK drawing area renders a
//! [`ShapeCanvas`]; tests drive one directly.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::SurfaceSize;
use crate::ui::{LineStyle, RectStyle};

mod canvas;

pub use canvas::{Shape, ShapeCanvas, ShapeKind};

/// Coordinate list `[x0, y0, x1, y1]` in surface space.
pub type Coords = [i32; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    pub const fn index(self) -> usize {
        self.0
    }
}

pub trait Surface {
    fn size(&self) -> SurfaceSize;
    fn create_line(&mut self, coords: Coords, style: LineStyle) -> ShapeId;
    fn create_rectangle(&mut self, coords: Coords, style: RectStyle) -> ShapeId;
    fn set_coords(&mut self, id: ShapeId, coords: Coords);
    fn set_visible(&mut self, id: ShapeId, visible: bool);
}

/// Surface handle shared between the tracker, the overlay, and the renderer.
pub type SharedSurface<S> = Rc<RefCell<S>>;
