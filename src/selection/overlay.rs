use crate::geometry::{OverlayGeometry, Point, Rect, SurfaceSize};
use crate::surface::{SharedSurface, ShapeId, Surface};
use crate::ui::OverlayStyle;

/// Degenerate corner rectangle the shapes are created around before any selection.
const INITIAL_INNER: Rect = Rect::new(0, 0, 1, 1);

/// Four mask panels around an outlined inner rectangle.
///
/// Shapes are created hidden and become visible on the first [`update`](Self::update).
/// Corner points are taken as-is: a drag past the surface edge yields an
/// inner rectangle that extends beyond it.
pub struct SelectionOverlay<S: Surface> {
    surface: SharedSurface<S>,
    size: SurfaceSize,
    // top, left, right, bottom, inner
    shapes: [ShapeId; 5],
    geometry: OverlayGeometry,
    shown: bool,
}

impl<S: Surface> SelectionOverlay<S> {
    pub fn new(surface: SharedSurface<S>, style: &OverlayStyle) -> Self {
        let (size, geometry, shapes) = {
            let mut canvas = surface.borrow_mut();
            let size = canvas.size();
            let geometry = OverlayGeometry::compute(INITIAL_INNER, size);
            let [top, left, right, bottom] = geometry
                .masks()
                .map(|mask| canvas.create_rectangle(mask.coords(), style.mask));
            let inner = canvas.create_rectangle(geometry.inner.coords(), style.inner);
            let shapes = [top, left, right, bottom, inner];
            for id in shapes {
                canvas.set_visible(id, false);
            }
            (size, geometry, shapes)
        };

        Self {
            surface,
            size,
            shapes,
            geometry,
            shown: false,
        }
    }

    pub fn update(&mut self, start: Point, end: Point) {
        self.geometry = OverlayGeometry::compute(Rect::from_corners(start, end), self.size);
        self.shown = true;

        let mut canvas = self.surface.borrow_mut();
        for (id, rect) in self.shapes.into_iter().zip(self.geometry.tiles()) {
            canvas.set_coords(id, rect.coords());
            canvas.set_visible(id, true);
        }
    }

    pub fn hide(&mut self) {
        self.shown = false;
        let mut canvas = self.surface.borrow_mut();
        for id in self.shapes {
            canvas.set_visible(id, false);
        }
    }

    pub fn geometry(&self) -> Option<OverlayGeometry> {
        self.shown.then_some(self.geometry)
    }

    pub fn selected_rect(&self) -> Option<Rect> {
        self.geometry().map(|geometry| geometry.inner)
    }
}

impl<S: Surface> std::fmt::Debug for SelectionOverlay<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionOverlay")
            .field("size", &self.size)
            .field("geometry", &self.geometry)
            .field("shown", &self.shown)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::surface::{Shape, ShapeCanvas, ShapeKind};

    fn overlay() -> (Rc<RefCell<ShapeCanvas>>, SelectionOverlay<ShapeCanvas>) {
        let canvas = Rc::new(RefCell::new(ShapeCanvas::new(SurfaceSize::new(800, 600))));
        let overlay = SelectionOverlay::new(canvas.clone(), &OverlayStyle::default());
        (canvas, overlay)
    }

    fn rect_shapes(canvas: &RefCell<ShapeCanvas>) -> Vec<Shape> {
        canvas
            .borrow()
            .shapes()
            .iter()
            .filter(|shape| matches!(shape.kind, ShapeKind::Rectangle(_)))
            .copied()
            .collect()
    }

    #[test]
    fn new_overlay_creates_five_hidden_shapes_around_corner() {
        let (canvas, overlay) = overlay();
        let shapes = rect_shapes(&canvas);

        assert_eq!(shapes.len(), 5);
        assert!(shapes.iter().all(|shape| !shape.visible));
        assert_eq!(shapes[4].coords, [0, 0, 1, 1]);
        assert_eq!(shapes[0].coords, [0, 0, 800, 0]);
        assert_eq!(shapes[3].coords, [0, 1, 800, 600]);
        assert_eq!(overlay.geometry(), None);
    }

    #[test]
    fn update_repositions_and_shows_every_shape() {
        let (canvas, mut overlay) = overlay();
        overlay.update(Point::new(300, 250), Point::new(100, 100));

        let shapes = rect_shapes(&canvas);
        assert!(shapes.iter().all(|shape| shape.visible));
        let coords: Vec<[i32; 4]> = shapes.iter().map(|shape| shape.coords).collect();
        assert_eq!(
            coords,
            vec![
                [0, 0, 800, 100],
                [0, 100, 100, 250],
                [300, 100, 800, 250],
                [0, 250, 800, 600],
                [100, 100, 300, 250],
            ]
        );
    }

    #[test]
    fn update_is_idempotent_for_identical_corners() {
        let (canvas, mut overlay) = overlay();
        overlay.update(Point::new(10, 600), Point::new(790, 0));
        let first = rect_shapes(&canvas);
        let first_geometry = overlay.geometry();

        overlay.update(Point::new(10, 600), Point::new(790, 0));

        assert_eq!(rect_shapes(&canvas), first);
        assert_eq!(overlay.geometry(), first_geometry);
    }

    #[test]
    fn mask_styles_differ_from_inner_style() {
        let (canvas, _overlay) = overlay();
        let style = OverlayStyle::default();
        let kinds: Vec<ShapeKind> = rect_shapes(&canvas).iter().map(|shape| shape.kind).collect();

        assert!(kinds[..4]
            .iter()
            .all(|kind| *kind == ShapeKind::Rectangle(style.mask)));
        assert_eq!(kinds[4], ShapeKind::Rectangle(style.inner));
    }

    #[test]
    fn hide_keeps_geometry_but_reports_no_selection() {
        let (canvas, mut overlay) = overlay();
        overlay.update(Point::new(1, 2), Point::new(3, 4));
        overlay.hide();

        assert!(rect_shapes(&canvas).iter().all(|shape| !shape.visible));
        assert_eq!(overlay.selected_rect(), None);
    }
}
