use crate::geometry::Point;
use crate::selection::PointerEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DragPhase {
    Begin,
    Update,
    End,
}

pub(super) fn motion_event(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Motion(Point::from_f64(x, y))
}

/// `GestureDrag` reports offsets from the press point; the tracker wants absolute points.
pub(super) fn drag_event(phase: DragPhase, origin: (f64, f64), offset: (f64, f64)) -> PointerEvent {
    let point = Point::from_f64(origin.0 + offset.0, origin.1 + offset.1);
    match phase {
        DragPhase::Begin => PointerEvent::PrimaryPress(point),
        DragPhase::Update => PointerEvent::PrimaryDrag(point),
        DragPhase::End => PointerEvent::PrimaryRelease(point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_event_adds_offset_to_press_origin() {
        assert_eq!(
            drag_event(DragPhase::Update, (100.0, 100.0), (200.4, 149.6)),
            PointerEvent::PrimaryDrag(Point::new(300, 250))
        );
        assert_eq!(
            drag_event(DragPhase::End, (500.0, 400.0), (-300.0, -300.0)),
            PointerEvent::PrimaryRelease(Point::new(200, 100))
        );
    }

    #[test]
    fn drag_begin_maps_to_press_at_origin() {
        assert_eq!(
            drag_event(DragPhase::Begin, (12.2, 7.8), (0.0, 0.0)),
            PointerEvent::PrimaryPress(Point::new(12, 8))
        );
    }

    #[test]
    fn motion_event_rounds_widget_coordinates() {
        assert_eq!(
            motion_event(0.49, 599.5),
            PointerEvent::Motion(Point::new(0, 600))
        );
    }
}
