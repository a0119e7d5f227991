use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::state::{GestureEvent, GestureMachine, GestureState};
use crate::surface::{SharedSurface, ShapeId, Surface};
use crate::ui::LineStyle;

/// Receives `(start, end)` on every drag motion.
pub type SelectionCallback = Box<dyn FnMut(Point, Point)>;

/// Diagonal corners of the in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Selection {
    pub const EMPTY: Self = Self {
        start: None,
        end: None,
    };

    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn corners(&self) -> Option<(Point, Point)> {
        Some((self.start?, self.end?))
    }
}

/// Which pointer event anchors the selection start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeginTrigger {
    /// Every bare pointer motion re-anchors; the press point is the last hover point.
    #[default]
    Hover,
    /// Hover only moves the crosshair; the primary press anchors.
    Press,
}

/// Raw pointer input as delivered by the surface, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Motion(Point),
    PrimaryPress(Point),
    PrimaryDrag(Point),
    PrimaryRelease(Point),
}

#[derive(Debug, Clone, Copy)]
struct Crosshair {
    vertical: ShapeId,
    horizontal: ShapeId,
}

pub struct PositionTracker<S: Surface> {
    surface: SharedSurface<S>,
    crosshair: Crosshair,
    selection: Selection,
    machine: GestureMachine,
    trigger: BeginTrigger,
    primary_held: bool,
    command: SelectionCallback,
}

impl<S: Surface> PositionTracker<S> {
    pub fn new(surface: SharedSurface<S>, style: LineStyle, trigger: BeginTrigger) -> Self {
        let crosshair = {
            let mut canvas = surface.borrow_mut();
            let size = canvas.size();
            Crosshair {
                vertical: canvas.create_line([0, 0, 0, size.height], style),
                horizontal: canvas.create_line([0, 0, size.width, 0], style),
            }
        };

        Self {
            surface,
            crosshair,
            selection: Selection::EMPTY,
            machine: GestureMachine::new(),
            trigger,
            primary_held: false,
            command: Box::new(|_, _| {}),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn state(&self) -> GestureState {
        self.machine.state()
    }

    pub fn trigger(&self) -> BeginTrigger {
        self.trigger
    }

    /// Replaces the drag callback and clears any in-progress selection.
    pub fn enable<F>(&mut self, command: F)
    where
        F: FnMut(Point, Point) + 'static,
    {
        self.clear();
        self.command = Box::new(command);
    }

    pub fn begin(&mut self, point: Point) {
        // Begin is accepted from every state.
        let _ = self.machine.transition(GestureEvent::Begin);
        self.selection = Selection {
            start: Some(point),
            end: None,
        };
        self.move_crosshair(point);
    }

    pub fn hover(&mut self, point: Point) {
        self.move_crosshair(point);
    }

    pub fn drag(&mut self, point: Point) {
        let Some(start) = self.selection.start else {
            tracing::debug!(?point, "drag without an anchored selection; ignoring");
            return;
        };
        if self.machine.transition(GestureEvent::Drag).is_err() {
            return;
        }

        self.selection.end = Some(point);
        self.move_crosshair(point);
        // No surface borrow may be held here; the callback redraws the overlay.
        (self.command)(start, point);
    }

    pub fn release(&mut self, point: Point) {
        if let Some((start, end)) = self.selection.corners() {
            tracing::debug!(?start, ?end, ?point, "selection gesture released");
        }
        self.clear();
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            // The surface reports held-button motion again as a drag.
            PointerEvent::Motion(_) if self.primary_held => {}
            PointerEvent::Motion(point) => match self.trigger {
                BeginTrigger::Hover => self.begin(point),
                BeginTrigger::Press => self.hover(point),
            },
            PointerEvent::PrimaryPress(point) => {
                self.primary_held = true;
                self.begin(point);
            }
            PointerEvent::PrimaryDrag(point) => self.drag(point),
            PointerEvent::PrimaryRelease(point) => {
                self.primary_held = false;
                self.release(point);
            }
        }
    }

    fn clear(&mut self) {
        let _ = self.machine.transition(GestureEvent::Release);
        self.selection = Selection::EMPTY;
    }

    fn move_crosshair(&self, point: Point) {
        let mut canvas = self.surface.borrow_mut();
        let size = canvas.size();
        canvas.set_coords(self.crosshair.vertical, [point.x, 0, point.x, size.height]);
        canvas.set_coords(self.crosshair.horizontal, [0, point.y, size.width, point.y]);
    }
}

impl<S: Surface> std::fmt::Debug for PositionTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionTracker")
            .field("selection", &self.selection)
            .field("state", &self.machine.state())
            .field("trigger", &self.trigger)
            .field("primary_held", &self.primary_held)
            .finish_non_exhaustive()
    }
}
