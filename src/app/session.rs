use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::AnnotatorSettings;
use crate::error::AppResult;
use crate::geometry::Rect;
use crate::images::ImageList;
use crate::selection::{PointerEvent, PositionTracker, SelectionOverlay};
use crate::storage::save_selection;
use crate::surface::ShapeCanvas;

/// Toolkit-independent annotation state behind the window.
pub(super) struct AnnotationSession {
    canvas: Rc<RefCell<ShapeCanvas>>,
    tracker: PositionTracker<ShapeCanvas>,
    overlay: Rc<RefCell<SelectionOverlay<ShapeCanvas>>>,
    images: Option<ImageList>,
    image_extensions: Vec<String>,
}

impl AnnotationSession {
    pub(super) fn new(settings: &AnnotatorSettings) -> Self {
        let canvas = Rc::new(RefCell::new(ShapeCanvas::new(settings.canvas_size)));
        let overlay = Rc::new(RefCell::new(SelectionOverlay::new(
            canvas.clone(),
            &settings.overlay,
        )));
        let mut tracker =
            PositionTracker::new(canvas.clone(), settings.crosshair, settings.begin_trigger);

        let overlay_for_drag = overlay.clone();
        tracker.enable(move |start, end| overlay_for_drag.borrow_mut().update(start, end));

        Self {
            canvas,
            tracker,
            overlay,
            images: None,
            image_extensions: settings.image_extensions.clone(),
        }
    }

    pub(super) fn canvas(&self) -> Rc<RefCell<ShapeCanvas>> {
        self.canvas.clone()
    }

    pub(super) fn image_extensions(&self) -> &[String] {
        &self.image_extensions
    }

    pub(super) fn handle_pointer(&mut self, event: PointerEvent) {
        self.tracker.handle(event);
    }

    pub(super) fn selected_rect(&self) -> Option<Rect> {
        self.overlay.borrow().selected_rect()
    }

    pub(super) fn current_image(&self) -> Option<&Path> {
        self.images.as_ref().map(ImageList::current)
    }

    /// Position label such as `3/12`.
    pub(super) fn position_label(&self) -> Option<String> {
        self.images
            .as_ref()
            .map(|images| format!("{}/{}", images.index() + 1, images.len()))
    }

    pub(super) fn open(&mut self, selected: Vec<PathBuf>) -> AppResult<PathBuf> {
        let images = ImageList::from_selection(selected, &self.image_extensions)?;
        let current = images.current().to_path_buf();
        self.images = Some(images);
        self.overlay.borrow_mut().hide();
        Ok(current)
    }

    pub(super) fn next(&mut self) -> Option<PathBuf> {
        self.step(ImageList::next)
    }

    pub(super) fn previous(&mut self) -> Option<PathBuf> {
        self.step(ImageList::previous)
    }

    fn step(&mut self, advance: fn(&mut ImageList) -> bool) -> Option<PathBuf> {
        let images = self.images.as_mut()?;
        if !advance(images) {
            tracing::debug!(index = images.index(), "image navigation at list boundary");
            return None;
        }
        let current = images.current().to_path_buf();
        self.overlay.borrow_mut().hide();
        Some(current)
    }

    pub(super) fn save_to(&self, target: &Path) -> AppResult<PathBuf> {
        let written = save_selection(target, self.current_image(), self.selected_rect())?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, SurfaceSize};
    use crate::storage::StorageError;
    use crate::AppError;

    fn settings() -> AnnotatorSettings {
        AnnotatorSettings {
            canvas_size: SurfaceSize::new(800, 600),
            ..AnnotatorSettings::default()
        }
    }

    fn drag(session: &mut AnnotationSession, from: Point, to: Point) {
        session.handle_pointer(PointerEvent::Motion(from));
        session.handle_pointer(PointerEvent::PrimaryPress(from));
        session.handle_pointer(PointerEvent::PrimaryDrag(to));
        session.handle_pointer(PointerEvent::PrimaryRelease(to));
    }

    #[test]
    fn pointer_gesture_drives_overlay_through_wired_callback() {
        let mut session = AnnotationSession::new(&settings());
        drag(&mut session, Point::new(500, 400), Point::new(200, 100));

        assert_eq!(session.selected_rect(), Some(Rect::new(200, 100, 500, 400)));
        // crosshair pair plus five overlay shapes
        assert_eq!(session.canvas().borrow().visible_shapes().count(), 7);
    }

    #[test]
    fn navigation_without_images_is_a_no_op() {
        let mut session = AnnotationSession::new(&settings());
        assert_eq!(session.next(), None);
        assert_eq!(session.previous(), None);
        assert_eq!(session.position_label(), None);
    }

    #[test]
    fn changing_image_hides_previous_selection() {
        let mut session = AnnotationSession::new(&settings());
        let opened = session
            .open(vec![PathBuf::from("/x/a.jpg"), PathBuf::from("/x/b.jpg")])
            .expect("two files should open");
        assert_eq!(opened, PathBuf::from("/x/a.jpg"));

        drag(&mut session, Point::new(1, 1), Point::new(9, 9));
        assert!(session.selected_rect().is_some());

        assert_eq!(session.next(), Some(PathBuf::from("/x/b.jpg")));
        assert_eq!(session.selected_rect(), None);
        assert_eq!(session.next(), None);
        assert_eq!(session.position_label().as_deref(), Some("2/2"));
    }

    #[test]
    fn save_without_selection_reports_storage_error() {
        let session = AnnotationSession::new(&settings());
        let err = session
            .save_to(Path::new("/tmp/boxmark-never-written.txt"))
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(StorageError::NoSelection)));
    }

    #[test]
    fn open_with_empty_selection_fails() {
        let mut session = AnnotationSession::new(&settings());
        assert!(matches!(session.open(Vec::new()), Err(AppError::Image(_))));
        assert!(session.current_image().is_none());
    }
}
