use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use gtk4::gdk_pixbuf::Pixbuf;
use gtk4::prelude::*;
use gtk4::{
    Application, ApplicationWindow, Box as GtkBox, DrawingArea, Label, Orientation,
    ScrolledWindow,
};

use crate::config::AnnotatorSettings;
use crate::error::AppError;
use crate::images::load_image;
use crate::selection::PointerEvent;
use crate::surface::ShapeCanvas;
use crate::ui::{sidebar_button, StyleTokens, LAYOUT_TOKENS};

use super::dialogs::{prompt_open_images, prompt_save_selection, DialogSlot};
use super::input_bridge::{drag_event, motion_event, DragPhase};
use super::render::{draw_canvas, pixbuf_from_image};
use super::session::AnnotationSession;

const WINDOW_TITLE: &str = "Object classifier";
const EMPTY_STATUS: &str = "Open images to start.";

/// Widgets and state shared by every button and gesture handler.
#[derive(Clone)]
pub(super) struct WindowContext {
    pub(super) window: ApplicationWindow,
    pub(super) session: Rc<RefCell<AnnotationSession>>,
    pub(super) drawing_area: DrawingArea,
    pub(super) current_pixbuf: Rc<RefCell<Option<Pixbuf>>>,
    pub(super) status: Label,
    pub(super) dialog_slot: DialogSlot,
}

impl WindowContext {
    pub(super) fn report(&self, message: &str) {
        self.status.set_text(message);
    }

    pub(super) fn report_error(&self, action: &str, err: &AppError) {
        tracing::warn!(action, %err, "action failed");
        self.report(&format!("{action} failed: {err}"));
    }

    pub(super) fn open_images(&self, selected: Vec<PathBuf>) {
        if selected.is_empty() {
            return;
        }
        let opened = self.session.borrow_mut().open(selected);
        match opened {
            Ok(path) => self.show_image(&path),
            Err(err) => self.report_error("Open", &err),
        }
    }

    pub(super) fn show_next(&self) {
        let next = self.session.borrow_mut().next();
        match next {
            Some(path) => self.show_image(&path),
            None => self.report_boundary("Already at the last image."),
        }
    }

    pub(super) fn show_previous(&self) {
        let previous = self.session.borrow_mut().previous();
        match previous {
            Some(path) => self.show_image(&path),
            None => self.report_boundary("Already at the first image."),
        }
    }

    pub(super) fn save_selection(&self, target: &Path) {
        let saved = self.session.borrow().save_to(target);
        match saved {
            Ok(path) => self.report(&format!("Saved selection to {}", path.display())),
            Err(err) => self.report_error("Save", &err),
        }
    }

    fn report_boundary(&self, message: &str) {
        if self.session.borrow().current_image().is_none() {
            self.report(EMPTY_STATUS);
        } else {
            self.report(message);
        }
    }

    fn show_image(&self, path: &Path) {
        match load_image(path) {
            Ok(image) => {
                *self.current_pixbuf.borrow_mut() = Some(pixbuf_from_image(image));
                let position = self.session.borrow().position_label().unwrap_or_default();
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.report(&format!("{position}  {name}"));
                tracing::info!(path = %path.display(), %position, "showing image");
            }
            Err(err) => {
                *self.current_pixbuf.borrow_mut() = None;
                self.report_error("Load image", &AppError::from(err));
            }
        }
        self.drawing_area.queue_draw();
    }
}

pub(super) fn build_main_window(application: &Application, settings: &AnnotatorSettings) {
    let tokens = LAYOUT_TOKENS;
    let session = Rc::new(RefCell::new(AnnotationSession::new(settings)));
    let current_pixbuf: Rc<RefCell<Option<Pixbuf>>> = Rc::default();

    let drawing_area = DrawingArea::new();
    drawing_area.set_content_width(settings.canvas_size.width);
    drawing_area.set_content_height(settings.canvas_size.height);
    drawing_area.set_halign(gtk4::Align::Start);
    drawing_area.set_valign(gtk4::Align::Start);
    let canvas = session.borrow().canvas();
    configure_canvas_draw(&drawing_area, canvas, current_pixbuf.clone());
    connect_pointer_controllers(&drawing_area, session.clone());

    let scroller = ScrolledWindow::new();
    scroller.set_hexpand(true);
    scroller.set_vexpand(true);
    scroller.set_child(Some(&drawing_area));

    let status = Label::new(Some(EMPTY_STATUS));
    status.set_wrap(true);
    status.set_xalign(0.0);
    status.set_max_width_chars(14);

    let window = ApplicationWindow::new(application);
    window.set_title(Some(WINDOW_TITLE));
    window.set_default_size(tokens.window_default_width, tokens.window_default_height);

    let context = WindowContext {
        window: window.clone(),
        session,
        drawing_area,
        current_pixbuf,
        status: status.clone(),
        dialog_slot: DialogSlot::default(),
    };

    let sidebar = build_sidebar(&context, tokens);
    sidebar.append(&status);

    let root = GtkBox::new(Orientation::Horizontal, 0);
    root.append(&sidebar);
    root.append(&scroller);
    window.set_child(Some(&root));
    window.present();
    tracing::debug!(
        width = settings.canvas_size.width,
        height = settings.canvas_size.height,
        trigger = ?settings.begin_trigger,
        "main window presented"
    );
}

fn build_sidebar(context: &WindowContext, tokens: StyleTokens) -> GtkBox {
    let sidebar = GtkBox::new(Orientation::Vertical, tokens.spacing_8);
    sidebar.set_margin_top(tokens.spacing_12);
    sidebar.set_margin_bottom(tokens.spacing_12);
    sidebar.set_margin_start(tokens.spacing_12);
    sidebar.set_margin_end(tokens.spacing_12);
    sidebar.set_size_request(tokens.sidebar_width, -1);

    let open_button = sidebar_button("Open", "Open images", tokens);
    let open_context = context.clone();
    open_button.connect_clicked(move |_| prompt_open_images(&open_context));

    let save_button = sidebar_button("Save As...", "Save the current selection", tokens);
    let save_context = context.clone();
    save_button.connect_clicked(move |_| prompt_save_selection(&save_context));

    let next_button = sidebar_button("Next", "Show the next image", tokens);
    let next_context = context.clone();
    next_button.connect_clicked(move |_| next_context.show_next());

    let previous_button = sidebar_button("Previous", "Show the previous image", tokens);
    let previous_context = context.clone();
    previous_button.connect_clicked(move |_| previous_context.show_previous());

    for button in [&open_button, &save_button, &next_button, &previous_button] {
        sidebar.append(button);
    }
    sidebar
}

fn configure_canvas_draw(
    drawing_area: &DrawingArea,
    canvas: Rc<RefCell<ShapeCanvas>>,
    current_pixbuf: Rc<RefCell<Option<Pixbuf>>>,
) {
    drawing_area.set_draw_func(move |_, context, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        draw_canvas(context, &canvas.borrow(), current_pixbuf.borrow().as_ref());
    });
}

fn connect_pointer_controllers(
    drawing_area: &DrawingArea,
    session: Rc<RefCell<AnnotationSession>>,
) {
    let dispatch = {
        let drawing_area = drawing_area.clone();
        Rc::new(move |event: PointerEvent| {
            session.borrow_mut().handle_pointer(event);
            drawing_area.queue_draw();
        })
    };

    let pointer = gtk4::EventControllerMotion::new();
    let dispatch_for_motion = dispatch.clone();
    pointer.connect_motion(move |_, x, y| dispatch_for_motion(motion_event(x, y)));
    drawing_area.add_controller(pointer);

    let drag_gesture = gtk4::GestureDrag::new();
    drag_gesture.set_button(gtk4::gdk::BUTTON_PRIMARY);
    let drag_origin = Rc::new(Cell::new((0.0, 0.0)));

    let begin_origin = drag_origin.clone();
    let dispatch_for_begin = dispatch.clone();
    drag_gesture.connect_drag_begin(move |_, start_x, start_y| {
        begin_origin.set((start_x, start_y));
        dispatch_for_begin(drag_event(DragPhase::Begin, (start_x, start_y), (0.0, 0.0)));
    });

    let update_origin = drag_origin.clone();
    let dispatch_for_update = dispatch.clone();
    drag_gesture.connect_drag_update(move |_, offset_x, offset_y| {
        dispatch_for_update(drag_event(
            DragPhase::Update,
            update_origin.get(),
            (offset_x, offset_y),
        ));
    });

    drag_gesture.connect_drag_end(move |_, offset_x, offset_y| {
        dispatch(drag_event(DragPhase::End, drag_origin.get(), (offset_x, offset_y)));
    });

    drawing_area.add_controller(drag_gesture);
}
