// `FileChooserNative` is deprecated from GTK 4.10 in favour of `FileDialog`,
// which the enabled gtk4 feature set does not expose.
#![allow(deprecated)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{gio, FileChooserAction, FileChooserNative, FileFilter, ResponseType};

use super::window::WindowContext;

const DEFAULT_SAVE_NAME: &str = "selection.txt";

/// Keeps the native dialog alive until it responds.
#[derive(Clone, Default)]
pub(super) struct DialogSlot(Rc<RefCell<Option<FileChooserNative>>>);

impl DialogSlot {
    fn hold(&self, dialog: FileChooserNative) {
        if let Some(previous) = self.0.borrow_mut().replace(dialog) {
            previous.destroy();
        }
    }

    fn release(&self) {
        self.0.borrow_mut().take();
    }
}

pub(super) fn prompt_open_images(context: &WindowContext) {
    let dialog = FileChooserNative::new(
        Some("Open images"),
        Some(&context.window),
        FileChooserAction::Open,
        Some("_Open"),
        Some("_Cancel"),
    );
    dialog.set_select_multiple(true);
    dialog.add_filter(&image_filter(context.session.borrow().image_extensions()));

    let response_context = context.clone();
    dialog.connect_response(move |dialog, response| {
        if response == ResponseType::Accept {
            let selected = selected_paths(&dialog.files());
            tracing::debug!(count = selected.len(), "open dialog accepted");
            response_context.open_images(selected);
        }
        dialog.destroy();
        response_context.dialog_slot.release();
    });
    dialog.show();
    context.dialog_slot.hold(dialog);
}

pub(super) fn prompt_save_selection(context: &WindowContext) {
    if context.session.borrow().selected_rect().is_none() {
        context.report("Nothing to save: drag a selection first.");
        return;
    }

    let dialog = FileChooserNative::new(
        Some("Save selection"),
        Some(&context.window),
        FileChooserAction::Save,
        Some("_Save"),
        Some("_Cancel"),
    );
    dialog.set_current_name(DEFAULT_SAVE_NAME);
    dialog.add_filter(&pattern_filter("Text Files", &["*.txt"]));
    dialog.add_filter(&pattern_filter("All Files", &["*"]));

    let response_context = context.clone();
    dialog.connect_response(move |dialog, response| {
        if response == ResponseType::Accept {
            match dialog.file().and_then(|file| file.path()) {
                Some(target) => response_context.save_selection(&target),
                None => response_context.report("Save failed: choose a local file."),
            }
        }
        dialog.destroy();
        response_context.dialog_slot.release();
    });
    dialog.show();
    context.dialog_slot.hold(dialog);
}

fn image_filter(extensions: &[String]) -> FileFilter {
    let patterns: Vec<String> = extensions
        .iter()
        .flat_map(|extension| {
            [
                format!("*.{}", extension.to_ascii_lowercase()),
                format!("*.{}", extension.to_ascii_uppercase()),
            ]
        })
        .collect();
    let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
    pattern_filter("image", &patterns)
}

fn pattern_filter(name: &str, patterns: &[&str]) -> FileFilter {
    let filter = FileFilter::new();
    filter.set_name(Some(name));
    for pattern in patterns {
        filter.add_pattern(pattern);
    }
    filter
}

fn selected_paths(files: &gio::ListModel) -> Vec<PathBuf> {
    (0..files.n_items())
        .filter_map(|position| files.item(position))
        .filter_map(|item| item.downcast::<gio::File>().ok())
        .filter_map(|file| file.path())
        .collect()
}
