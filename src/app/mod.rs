use gtk4::prelude::*;
use gtk4::{glib, Application};

use crate::config::{load_app_config, AnnotatorSettings};
use crate::error::{AppError, AppResult};

mod dialogs;
mod input_bridge;
mod render;
mod session;
mod window;

const APP_ID: &str = "io.github.boxmark.Boxmark";

/// GTK application shell around one annotation window.
pub struct App {
    settings: AnnotatorSettings,
}

impl App {
    pub fn new() -> Self {
        let settings = AnnotatorSettings::from_config(&load_app_config());
        tracing::info!(
            trigger = ?settings.begin_trigger,
            canvas_width = settings.canvas_size.width,
            canvas_height = settings.canvas_size.height,
            extensions = ?settings.image_extensions,
            "loaded annotator settings"
        );
        Self { settings }
    }

    pub fn start(&self) -> AppResult<()> {
        let application = Application::builder().application_id(APP_ID).build();
        let settings = self.settings.clone();
        application.connect_activate(move |application| {
            window::build_main_window(application, &settings);
        });

        // Command-line arguments are not forwarded; GTK would reject unknown ones.
        let status = application.run_with_args::<&str>(&[]);
        if status != glib::ExitCode::SUCCESS {
            return Err(AppError::MainLoop(format!("{status:?}")));
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
