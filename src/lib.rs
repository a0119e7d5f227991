pub mod app;
mod config;
pub mod error;
pub mod geometry;
pub mod images;
pub mod logging;
pub mod selection;
pub mod state;
pub mod storage;
pub mod surface;
pub mod ui;
pub use error::{AppError, AppResult};

/// Entrypoint used by the binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting boxmark");

    let app = app::App::new();
    app.start()?;

    tracing::info!("event loop finished");
    Ok(())
}
