use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::geometry::{Color, SurfaceSize};
use crate::selection::BeginTrigger;
use crate::ui::{default_crosshair_style, LineStyle, OverlayStyle, Stipple, LAYOUT_TOKENS};

const APP_DIR: &str = "boxmark";
const APP_CONFIG_FILE: &str = "config.json";
const DEFAULT_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AppConfig {
    #[serde(default)]
    pub(crate) begin_trigger: Option<BeginTrigger>,
    #[serde(default)]
    pub(crate) canvas_width: Option<u32>,
    #[serde(default)]
    pub(crate) canvas_height: Option<u32>,
    #[serde(default)]
    pub(crate) crosshair_color: Option<String>,
    #[serde(default)]
    pub(crate) selection_color: Option<String>,
    #[serde(default)]
    pub(crate) mask_color: Option<String>,
    #[serde(default)]
    pub(crate) mask_stipple: Option<Stipple>,
    #[serde(default)]
    pub(crate) image_extensions: Option<Vec<String>>,
}

/// Config values merged over built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnnotatorSettings {
    pub(crate) begin_trigger: BeginTrigger,
    pub(crate) canvas_size: SurfaceSize,
    pub(crate) crosshair: LineStyle,
    pub(crate) overlay: OverlayStyle,
    pub(crate) image_extensions: Vec<String>,
}

impl Default for AnnotatorSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AnnotatorSettings {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        let defaults = OverlayStyle::default();
        let mut crosshair = default_crosshair_style();
        if let Some(color) = parse_color_field("crosshair_color", &config.crosshair_color) {
            crosshair.color = color;
        }

        let outline = parse_color_field("selection_color", &config.selection_color)
            .or(defaults.inner.outline)
            .unwrap_or(crosshair.color);
        let mask_color = parse_color_field("mask_color", &config.mask_color)
            .or(defaults.mask.fill)
            .unwrap_or(Color::new(0, 0, 0));
        let stipple = config
            .mask_stipple
            .or(defaults.mask.stipple)
            .unwrap_or_default();

        let image_extensions = config
            .image_extensions
            .as_ref()
            .map(|extensions| {
                extensions
                    .iter()
                    .map(|extension| extension.trim().trim_start_matches('.').to_ascii_lowercase())
                    .filter(|extension| !extension.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|extensions| !extensions.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_IMAGE_EXTENSIONS
                    .iter()
                    .map(|extension| extension.to_string())
                    .collect()
            });

        Self {
            begin_trigger: config.begin_trigger.unwrap_or_default(),
            canvas_size: SurfaceSize::new(
                canvas_dimension(config.canvas_width, LAYOUT_TOKENS.canvas_default_width),
                canvas_dimension(config.canvas_height, LAYOUT_TOKENS.canvas_default_height),
            ),
            crosshair,
            overlay: OverlayStyle::new(mask_color, stipple, outline),
            image_extensions,
        }
    }
}

fn canvas_dimension(value: Option<u32>, default: i32) -> i32 {
    value
        .filter(|value| *value > 0)
        .and_then(|value| i32::try_from(value).ok())
        .unwrap_or(default)
}

fn parse_color_field(field: &str, value: &Option<String>) -> Option<Color> {
    let raw = value.as_deref()?;
    let color = Color::from_hex(raw);
    if color.is_none() {
        tracing::warn!(field, value = raw, "invalid color in config.json; using default");
    }
    color
}

pub(crate) fn load_app_config() -> AppConfig {
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let Some(path) = config_file_path(xdg_config_home, home) else {
        tracing::debug!("no XDG_CONFIG_HOME or HOME; using default settings");
        return AppConfig::default();
    };
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return AppConfig::default(),
        Err(err) => {
            tracing::warn!(?err, path = %path.display(), "failed to read config.json; using defaults");
            return AppConfig::default();
        }
    };
    serde_json::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(%err, path = %path.display(), "failed to parse config.json; using defaults");
        AppConfig::default()
    })
}

/// `$XDG_CONFIG_HOME/boxmark/config.json`, else `$HOME/.config/boxmark/config.json`.
fn config_file_path(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    let base = match xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        Some(xdg) => xdg.to_path_buf(),
        None => home?.join(".config"),
    };
    Some(base.join(APP_DIR).join(APP_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::{MASK_BLACK, SELECTION_GREEN};

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("boxmark-config-{pid}-{nanos}"));
        path
    }

    fn with_config_file<F: FnOnce(&Path)>(contents: &str, f: F) {
        let root = fixture_root();
        let dir = root.join(APP_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(APP_CONFIG_FILE), contents).unwrap();
        f(&root);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn config_file_path_uses_xdg_dir_unless_empty() {
        let home = Path::new("/home/annotator");
        assert_eq!(
            config_file_path(Some(Path::new("/srv/labels/cfg")), Some(home)),
            Some(PathBuf::from("/srv/labels/cfg/boxmark/config.json"))
        );
        assert_eq!(
            config_file_path(Some(Path::new("")), Some(home)),
            Some(PathBuf::from("/home/annotator/.config/boxmark/config.json"))
        );
        assert_eq!(config_file_path(None, None), None);
    }

    #[test]
    fn config_under_home_is_read_when_xdg_is_unset() {
        let home = fixture_root();
        let dir = home.join(".config").join(APP_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(APP_CONFIG_FILE), r#"{ "begin_trigger": "press" }"#).unwrap();

        let config = load_app_config_with(None, Some(&home));
        assert_eq!(config.begin_trigger, Some(BeginTrigger::Press));

        let _ = std::fs::remove_dir_all(&home);
    }

    #[test]
    fn missing_config_file_yields_default_settings() {
        let root = fixture_root();
        let config = load_app_config_with(Some(&root), None);
        let settings = AnnotatorSettings::from_config(&config);

        assert_eq!(settings, AnnotatorSettings::default());
        assert_eq!(settings.begin_trigger, BeginTrigger::Hover);
        assert_eq!(settings.canvas_size, SurfaceSize::new(1600, 1000));
        assert_eq!(settings.image_extensions, vec!["jpg", "jpeg", "png"]);
        assert_eq!(settings.overlay.mask.fill, Some(MASK_BLACK));
        assert_eq!(settings.overlay.inner.outline, Some(SELECTION_GREEN));
    }

    #[test]
    fn config_file_overrides_trigger_canvas_and_colors() {
        with_config_file(
            r##"{
                "begin_trigger": "press",
                "canvas_width": 800,
                "canvas_height": 600,
                "crosshair_color": "#ff0000",
                "selection_color": "0000ff",
                "mask_color": "#112233",
                "mask_stipple": "gray50",
                "image_extensions": [".PNG", " bmp ", ""]
            }"##,
            |root| {
                let config = load_app_config_with(Some(root), None);
                let settings = AnnotatorSettings::from_config(&config);

                assert_eq!(settings.begin_trigger, BeginTrigger::Press);
                assert_eq!(settings.canvas_size, SurfaceSize::new(800, 600));
                assert_eq!(settings.crosshair.color, Color::new(255, 0, 0));
                assert_eq!(settings.overlay.inner.outline, Some(Color::new(0, 0, 255)));
                assert_eq!(settings.overlay.mask.fill, Some(Color::new(0x11, 0x22, 0x33)));
                assert_eq!(settings.overlay.mask.stipple, Some(Stipple::Gray50));
                assert_eq!(settings.image_extensions, vec!["png", "bmp"]);
            },
        );
    }

    #[test]
    fn invalid_values_fall_back_per_field() {
        with_config_file(
            r##"{ "canvas_width": 0, "mask_color": "black", "image_extensions": [] }"##,
            |root| {
                let settings = AnnotatorSettings::from_config(&load_app_config_with(Some(root), None));

                assert_eq!(settings.canvas_size.width, 1600);
                assert_eq!(settings.overlay.mask.fill, Some(MASK_BLACK));
                assert_eq!(settings.image_extensions.len(), 3);
            },
        );
    }

    #[test]
    fn malformed_config_file_yields_defaults() {
        with_config_file("{ not json", |root| {
            let config = load_app_config_with(Some(root), None);
            assert!(config.begin_trigger.is_none());
            assert!(config.canvas_width.is_none());
        });
    }
}
