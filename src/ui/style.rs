use serde::{Deserialize, Serialize};

use crate::geometry::Color;

/// Compile-time layout tokens, not user-overridable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_8: i32,
    pub spacing_12: i32,
    pub button_width: i32,
    pub button_height: i32,
    pub sidebar_width: i32,
    pub window_default_width: i32,
    pub window_default_height: i32,
    pub canvas_default_width: i32,
    pub canvas_default_height: i32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_8: 8,
    spacing_12: 12,
    button_width: 96,
    button_height: 40,
    sidebar_width: 120,
    window_default_width: 1760,
    window_default_height: 1000,
    canvas_default_width: 1600,
    canvas_default_height: 1000,
};

/// On/off dash lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dash {
    pub on: u8,
    pub off: u8,
}

impl Dash {
    pub const fn new(on: u8, off: u8) -> Self {
        Self { on, off }
    }

    pub fn pattern(self) -> [f64; 2] {
        [f64::from(self.on), f64::from(self.off)]
    }
}

/// Fill density of a mask, named after the classic X11 stipple bitmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stipple {
    Gray12,
    #[default]
    Gray25,
    Gray50,
    Gray75,
}

impl Stipple {
    pub const fn alpha(self) -> f64 {
        match self {
            Self::Gray12 => 0.125,
            Self::Gray25 => 0.25,
            Self::Gray50 => 0.5,
            Self::Gray75 => 0.75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub color: Color,
    pub width: u16,
    pub dash: Option<Dash>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectStyle {
    pub outline: Option<Color>,
    pub fill: Option<Color>,
    pub stipple: Option<Stipple>,
    pub width: u16,
    pub dash: Option<Dash>,
}

impl RectStyle {
    /// Fill alpha, where a stipple thins out an otherwise opaque fill.
    pub fn fill_alpha(&self) -> f64 {
        self.stipple.map_or(1.0, Stipple::alpha)
    }
}

pub const SELECTION_GREEN: Color = Color::new(0, 128, 0);
pub const MASK_BLACK: Color = Color::new(0, 0, 0);

pub const fn default_crosshair_style() -> LineStyle {
    LineStyle {
        color: SELECTION_GREEN,
        width: 2,
        dash: Some(Dash::new(3, 2)),
    }
}

/// Styles for the four mask panels and the inner highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub mask: RectStyle,
    pub inner: RectStyle,
}

impl OverlayStyle {
    pub const fn new(mask_color: Color, stipple: Stipple, outline: Color) -> Self {
        Self {
            mask: RectStyle {
                outline: None,
                fill: Some(mask_color),
                stipple: Some(stipple),
                width: 0,
                dash: Some(Dash::new(2, 2)),
            },
            inner: RectStyle {
                outline: Some(outline),
                fill: None,
                stipple: None,
                width: 2,
                dash: Some(Dash::new(2, 2)),
            },
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::new(MASK_BLACK, Stipple::Gray25, SELECTION_GREEN)
    }
}
