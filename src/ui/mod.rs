pub mod style;
pub mod widgets;

pub use style::{
    default_crosshair_style, Dash, LineStyle, OverlayStyle, RectStyle, Stipple, StyleTokens,
    LAYOUT_TOKENS,
};
pub use widgets::sidebar_button;
