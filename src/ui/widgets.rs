use gtk4::prelude::*;
use gtk4::Button;

use super::style::StyleTokens;

pub fn sidebar_button(label: &str, tooltip: &str, tokens: StyleTokens) -> Button {
    let button = Button::with_label(label);
    button.set_focus_on_click(false);
    button.set_tooltip_text(Some(tooltip));
    button.add_css_class("sidebar-button");
    button.set_size_request(tokens.button_width, tokens.button_height);
    button
}
