use gtk4::cairo;
use gtk4::gdk::prelude::GdkCairoContextExt;
use gtk4::gdk_pixbuf::{Colorspace, Pixbuf};
use gtk4::glib;

use crate::geometry::{Color, Point, Rect};
use crate::images::DecodedImage;
use crate::surface::{Shape, ShapeCanvas, ShapeKind};
use crate::ui::{Dash, RectStyle};

pub(super) const CANVAS_BACKGROUND: Color = Color::new(190, 190, 190);

pub(super) fn pixbuf_from_image(image: DecodedImage) -> Pixbuf {
    let stride = image.stride();
    let bytes = glib::Bytes::from_owned(image.pixels);
    Pixbuf::from_bytes(
        &bytes,
        Colorspace::Rgb,
        true,
        8,
        image.width,
        image.height,
        stride,
    )
}

/// Paints background, the current image at the origin, then every visible shape.
pub(super) fn draw_canvas(context: &cairo::Context, canvas: &ShapeCanvas, image: Option<&Pixbuf>) {
    let (r, g, b) = CANVAS_BACKGROUND.unit_rgb();
    context.set_source_rgb(r, g, b);
    let _ = context.paint();

    if let Some(pixbuf) = image {
        context.save().ok();
        context.set_source_pixbuf(pixbuf, 0.0, 0.0);
        let _ = context.paint();
        context.restore().ok();
    }

    for shape in canvas.visible_shapes() {
        context.save().ok();
        draw_shape(context, shape);
        context.restore().ok();
    }
}

fn draw_shape(context: &cairo::Context, shape: &Shape) {
    let [x0, y0, x1, y1] = shape.coords.map(f64::from);
    match shape.kind {
        ShapeKind::Line(style) => {
            apply_stroke(context, style.width, style.dash, style.color);
            context.move_to(x0, y0);
            context.line_to(x1, y1);
            let _ = context.stroke();
        }
        ShapeKind::Rectangle(style) => draw_rectangle(context, shape.coords, &style),
    }
}

fn draw_rectangle(context: &cairo::Context, coords: [i32; 4], style: &RectStyle) {
    let [x0, y0, x1, y1] = coords;
    let rect = Rect::from_corners(Point::new(x0, y0), Point::new(x1, y1));
    let (x, y) = (f64::from(rect.min_x), f64::from(rect.min_y));
    let (width, height) = (f64::from(rect.width()), f64::from(rect.height()));

    if let Some(fill) = style.fill.filter(|_| rect.area() > 0) {
        let (r, g, b) = fill.unit_rgb();
        context.set_source_rgba(r, g, b, style.fill_alpha());
        context.rectangle(x, y, width, height);
        let _ = context.fill();
    }
    if let Some(outline) = style.outline.filter(|_| style.width > 0) {
        apply_stroke(context, style.width, style.dash, outline);
        context.rectangle(x, y, width, height);
        let _ = context.stroke();
    }
}

fn apply_stroke(context: &cairo::Context, width: u16, dash: Option<Dash>, color: Color) {
    let (r, g, b) = color.unit_rgb();
    context.set_source_rgb(r, g, b);
    context.set_line_width(f64::from(width.max(1)));
    match dash {
        Some(dash) => context.set_dash(&dash.pattern(), 0.0),
        None => context.set_dash(&[], 0.0),
    }
}

