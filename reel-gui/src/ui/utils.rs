use std::sync::Arc;

use druid::{
    widget::{Label, SizedBox},
    Data, Env, Widget, WidgetExt,
};

use crate::widget::RemoteImage;

use super::theme;

pub fn placeholder_widget<T: Data>() -> impl Widget<T> {
    SizedBox::empty().background(theme::BACKGROUND_LIGHT)
}

/// Fixed-size poster that falls back to the placeholder while loading, on error, or when
/// the title has no poster at all.
pub fn poster_widget<T: Data>(
    width: f64,
    height: f64,
    locator: impl Fn(&T, &Env) -> Option<Arc<str>> + 'static,
) -> impl Widget<T> {
    RemoteImage::new(placeholder_widget(), locator)
        .fix_size(width, height)
}

pub fn header_widget<T: Data>(text: impl Into<String>) -> impl Widget<T> {
    Label::new(text.into())
        .with_font(theme::UI_FONT_HEADER)
        .padding((theme::grid(2.0), theme::grid(2.0), theme::grid(2.0), theme::grid(1.0)))
}
