use druid::{
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking, Scroll},
    Widget, WidgetExt,
};

use crate::{cmd, data::TitlePreviewViewModel, widget::MyWidgetExt};

use super::{theme, utils};

pub fn preview_widget() -> impl Widget<TitlePreviewViewModel> {
    let poster = utils::poster_widget(
        theme::POSTER_WIDTH * 2.0,
        theme::POSTER_HEIGHT * 2.0,
        |preview: &TitlePreviewViewModel, _| preview.poster_path.clone(),
    );

    let title = Label::raw()
        .with_font(theme::UI_FONT_HEADER)
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(TitlePreviewViewModel::title);

    let release = Label::dynamic(|preview: &TitlePreviewViewModel, _| preview.release_line())
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR);

    let overview = Label::raw()
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(TitlePreviewViewModel::overview);

    let details = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(title)
        .with_spacer(theme::grid(0.5))
        .with_child(release)
        .with_spacer(theme::grid(2.0))
        .with_child(overview)
        .with_spacer(theme::grid(2.0))
        .with_child(trailer_link_widget());

    let content = Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(poster)
        .with_spacer(theme::grid(3.0))
        .with_flex_child(details, 1.0)
        .padding(theme::grid(3.0));

    Scroll::new(content).vertical().expand()
}

fn trailer_link_widget() -> impl Widget<TitlePreviewViewModel> {
    Label::new("Watch Trailer")
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_color(theme::PRIMARY_LIGHT)
        .padding((theme::grid(1.0), theme::grid(0.5)))
        .link()
        .rounded(theme::BUTTON_BORDER_RADIUS)
        .on_click(|ctx, preview: &mut TitlePreviewViewModel, _| {
            if let Some(url) = preview.trailer_search_url() {
                ctx.submit_command(cmd::OPEN_URL.with(url.to_string()));
            }
        })
}
