use std::rc::Rc;

use druid::{
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking, List, Scroll},
    EventCtx, Widget, WidgetExt,
};

use crate::{
    data::{TitleCell, TitlePreviewViewModel, TitleRow},
    widget::MyWidgetExt,
};

use super::{theme, utils};

/// Invoked with the preview of whichever cell the user picked.
pub type OnSelect = Rc<dyn Fn(&mut EventCtx, TitlePreviewViewModel)>;

pub fn title_row_widget(on_select: OnSelect) -> impl Widget<TitleRow> {
    Scroll::new(
        List::new(move || cell_widget(on_select.clone()))
            .horizontal()
            .with_spacing(theme::grid(1.0)),
    )
    .horizontal()
    .padding((theme::grid(1.0), 0.0))
    .lens(TitleRow::cells)
}

fn cell_widget(on_select: OnSelect) -> impl Widget<TitleCell> {
    let poster = utils::poster_widget(
        theme::POSTER_WIDTH,
        theme::POSTER_HEIGHT,
        |cell: &TitleCell, _| cell.poster_location(),
    );

    let name = Label::dynamic(|cell: &TitleCell, _| cell.name().to_string())
        .with_line_break_mode(LineBreaking::Clip)
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .fix_width(theme::POSTER_WIDTH);

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(poster)
        .with_spacer(theme::grid(0.5))
        .with_child(name)
        .padding(theme::grid(0.5))
        .link()
        .rounded(theme::BUTTON_BORDER_RADIUS)
        .on_click(move |ctx, cell: &mut TitleCell, _| {
            log::debug!("selected {} at {}", cell.name(), cell.index);
            on_select(ctx, cell.preview());
        })
}
