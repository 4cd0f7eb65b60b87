use druid::{
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking, Maybe},
    Selector, Widget, WidgetExt,
};
use reel_core::catalog::CatalogHandle;

use crate::{
    data::{Home, TitleViewModel},
    widget::MyWidgetExt,
};

use super::{theme, utils};

pub const LOAD_HERO: Selector<usize> = Selector::new("app.home.load-hero");

/// Banner featuring one random trending movie.  Stays blank until a title is picked.
pub fn hero_widget(catalog: CatalogHandle) -> impl Widget<Home> {
    Maybe::new(featured_widget, || utils::placeholder_widget().fix_height(theme::HERO_HEIGHT))
        .lens(Home::hero)
        .on_command_async(
            LOAD_HERO,
            move |_generation| catalog.trending_movies(),
            |_, _, _| {},
            |_, home: &mut Home, (generation, result)| {
                home.apply_hero(generation, result, &mut rand::rng());
            },
        )
        .on_ticket(LOAD_HERO, |home: &Home| home.hero_generation)
        .expand_width()
}

fn featured_widget() -> impl Widget<TitleViewModel> {
    let poster = utils::poster_widget(
        theme::HERO_HEIGHT * theme::POSTER_WIDTH / theme::POSTER_HEIGHT,
        theme::HERO_HEIGHT,
        |hero: &TitleViewModel, _| hero.poster_path.clone(),
    );

    let name = Label::raw()
        .with_font(theme::UI_FONT_HEADER)
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(TitleViewModel::title_name);

    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::End)
        .with_child(poster)
        .with_spacer(theme::grid(2.0))
        .with_flex_child(name, 1.0)
        .padding(theme::grid(2.0))
        .background(theme::BACKGROUND_LIGHT)
}
