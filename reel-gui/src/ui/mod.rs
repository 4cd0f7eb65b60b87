use druid::{
    lens::Map,
    widget::{CrossAxisAlignment, Either, Flex, Label, Maybe, SizedBox},
    Widget, WidgetExt, WindowDesc,
};
use reel_core::catalog::CatalogHandle;

use crate::{
    cmd,
    controller::NavController,
    data::{AppState, Nav, Route, TitlePreviewViewModel},
    widget::{MyWidgetExt, ViewDispatcher},
};

pub mod hero;
pub mod home;
pub mod menu;
pub mod preview;
pub mod row;
pub mod theme;
pub mod utils;

pub fn main_window(catalog: CatalogHandle) -> WindowDesc<AppState> {
    WindowDesc::new(root_widget(catalog))
        .title("Reel")
        .menu(menu::main_menu)
        .with_min_size((theme::grid(50.0), theme::grid(40.0)))
        .window_size((theme::grid(150.0), theme::grid(100.0)))
}

fn root_widget(catalog: CatalogHandle) -> impl Widget<AppState> {
    let topbar = Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .with_child(back_button_widget())
        .with_default_spacer()
        .with_child(route_title_widget());

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(topbar)
        .with_flex_child(route_widget(catalog), 1.0)
        .controller(NavController)
    // .debug_invalidation()
}

fn route_widget(catalog: CatalogHandle) -> impl Widget<AppState> {
    ViewDispatcher::new(
        |state: &AppState, _| state.nav.route(),
        move |route: &Route, _, _| match route {
            Route::Home => home::home_widget(catalog.clone())
                .lens(AppState::home)
                .boxed(),
            Route::TitlePreview => Maybe::or_empty(preview::preview_widget)
                .lens(Map::new(
                    |nav: &Nav| nav.preview().cloned(),
                    |_nav: &mut Nav, _preview: Option<TitlePreviewViewModel>| {
                        // Read-only, the preview never edits its title.
                    },
                ))
                .lens(AppState::nav)
                .boxed(),
        },
    )
    .expand()
}

fn back_button_widget() -> impl Widget<AppState> {
    let back = Label::new("‹ Back")
        .with_font(theme::UI_FONT_MEDIUM)
        .padding((theme::grid(1.5), theme::grid(0.5)))
        .link()
        .rounded(theme::BUTTON_BORDER_RADIUS)
        .on_click(|ctx, _, _| {
            ctx.submit_command(cmd::NAVIGATE_BACK.with(1));
        });
    Either::new(
        |state: &AppState, _| state.history.is_empty(),
        SizedBox::empty(),
        back,
    )
    .padding(theme::grid(1.0))
}

fn route_title_widget() -> impl Widget<AppState> {
    Label::dynamic(|state: &AppState, _| state.nav.title()).with_font(theme::UI_FONT_MEDIUM)
}
