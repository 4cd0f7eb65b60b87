pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Key};

use crate::data::AppState;

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const WHITE: Color = Color::WHITE;
pub const GREY_000: Color = Color::grey8(0x0f);
pub const GREY_100: Color = Color::grey8(0x1c);
pub const GREY_200: Color = Color::grey8(0x2b);
pub const GREY_300: Color = Color::grey8(0x4a);
pub const GREY_400: Color = Color::grey8(0x82);
pub const GREY_500: Color = Color::grey8(0xb3);
pub const GREY_600: Color = Color::grey8(0xe6);
pub const RED: Color = Color::rgb8(0xe5, 0x09, 0x14);

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const UI_FONT_HEADER: Key<FontDescriptor> = Key::new("app.ui-font-header");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");

pub const LINK_HOT_COLOR: Key<Color> = Key::new("app.link-hot-color");
pub const LINK_COLD_COLOR: Key<Color> = Key::new("app.link-cold-color");

pub const POSTER_WIDTH: f64 = 140.0;
pub const POSTER_HEIGHT: f64 = 200.0;
pub const HERO_HEIGHT: f64 = 400.0;

pub fn setup(env: &mut Env, _state: &AppState) {
    env.set(WINDOW_BACKGROUND_COLOR, GREY_000);
    env.set(TEXT_COLOR, GREY_600);
    env.set(PLACEHOLDER_COLOR, GREY_400);
    env.set(PRIMARY_LIGHT, RED);
    env.set(PRIMARY_DARK, RED);

    env.set(BACKGROUND_LIGHT, GREY_100);
    env.set(BACKGROUND_DARK, GREY_000);
    env.set(FOREGROUND_LIGHT, WHITE);
    env.set(FOREGROUND_DARK, GREY_500);

    env.set(BORDER_DARK, GREY_200);
    env.set(BORDER_LIGHT, GREY_300);

    env.set(BUTTON_BORDER_RADIUS, 4.0);

    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(14.0)
            .with_weight(FontWeight::MEDIUM),
    );
    env.set(
        UI_FONT_HEADER,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(18.0)
            .with_weight(FontWeight::BOLD),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
    env.set(TEXT_SIZE_NORMAL, 14.0);
    env.set(TEXT_SIZE_LARGE, 18.0);

    env.set(SCROLLBAR_COLOR, GREY_300);
    env.set(SCROLLBAR_BORDER_COLOR, GREY_200);
    env.set(SCROLLBAR_MAX_OPACITY, 0.7);
    env.set(SCROLLBAR_FADE_DELAY, 1500u64);
    env.set(SCROLLBAR_WIDTH, 6.0);
    env.set(SCROLLBAR_PAD, 2.0);
    env.set(SCROLLBAR_RADIUS, 5.0);
    env.set(SCROLLBAR_EDGE_WIDTH, 1.0);

    env.set(WIDGET_PADDING_VERTICAL, grid(1.0));
    env.set(WIDGET_PADDING_HORIZONTAL, grid(1.0));

    env.set(LINK_HOT_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.12));
    env.set(LINK_COLD_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.0));
}
