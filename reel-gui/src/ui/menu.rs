use druid::{platform_menus, Env, LocalizedString, Menu, MenuItem, SysMods, WindowId};

use crate::{cmd, data::AppState};

pub fn main_menu(_window: Option<WindowId>, _data: &AppState, _env: &Env) -> Menu<AppState> {
    let mut menu = Menu::empty();
    #[cfg(target_os = "macos")]
    {
        menu = menu.entry(mac_app_menu());
    }
    menu.entry(edit_menu()).entry(view_menu())
}

#[cfg(target_os = "macos")]
fn mac_app_menu() -> Menu<AppState> {
    Menu::new(LocalizedString::new("macos-menu-application-menu"))
        .entry(platform_menus::mac::application::hide())
        .entry(platform_menus::mac::application::hide_others())
        .separator()
        .entry(
            MenuItem::new(LocalizedString::new("macos-menu-quit").with_placeholder("Quit Reel"))
                .command(druid::commands::QUIT_APP)
                .hotkey(SysMods::Cmd, "q"),
        )
}

fn edit_menu() -> Menu<AppState> {
    Menu::new(LocalizedString::new("common-menu-edit-menu").with_placeholder("Edit"))
        .entry(platform_menus::common::cut())
        .entry(platform_menus::common::copy())
        .entry(platform_menus::common::paste())
}

fn view_menu() -> Menu<AppState> {
    Menu::new(LocalizedString::new("menu-view-menu").with_placeholder("View"))
        .entry(
            MenuItem::new(LocalizedString::new("menu-item-back").with_placeholder("Back"))
                .command(cmd::NAVIGATE_BACK.with(1))
                .hotkey(SysMods::Cmd, "["),
        )
        .entry(
            MenuItem::new(LocalizedString::new("menu-item-refresh").with_placeholder("Refresh"))
                .command(cmd::NAVIGATE_REFRESH)
                .hotkey(SysMods::Cmd, "r"),
        )
}
