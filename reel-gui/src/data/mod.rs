mod config;
mod home;
mod nav;
mod row;
mod view_model;

use std::mem;

use druid::{im::Vector, Data, Lens};

pub use crate::data::{
    config::Config,
    home::Home,
    nav::{Nav, Route},
    row::{FetchTicket, TitleCell, TitleRow},
    view_model::{TitlePreviewViewModel, TitleViewModel},
};

#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub nav: Nav,
    pub history: Vector<Nav>,
    pub config: Config,
    pub home: Home,
}

impl AppState {
    pub fn default_with_config(config: Config) -> Self {
        Self {
            nav: Nav::Home,
            history: Vector::new(),
            config,
            home: Home::new(),
        }
    }
}

impl AppState {
    pub fn navigate(&mut self, nav: &Nav) {
        if &self.nav != nav {
            let previous = mem::replace(&mut self.nav, nav.to_owned());
            self.history.push_back(previous);
        }
    }

    pub fn navigate_back(&mut self) {
        if let Some(nav) = self.history.pop_back() {
            self.nav = nav;
        }
    }

    pub fn refresh(&mut self) {
        self.home.refresh();
    }
}

#[cfg(test)]
mod tests {
    use reel_core::title::Title;

    use super::*;

    fn preview(name: &str) -> Nav {
        Nav::TitlePreview(TitlePreviewViewModel::from(&Title {
            original_title: Some(name.to_string()),
            ..Title::default()
        }))
    }

    #[test]
    fn navigate_pushes_history_and_back_pops_it() {
        let mut state = AppState::default_with_config(Config::default());
        state.navigate(&preview("Heat"));
        state.navigate(&preview("Ronin"));
        assert_eq!(state.nav.title(), "Ronin");
        assert_eq!(state.history.len(), 2);

        state.navigate_back();
        assert_eq!(state.nav.title(), "Heat");
        state.navigate_back();
        assert_eq!(state.nav, Nav::Home);
        state.navigate_back();
        assert_eq!(state.nav, Nav::Home);
    }

    #[test]
    fn navigating_to_current_screen_is_a_no_op() {
        let mut state = AppState::default_with_config(Config::default());
        state.navigate(&Nav::Home);
        assert!(state.history.is_empty());
        state.navigate(&preview("Heat"));
        state.navigate(&preview("Heat"));
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.nav.route(), Route::TitlePreview);
    }
}
