use druid::Selector;

use crate::data::Nav;

// Navigation

pub const NAVIGATE: Selector<Nav> = Selector::new("app.navigate");
pub const NAVIGATE_BACK: Selector<usize> = Selector::new("app.navigate-back");
pub const NAVIGATE_REFRESH: Selector = Selector::new("app.navigate-refresh");

// External

pub const OPEN_URL: Selector<String> = Selector::new("app.open-url");
