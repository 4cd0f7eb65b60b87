use druid::Data;

use crate::data::TitlePreviewViewModel;

#[derive(Clone, Debug, Data, PartialEq, Eq, Hash)]
pub enum Nav {
    Home,
    TitlePreview(TitlePreviewViewModel),
}

/// Which screen is showing, without its payload.
#[derive(Clone, Copy, Debug, Data, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    TitlePreview,
}

impl Nav {
    pub fn route(&self) -> Route {
        match self {
            Nav::Home => Route::Home,
            Nav::TitlePreview(_) => Route::TitlePreview,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Nav::Home => "Home".to_string(),
            Nav::TitlePreview(preview) => preview.title.to_string(),
        }
    }

    pub fn preview(&self) -> Option<&TitlePreviewViewModel> {
        match self {
            Nav::TitlePreview(preview) => Some(preview),
            Nav::Home => None,
        }
    }
}
