use std::sync::Arc;

use druid::{im::Vector, Data, Lens};
use reel_core::{error::Error, section::Section, title::Title};

use crate::data::TitlePreviewViewModel;

/// Identifies one fetch issued for a row.  A result is only applied if the row has not
/// been invalidated since the ticket was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub section: Section,
    pub generation: usize,
}

#[derive(Clone, Debug, Data, Lens)]
pub struct TitleCell {
    pub index: usize,
    pub title: Arc<Title>,
}

impl TitleCell {
    pub fn name(&self) -> &str {
        self.title.display_name()
    }

    pub fn poster_location(&self) -> Option<Arc<str>> {
        self.title.poster_path().map(Arc::from)
    }

    pub fn preview(&self) -> TitlePreviewViewModel {
        TitlePreviewViewModel::from(self.title.as_ref())
    }
}

#[derive(Clone, Debug, Data, Lens)]
pub struct TitleRow {
    #[data(eq)]
    pub section: Section,
    pub cells: Vector<TitleCell>,
    pub generation: usize,
}

impl TitleRow {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            cells: Vector::new(),
            generation: 0,
        }
    }

    /// Replace everything the row shows with `titles`, in order.
    pub fn configure(&mut self, titles: Vec<Title>) {
        self.cells = titles
            .into_iter()
            .enumerate()
            .map(|(index, title)| TitleCell {
                index,
                title: Arc::new(title),
            })
            .collect();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[cfg(test)]
    pub fn preview_at(&self, index: usize) -> Option<TitlePreviewViewModel> {
        self.cells.get(index).map(TitleCell::preview)
    }

    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            section: self.section,
            generation: self.generation,
        }
    }

    /// Make every outstanding ticket stale and return a fresh one.
    pub fn invalidate(&mut self) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.ticket()
    }

    pub fn apply(&mut self, ticket: FetchTicket, result: Result<Vec<Title>, Error>) {
        if ticket != self.ticket() {
            log::debug!(
                "dropping stale {} result (generation {}, current {})",
                ticket.section,
                ticket.generation,
                self.generation
            );
            return;
        }
        match result {
            Ok(titles) => {
                log::debug!("{}: {} titles", self.section, titles.len());
                self.configure(titles);
            }
            Err(err) => {
                log::error!("failed to load {}: {}", self.section, err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(names: &[&str]) -> Vec<Title> {
        names
            .iter()
            .enumerate()
            .map(|(id, name)| Title {
                id: id as u64,
                original_title: Some(name.to_string()),
                poster_path: Some(format!("/{name}.jpg")),
                ..Title::default()
            })
            .collect()
    }

    fn names(row: &TitleRow) -> Vec<&str> {
        row.cells.iter().map(TitleCell::name).collect()
    }

    #[test]
    fn configure_empty_list_yields_no_cells() {
        let mut row = TitleRow::new(Section::Popular);
        row.configure(Vec::new());
        assert!(row.is_empty());
        assert_eq!(row.len(), 0);
    }

    #[test]
    fn configure_indexes_cells_in_input_order() {
        let mut row = TitleRow::new(Section::Popular);
        row.configure(titles(&["Alien", "Brazil", "Cube"]));
        assert_eq!(row.len(), 3);
        assert_eq!(names(&row), vec!["Alien", "Brazil", "Cube"]);
        for (position, cell) in row.cells.iter().enumerate() {
            assert_eq!(cell.index, position);
        }
    }

    #[test]
    fn configure_replaces_previous_contents() {
        let mut row = TitleRow::new(Section::TopRated);
        row.configure(titles(&["Alien", "Brazil", "Cube"]));
        row.configure(titles(&["Dune"]));
        assert_eq!(row.len(), 1);
        assert_eq!(names(&row), vec!["Dune"]);
        assert_eq!(row.cells[0].index, 0);
    }

    #[test]
    fn cell_without_poster_has_no_location() {
        let mut row = TitleRow::new(Section::Upcoming);
        row.configure(vec![Title {
            original_title: Some("Untitled".into()),
            poster_path: None,
            ..Title::default()
        }]);
        assert_eq!(row.cells[0].poster_location(), None);
        assert_eq!(&*row.cells[0].preview().title, "Untitled");
    }

    #[test]
    fn preview_at_uses_the_selected_index() {
        let mut row = TitleRow::new(Section::TrendingMovies);
        row.configure(titles(&["Alien", "Brazil", "Cube"]));
        for (index, name) in ["Alien", "Brazil", "Cube"].into_iter().enumerate() {
            let preview = row.preview_at(index).unwrap();
            assert_eq!(&*preview.title, name);
            assert_eq!(row.cells[index].preview(), preview);
        }
        assert_eq!(row.preview_at(3), None);
    }

    #[test]
    fn failed_fetch_keeps_previous_contents() {
        let mut row = TitleRow::new(Section::TrendingTv);
        row.configure(titles(&["Dark"]));
        let ticket = row.ticket();
        row.apply(ticket, Err(Error::UnexpectedStatus(503)));
        assert_eq!(names(&row), vec!["Dark"]);
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut row = TitleRow::new(Section::TrendingTv);
        let stale = row.ticket();
        let fresh = row.invalidate();
        assert_ne!(stale, fresh);

        row.apply(stale, Ok(titles(&["Old"])));
        assert!(row.is_empty());

        row.apply(fresh, Ok(titles(&["New"])));
        assert_eq!(names(&row), vec!["New"]);
    }
}
