use druid::{im::Vector, lens, Data, Lens};
use rand::{seq::IndexedRandom, Rng};
use reel_core::{error::Error, section::Section, title::Title};

use crate::data::{TitleRow, TitleViewModel};

#[derive(Clone, Debug, Data, Lens)]
pub struct Home {
    pub hero: Option<TitleViewModel>,
    pub hero_generation: usize,
    pub rows: Vector<TitleRow>,
}

impl Home {
    pub fn new() -> Self {
        Self {
            hero: None,
            hero_generation: 0,
            rows: Section::ALL.into_iter().map(TitleRow::new).collect(),
        }
    }

    pub fn row(&self, section: Section) -> &TitleRow {
        &self.rows[section.index()]
    }

    pub fn row_mut(&mut self, section: Section) -> &mut TitleRow {
        &mut self.rows[section.index()]
    }

    pub fn row_lens(section: Section) -> impl Lens<Home, TitleRow> {
        lens::Field::new(
            move |home: &Home| home.row(section),
            move |home: &mut Home| home.row_mut(section),
        )
    }

    /// Feature a random title from `result`.  Failures and empty lists leave the banner
    /// as it was.
    pub fn apply_hero<R: Rng + ?Sized>(
        &mut self,
        generation: usize,
        result: Result<Vec<Title>, Error>,
        rng: &mut R,
    ) {
        if generation != self.hero_generation {
            log::debug!("dropping stale hero result");
            return;
        }
        match result {
            Ok(titles) => match titles.choose(rng) {
                Some(title) => {
                    self.hero = Some(TitleViewModel::from(title));
                }
                None => {
                    log::warn!("no trending titles to feature");
                }
            },
            Err(err) => {
                log::error!("failed to load featured title: {}", err);
            }
        }
    }

    /// Invalidate all in-flight fetches.  Row widgets notice the new generation and
    /// fetch again.
    pub fn refresh(&mut self) {
        self.hero_generation = self.hero_generation.wrapping_add(1);
        for row in self.rows.iter_mut() {
            row.invalidate();
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn titles(names: &[&str]) -> Vec<Title> {
        names
            .iter()
            .map(|name| Title {
                original_title: Some(name.to_string()),
                ..Title::default()
            })
            .collect()
    }

    #[test]
    fn has_one_row_per_section_in_order() {
        let home = Home::new();
        assert_eq!(home.rows.len(), Section::COUNT);
        for section in Section::ALL {
            assert_eq!(home.row(section).section, section);
            assert!(home.row(section).is_empty());
        }
    }

    #[test]
    fn failed_section_does_not_touch_other_rows() {
        let mut home = Home::new();
        for section in Section::ALL {
            let ticket = home.row(section).ticket();
            home.row_mut(section)
                .apply(ticket, Ok(titles(&[section.label()])));
        }

        let ticket = home.row(Section::Popular).ticket();
        home.row_mut(Section::Popular)
            .apply(ticket, Err(Error::UnexpectedStatus(500)));

        for section in Section::ALL {
            let row = home.row(section);
            assert_eq!(row.len(), 1, "{section}");
            assert_eq!(row.cells[0].name(), section.label());
        }
    }

    #[test]
    fn row_lens_targets_its_section() {
        let mut home = Home::new();
        Home::row_lens(Section::Upcoming).with_mut(&mut home, |row| {
            row.configure(titles(&["Nope"]));
        });
        assert_eq!(home.row(Section::Upcoming).len(), 1);
        assert!(home.row(Section::TopRated).is_empty());
        let len = Home::row_lens(Section::Upcoming).with(&home, |row| row.len());
        assert_eq!(len, 1);
    }

    #[test]
    fn hero_is_picked_from_trending_titles() {
        let mut home = Home::new();
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = ["Alien", "Brazil", "Cube"];
        home.apply_hero(0, Ok(titles(&candidates)), &mut rng);
        let hero = home.hero.clone().unwrap();
        assert!(candidates.contains(&&*hero.title_name));
    }

    #[test]
    fn hero_stays_unconfigured_on_failure_or_empty_list() {
        let mut home = Home::new();
        let mut rng = StdRng::seed_from_u64(1);
        home.apply_hero(0, Err(Error::MissingApiKey), &mut rng);
        assert_eq!(home.hero, None);
        home.apply_hero(0, Ok(Vec::new()), &mut rng);
        assert_eq!(home.hero, None);
    }

    #[test]
    fn refresh_makes_pending_results_stale() {
        let mut home = Home::new();
        let mut rng = StdRng::seed_from_u64(3);
        let hero_generation = home.hero_generation;
        let ticket = home.row(Section::TrendingTv).ticket();

        home.refresh();

        home.apply_hero(hero_generation, Ok(titles(&["Old"])), &mut rng);
        assert_eq!(home.hero, None);
        home.row_mut(Section::TrendingTv)
            .apply(ticket, Ok(titles(&["Old"])));
        assert!(home.row(Section::TrendingTv).is_empty());

        let ticket = home.row(Section::TrendingTv).ticket();
        home.row_mut(Section::TrendingTv)
            .apply(ticket, Ok(titles(&["New"])));
        assert_eq!(home.row(Section::TrendingTv).len(), 1);
    }
}
