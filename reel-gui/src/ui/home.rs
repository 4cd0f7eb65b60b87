use std::rc::Rc;

use druid::{
    widget::{CrossAxisAlignment, Flex, Scroll},
    Selector, Widget, WidgetExt,
};
use reel_core::{catalog::CatalogHandle, section::Section};

use crate::{
    cmd,
    data::{FetchTicket, Home, Nav, TitleRow},
    widget::MyWidgetExt,
};

use super::{hero, row, utils};

pub const LOAD_SECTION: Selector<FetchTicket> = Selector::new("app.home.load-section");

pub fn home_widget(catalog: CatalogHandle) -> impl Widget<Home> {
    let mut sections = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(hero::hero_widget(catalog.clone()));

    for section in Section::ALL {
        sections = sections
            .with_child(utils::header_widget(section.header()))
            .with_child(section_widget(section, catalog.clone()));
    }

    Scroll::new(sections).vertical().expand()
}

fn section_widget(section: Section, catalog: CatalogHandle) -> impl Widget<Home> {
    let on_select: row::OnSelect = Rc::new(|ctx, preview| {
        ctx.submit_command(cmd::NAVIGATE.with(Nav::TitlePreview(preview)));
    });

    row::title_row_widget(on_select)
        .on_command_async(
            LOAD_SECTION,
            move |ticket: FetchTicket| ticket.section.fetch(catalog.as_ref()),
            |_, _, _| {},
            |_, row: &mut TitleRow, (ticket, result)| row.apply(ticket, result),
        )
        .on_ticket(LOAD_SECTION, TitleRow::ticket)
        .lens(Home::row_lens(section))
}
