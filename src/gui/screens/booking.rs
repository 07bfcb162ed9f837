use iced::{
    Element,
    widget::{Column, Row, button, column, scrollable, text},
};
use time::Date;

use crate::flow::{Event, FlowState};
use crate::gui::widgets::{Phase, back_bar, error_line, wizard_layout};
use crate::models::Center;
use crate::schedule;

pub fn select_center(state: &FlowState) -> Element<'_, Event> {
    let body: Element<'_, Event> = if state.centers.is_empty() {
        if state.is_busy() {
            text("Loading centers...").into()
        } else {
            Column::new()
                .extend(state.error.as_deref().map(error_line))
                .push(
                    button("Retry")
                        .style(button::primary)
                        .on_press(Event::CentersRequested),
                )
                .spacing(20)
                .into()
        }
    } else {
        scrollable(Column::with_children(state.centers.iter().map(center_card)).spacing(10))
            .into()
    };

    let content = column![back_bar(), text("Select a center").size(32), body]
        .spacing(20)
        .max_width(700);

    wizard_layout(content, Phase::Center)
}

fn center_card(center: &Center) -> Element<'_, Event> {
    button(
        column![
            text(center.name.as_str()).size(20),
            text(center.country_name.as_str()).size(14),
            text(center.address.as_str()),
            text(center.phone.as_str()),
            text(center.maps_url()).size(12),
        ]
        .spacing(5),
    )
    .style(button::secondary)
    .width(iced::Length::Fill)
    .padding(15)
    .on_press(Event::CenterPicked(center.clone()))
    .into()
}

pub fn select_date<'a>(state: &'a FlowState, center: &'a Center) -> Element<'a, Event> {
    let rows = state.available_dates.chunks(4).map(|chunk| {
        Row::with_children(chunk.iter().copied().map(date_card))
            .spacing(10)
            .into()
    });

    let content = column![
        back_bar(),
        text("Select a date").size(32),
        text(center.name.as_str()),
        scrollable(Column::with_children(rows).spacing(10)),
    ]
    .spacing(20);

    wizard_layout(content, Phase::Schedule)
}

fn date_card<'a>(date: Date) -> Element<'a, Event> {
    button(
        column![
            text(date.weekday().to_string()).size(12),
            text(format!("{:02}", date.day())).size(24),
            text(date.month().to_string()).size(12),
        ]
        .spacing(2)
        .align_x(iced::Alignment::Center),
    )
    .style(button::secondary)
    .padding(15)
    .on_press(Event::DatePicked(date))
    .into()
}

pub fn select_time<'a>(state: &'a FlowState, center: &'a Center, date: Date) -> Element<'a, Event> {
    let rows = state.available_times.chunks(4).map(|chunk| {
        Row::with_children(chunk.iter().copied().map(time_card))
            .spacing(10)
            .into()
    });

    let content = column![
        back_bar(),
        text("Select a time").size(32),
        text(format!("{}, {}", schedule::long_date(date), center.name)),
        Column::with_children(rows).spacing(10),
    ]
    .spacing(20);

    wizard_layout(content, Phase::Schedule)
}

fn time_card<'a>(slot: &'static str) -> Element<'a, Event> {
    button(text(slot).size(18))
        .style(button::secondary)
        .padding(15)
        .on_press(Event::TimePicked(slot))
        .into()
}
