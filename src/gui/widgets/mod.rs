use iced::{
    Color, Element, Theme, border,
    widget::{button, column, container, container::Style, row, text},
};
use iced::widget::container::bordered_box;

use crate::flow::Event;

/// The coarse phases shown in the wizard sidebar. Steps before the
/// identifier entry (and the terminal screens) render without a sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Identify,
    Center,
    Schedule,
    Review,
}

impl PartialOrd for Phase {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Phase {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use Phase::*;
        let rank = |phase: &Phase| match phase {
            Identify => 0,
            Center => 1,
            Schedule => 2,
            Review => 3,
        };
        rank(self).cmp(&rank(other))
    }
}

impl Phase {
    fn style(self, other: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(5));
            // reached phases get a darkened background
            if self >= other {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

pub fn wizard_layout<'a>(
    main_content: impl Into<Element<'a, Event>>,
    phase: Phase,
) -> Element<'a, Event> {
    container(row![
        container(column![
            container(column![
                container(text("Identify")).style(phase.style(Phase::Identify)).padding(10),
                container(text("Center")).style(phase.style(Phase::Center)).padding(10),
                container(text("Schedule")).style(phase.style(Phase::Schedule)).padding(10),
                container(text("Review")).style(phase.style(Phase::Review)).padding(10),
            ]),
            container(
                button("Start over")
                    .style(button::danger)
                    .on_press(Event::Reset)
            )
            .height(iced::Length::Fill)
            .padding(10),
        ])
        .width(iced::Length::FillPortion(1)),
        container(main_content.into())
            .width(iced::Length::FillPortion(4))
            .padding(20),
    ])
    .center_x(iced::Length::Fill)
    .center_y(iced::Length::Fill)
    .into()
}

pub fn back_bar<'a>() -> Element<'a, Event> {
    row![
        button(text("< Back"))
            .style(button::secondary)
            .on_press(Event::Back)
    ]
    .into()
}

pub fn error_line(message: &str) -> Element<'_, Event> {
    text(message).style(text::danger).into()
}
