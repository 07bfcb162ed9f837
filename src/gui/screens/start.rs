use iced::{
    Alignment::Center,
    Element,
    widget::{button, column, container, row, text, text_input},
};

use crate::flow::{Event, FlowState};
use crate::gui::widgets::{back_bar, error_line};
use crate::models::AppointmentKind;

pub fn initial() -> Element<'static, Event> {
    let content = column![
        text("Online Appointment System").size(32),
        text("Book a visit to a service center or check an existing appointment"),
        row![
            button(
                column![
                    text("Verify appointment").size(20),
                    text("Check the status of your appointment").size(14),
                ]
                .spacing(5)
                .align_x(Center)
            )
            .style(button::success)
            .padding(30)
            .on_press(Event::StartVerify),
            button(
                column![
                    text("New appointment").size(20),
                    text("Schedule a new appointment").size(14),
                ]
                .spacing(5)
                .align_x(Center)
            )
            .style(button::primary)
            .padding(30)
            .on_press(Event::StartBooking),
        ]
        .spacing(20),
    ]
    .spacing(20)
    .padding(20)
    .align_x(Center);

    container(content)
        .center_x(iced::Length::Fill)
        .center_y(iced::Length::Fill)
        .into()
}

pub fn verify(state: &FlowState) -> Element<'_, Event> {
    let content = column![
        back_bar(),
        text("Verify appointment").size(32),
        text_input("QR code or appointment number", &state.verify_code)
            .on_input(Event::VerifyCodeEdited)
            .on_submit(Event::VerifySubmitted)
            .padding(10),
    ]
    .extend(state.error.as_deref().map(error_line))
    .push(
        button("Verify")
            .style(button::primary)
            .on_press_maybe(
                (!state.verify_code.trim().is_empty()).then_some(Event::VerifySubmitted)
            ),
    )
    .spacing(20)
    .padding(20)
    .max_width(600);

    container(content)
        .center_x(iced::Length::Fill)
        .center_y(iced::Length::Fill)
        .into()
}

pub fn kind() -> Element<'static, Event> {
    let content = column![
        back_bar(),
        text("Appointment type").size(32),
        row![
            button(
                column![
                    text("Individual").size(20),
                    text("Schedule for one person").size(14),
                ]
                .spacing(5)
                .align_x(Center)
            )
            .style(button::primary)
            .padding(30)
            .on_press(Event::KindChosen(AppointmentKind::Individual)),
            button(
                column![
                    text("Group").size(20),
                    text("Schedule for several people").size(14),
                ]
                .spacing(5)
                .align_x(Center)
            )
            .style(button::secondary)
            .padding(30)
            .on_press(Event::KindChosen(AppointmentKind::Group)),
        ]
        .spacing(20),
    ]
    .spacing(20)
    .padding(20);

    container(content)
        .center_x(iced::Length::Fill)
        .center_y(iced::Length::Fill)
        .into()
}
