use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, row, text},
};
use time::Date;

use crate::flow::{Event, FlowState};
use crate::gui::widgets::{Phase, back_bar, error_line, wizard_layout};
use crate::models::{Center, Confirmation, UserProfile};
use crate::schedule;

fn field<'a>(label: &'static str, value: String) -> Element<'a, Event> {
    column![text(label).size(14), text(value).size(18)]
        .spacing(2)
        .into()
}

pub fn summary<'a>(
    state: &'a FlowState,
    user: &'a UserProfile,
    center: &'a Center,
    date: Date,
    time: &'a str,
) -> Element<'a, Event> {
    let confirm_label = if state.is_busy() {
        "Processing..."
    } else {
        "Confirm appointment"
    };

    let content = column![
        back_bar(),
        text("Appointment summary").size(32),
        container(
            column![
                text("Personal details").size(20),
                row![
                    field("Name", user.full_name()),
                    field("Identification", user.identifier.clone()),
                ]
                .spacing(40),
                row![
                    field("Email", user.email.clone()),
                    field("Phone", user.phone.clone()),
                ]
                .spacing(40),
            ]
            .spacing(10)
        )
        .style(container::bordered_box)
        .padding(15),
        container(
            column![
                text("Appointment details").size(20),
                field("Center", format!("{}, {}", center.name, center.address)),
                row![
                    field("Date", schedule::long_date(date)),
                    field("Time", time.to_string()),
                ]
                .spacing(40),
            ]
            .spacing(10)
        )
        .style(container::bordered_box)
        .padding(15),
    ]
    .extend(state.error.as_deref().map(error_line))
    .push(
        button(text(confirm_label))
            .style(button::success)
            .padding(15)
            .on_press_maybe((!state.is_busy()).then_some(Event::AppointmentConfirmed)),
    )
    .spacing(20)
    .max_width(700);

    wizard_layout(content, Phase::Review)
}

pub fn complete(confirmation: &Confirmation) -> Element<'_, Event> {
    let content = column![
        text("Appointment confirmed!").size(32),
        text(
            "Your appointment has been scheduled. You will receive an email \
             and SMS with the details and a QR code to verify it."
        ),
        container(
            column![
                text(confirmation.qr_payload.as_str()).size(14),
                text(format!("Confirmation {}", confirmation.id)).size(12),
            ]
            .spacing(5)
            .align_x(Alignment::Center),
        )
        .style(container::bordered_box)
        .padding(30),
        text("Keep this code to verify your appointment").size(14),
        button("Book another appointment")
            .style(button::primary)
            .padding(15)
            .on_press(Event::Reset),
    ]
    .spacing(20)
    .padding(20)
    .align_x(Alignment::Center)
    .max_width(600);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

pub fn invalid(step: String) -> Element<'static, Event> {
    let content = column![
        text("Invalid state").size(32).style(text::danger),
        text(format!("step = {step}")),
        button("Restart")
            .style(button::danger)
            .on_press(Event::Reset),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
