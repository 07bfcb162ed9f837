use iced::{
    Element,
    widget::{button, column, text, text_input},
};

use crate::flow::{Event, FlowState};
use crate::gui::widgets::{Phase, back_bar, error_line, wizard_layout};
use crate::models::{AppointmentKind, UserProfile};

pub fn identifier(state: &FlowState, kind: AppointmentKind) -> Element<'_, Event> {
    let hint = match kind {
        AppointmentKind::Group => "First person of the group",
        AppointmentKind::Individual => "Enter your identification",
    };
    let submit_label = if state.is_busy() { "Searching..." } else { "Continue" };

    let content = column![
        back_bar(),
        text("Identification").size(32),
        text(hint),
        text_input("e.g. 001-1234567-8", &state.identifier)
            .on_input(Event::IdentifierEdited)
            .on_submit(Event::IdentifierSubmitted)
            .padding(10),
    ]
    .extend(state.error.as_deref().map(error_line))
    .push(
        button(text(submit_label))
            .style(button::primary)
            .on_press_maybe((!state.is_busy()).then_some(Event::IdentifierSubmitted)),
    )
    .spacing(20)
    .max_width(600);

    wizard_layout(content, Phase::Identify)
}

pub fn confirm_user(user: &UserProfile) -> Element<'_, Event> {
    let field = |label: &'static str, value: String| {
        column![text(label).size(14), text(value).size(18)].spacing(2)
    };

    let content = column![
        back_bar(),
        text("Confirm your details").size(32),
        field("Full name", user.full_name()),
        field("Identification", user.identifier.clone()),
        field("Email", user.email.clone()),
        field("Phone", user.phone.clone()),
        button("Confirm and continue")
            .style(button::primary)
            .on_press(Event::UserConfirmed),
    ]
    .spacing(20)
    .max_width(600);

    wizard_layout(content, Phase::Identify)
}
