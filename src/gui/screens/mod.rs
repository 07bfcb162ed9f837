mod booking;
mod identity;
mod review;
mod start;

use iced::Element;

use crate::flow::{Event, FlowState, Screen};

/// Render the single screen the flow state projects to.
pub fn view(state: &FlowState) -> Element<'_, Event> {
    match state.screen() {
        Screen::Initial => start::initial(),
        Screen::Verify => start::verify(state),
        Screen::Kind => start::kind(),
        Screen::Identifier { kind } => identity::identifier(state, kind),
        Screen::ConfirmUser { user } => identity::confirm_user(user),
        Screen::SelectCenter => booking::select_center(state),
        Screen::SelectDate { center } => booking::select_date(state, center),
        Screen::SelectTime { center, date } => booking::select_time(state, center, date),
        Screen::Summary {
            user,
            center,
            date,
            time,
        } => review::summary(state, user, center, date, time),
        Screen::Complete { confirmation } => review::complete(confirmation),
        Screen::Invalid { step } => review::invalid(step),
    }
}
