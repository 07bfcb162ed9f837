use iced::{Element, Task, Theme};
use time::Date;
use tracing::info;

use crate::backend::{self, BookingBackend, MockBackend};
use crate::flow::{Effect, Event, FlowState};

use super::screens;

#[derive(Debug, Clone)]
pub struct AppFlags {
    pub today: Date,
    pub start_step: Option<String>,
}

pub struct BookingApp {
    state: FlowState,
    backend: MockBackend,
}

impl BookingApp {
    pub fn new(flags: AppFlags) -> (Self, Task<Event>) {
        let mut state = FlowState::new(flags.today);
        if let Some(step) = &flags.start_step {
            state.start_at(step);
        }
        let mut app = Self {
            state,
            backend: MockBackend::default(),
        };
        // The catalog load of the wizard mount.
        let boot = match app.state.apply(Event::CentersRequested) {
            Some(effect) => app.run_effect(effect),
            None => Task::none(),
        };
        (app, boot)
    }

    pub fn update(&mut self, event: Event) -> Task<Event> {
        match self.state.apply(event) {
            Some(effect) => self.run_effect(effect),
            None => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Event> {
        screens::view(&self.state)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn run_effect(&self, effect: Effect) -> Task<Event> {
        let backend = self.backend;
        match effect {
            Effect::LookupIdentity { seq, identifier } => Task::perform(
                async move {
                    backend::with_retry("identity lookup", || {
                        backend.lookup_identity(&identifier)
                    })
                    .await
                },
                move |result| Event::LookupFinished { seq, result },
            ),
            Effect::LoadCenters { seq } => Task::perform(
                async move { backend::with_retry("center catalog", || backend.list_centers()).await },
                move |result| Event::CentersLoaded { seq, result },
            ),
            Effect::ConfirmAppointment { seq, request } => Task::perform(
                async move {
                    backend::with_retry("appointment confirmation", || {
                        backend.confirm_appointment(&request)
                    })
                    .await
                },
                move |result| Event::ConfirmationFinished { seq, result },
            ),
        }
    }
}

pub fn run(flags: AppFlags) -> iced::Result {
    info!("starting booking wizard");
    iced::application(
        move || BookingApp::new(flags.clone()),
        BookingApp::update,
        BookingApp::view,
    )
    .title("Citaflow - Appointment Booking")
    .theme(BookingApp::theme)
    .run()
}
