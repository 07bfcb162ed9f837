use citaflow::backend::{self, BookingBackend, MockBackend};
use citaflow::flow::{Effect, Event, FlowState};
use citaflow::models::{Center, UserProfile};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024 - 06 - 01);

pub fn fresh_flow() -> FlowState {
    FlowState::new(TODAY)
}

pub fn profile(identifier: &str) -> UserProfile {
    UserProfile {
        id: "1".into(),
        identifier: identifier.to_string(),
        first_name: "Juan".into(),
        last_name: "Pérez".into(),
        email: "juan.perez@email.com".into(),
        phone: "+1 809 555 0000".into(),
    }
}

pub fn center() -> Center {
    Center {
        id: "9".into(),
        name: "Centro Pruebas".into(),
        address: "Av. de la Constitución 1".into(),
        phone: "+34 91 000 0000".into(),
        latitude: 40.0,
        longitude: -3.0,
        country_name: "España".into(),
    }
}

/// Run one effect against a backend and produce the completion event,
/// mirroring what the GUI shell does with an iced task.
pub async fn dispatch(backend: &MockBackend, effect: Effect) -> Event {
    match effect {
        Effect::LookupIdentity { seq, identifier } => Event::LookupFinished {
            seq,
            result: backend::with_retry("identity lookup", || backend.lookup_identity(&identifier))
                .await,
        },
        Effect::LoadCenters { seq } => Event::CentersLoaded {
            seq,
            result: backend::with_retry("center catalog", || backend.list_centers()).await,
        },
        Effect::ConfirmAppointment { seq, request } => Event::ConfirmationFinished {
            seq,
            result: backend::with_retry("appointment confirmation", || {
                backend.confirm_appointment(&request)
            })
            .await,
        },
    }
}
