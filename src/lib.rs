pub mod backend;
pub mod config;
pub mod flow;
pub mod models;
pub mod schedule;

pub use backend::{BackendError, BookingBackend, ConfirmationRequest, MockBackend};
pub use flow::{Effect, Event, FlowState, Screen, Step};
pub use models::{AppointmentKind, Center, Confirmation, UserProfile};

#[cfg(feature = "gui")]
pub mod gui;
