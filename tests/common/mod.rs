mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from citaflow for tests
pub use citaflow::{
    AppointmentKind, BackendError, BookingBackend, Center, Confirmation, ConfirmationRequest,
    Effect, Event, FlowState, MockBackend, Screen, Step, UserProfile,
};
