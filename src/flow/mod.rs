//! The booking flow controller: a finite state machine over the wizard's
//! screens. [`FlowState::apply`] is a pure transition function from an
//! [`Event`] to the next state plus an optional [`Effect`]; the shell runs
//! effects against the backend and feeds the responses back in as events.
//! Nothing in this module performs I/O, so the whole wizard is unit
//! testable without a rendering environment.

mod step;

pub use step::{Step, UnknownStep};

use time::Date;
use tracing::{debug, warn};

use crate::backend::{BackendError, ConfirmationRequest};
use crate::models::{AppointmentKind, Center, Confirmation, UserProfile};
use crate::schedule;

/// Everything a user click can produce, plus the completions of the
/// asynchronous backend requests. Completion events carry the sequence
/// number of the request they answer so stale responses can be dropped.
#[derive(Debug, Clone)]
pub enum Event {
    StartVerify,
    StartBooking,
    KindChosen(AppointmentKind),
    IdentifierEdited(String),
    IdentifierSubmitted,
    LookupFinished {
        seq: u64,
        result: Result<UserProfile, BackendError>,
    },
    VerifyCodeEdited(String),
    VerifySubmitted,
    UserConfirmed,
    CentersRequested,
    CentersLoaded {
        seq: u64,
        result: Result<Vec<Center>, BackendError>,
    },
    CenterPicked(Center),
    DatePicked(Date),
    TimePicked(&'static str),
    AppointmentConfirmed,
    ConfirmationFinished {
        seq: u64,
        result: Result<Confirmation, BackendError>,
    },
    Back,
    Reset,
}

/// A backend request the shell must run. The reducer never awaits anything
/// itself; it hands one of these back instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LookupIdentity { seq: u64, identifier: String },
    LoadCenters { seq: u64 },
    ConfirmAppointment { seq: u64, request: ConfirmationRequest },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Lookup,
    Centers,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    kind: RequestKind,
    seq: u64,
}

/// The single mutable record behind the wizard. Later-stage fields are only
/// ever populated after the earlier ones, in step order; `apply` is the only
/// place that moves the flow forward.
#[derive(Debug, Clone)]
pub struct FlowState {
    pub step: Step,
    pub kind: Option<AppointmentKind>,
    pub identifier: String,
    pub verify_code: String,
    pub current_user: Option<UserProfile>,
    pub centers: Vec<Center>,
    pub selected_center: Option<Center>,
    pub available_dates: Vec<Date>,
    pub selected_date: Option<Date>,
    pub available_times: Vec<&'static str>,
    pub selected_time: Option<String>,
    pub confirmation: Option<Confirmation>,
    pub error: Option<String>,
    today: Date,
    pending: Option<Pending>,
    next_seq: u64,
    invalid_step: Option<String>,
}

impl FlowState {
    pub fn new(today: Date) -> Self {
        Self {
            step: Step::Initial,
            kind: None,
            identifier: String::new(),
            verify_code: String::new(),
            current_user: None,
            centers: Vec::new(),
            selected_center: None,
            available_dates: Vec::new(),
            selected_date: None,
            available_times: Vec::new(),
            selected_time: None,
            confirmation: None,
            error: None,
            today,
            pending: None,
            next_seq: 0,
            invalid_step: None,
        }
    }

    /// Jump to an externally supplied step, e.g. the `--step` diagnostic
    /// flag. An unknown name is kept verbatim and rendered as the
    /// invalid-state screen.
    pub fn start_at(&mut self, raw: &str) {
        match raw.parse::<Step>() {
            Ok(step) => self.step = step,
            Err(UnknownStep(value)) => {
                warn!(step = %value, "unknown start step requested");
                self.invalid_step = Some(value);
            }
        }
    }

    /// True while a backend request is outstanding; the view uses this to
    /// disable re-submission.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn today(&self) -> Date {
        self.today
    }

    /// Process one event. Returns the backend request to run, if the
    /// transition requires one.
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::StartVerify if self.step == Step::Initial => {
                self.transition(Step::Verify);
                None
            }
            Event::StartBooking if self.step == Step::Initial => {
                self.transition(Step::Kind);
                None
            }
            Event::KindChosen(kind) if self.step == Step::Kind => {
                self.kind = Some(kind);
                self.transition(Step::Identifier);
                None
            }
            Event::IdentifierEdited(value) if self.step == Step::Identifier => {
                self.identifier = value;
                None
            }
            Event::IdentifierSubmitted if self.step == Step::Identifier => {
                self.submit_identifier()
            }
            Event::LookupFinished { seq, result } => self.finish_lookup(seq, result),
            Event::VerifyCodeEdited(value) if self.step == Step::Verify => {
                self.verify_code = value;
                None
            }
            Event::VerifySubmitted if self.step == Step::Verify => {
                // Placeholder until the verification capability exists;
                // surfaced through the same inline error field as every
                // other failure.
                self.error = Some(if self.verify_code.trim().is_empty() {
                    "Enter the QR code or appointment number".to_string()
                } else {
                    "Appointment verification is not available yet".to_string()
                });
                None
            }
            Event::UserConfirmed
                if self.step == Step::ConfirmUser && self.current_user.is_some() =>
            {
                self.transition(Step::SelectCenter);
                None
            }
            Event::CentersRequested if self.centers.is_empty() && !self.is_busy() => {
                let seq = self.begin(RequestKind::Centers);
                Some(Effect::LoadCenters { seq })
            }
            Event::CentersLoaded { seq, result } => self.finish_centers(seq, result),
            Event::CenterPicked(center) if self.step == Step::SelectCenter => {
                self.selected_center = Some(center);
                self.available_dates =
                    schedule::available_dates(self.today, schedule::LOOKAHEAD_DAYS);
                self.transition(Step::SelectDate);
                None
            }
            Event::DatePicked(date) if self.step == Step::SelectDate => {
                self.selected_date = Some(date);
                self.available_times = schedule::available_times();
                self.transition(Step::SelectTime);
                None
            }
            Event::TimePicked(time) if self.step == Step::SelectTime => {
                self.selected_time = Some(time.to_string());
                self.transition(Step::Summary);
                None
            }
            Event::AppointmentConfirmed if self.step == Step::Summary => {
                self.submit_confirmation()
            }
            Event::ConfirmationFinished { seq, result } => self.finish_confirmation(seq, result),
            Event::Back => {
                self.go_back();
                None
            }
            Event::Reset => {
                self.reset();
                None
            }
            other => {
                debug!(step = %self.step, event = ?other, "event ignored in current step");
                None
            }
        }
    }

    fn submit_identifier(&mut self) -> Option<Effect> {
        if self.is_busy() {
            return None;
        }
        let identifier = self.identifier.trim().to_string();
        if identifier.is_empty() {
            self.error = Some("Enter a valid ID or event number".to_string());
            return None;
        }
        self.error = None;
        let seq = self.begin(RequestKind::Lookup);
        Some(Effect::LookupIdentity {
            seq,
            identifier,
        })
    }

    fn finish_lookup(
        &mut self,
        seq: u64,
        result: Result<UserProfile, BackendError>,
    ) -> Option<Effect> {
        if !self.settle(RequestKind::Lookup, seq) {
            return None;
        }
        match result {
            Ok(profile) => {
                self.current_user = Some(profile);
                self.transition(Step::ConfirmUser);
            }
            Err(err) => {
                debug!(error = %err, "identity lookup failed");
                self.error = Some(err.to_string());
            }
        }
        None
    }

    fn finish_centers(
        &mut self,
        seq: u64,
        result: Result<Vec<Center>, BackendError>,
    ) -> Option<Effect> {
        if !self.settle(RequestKind::Centers, seq) {
            return None;
        }
        match result {
            Ok(centers) => {
                debug!(count = centers.len(), "center catalog loaded");
                self.centers = centers;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "center catalog fetch failed");
                self.error = Some(err.to_string());
            }
        }
        None
    }

    fn submit_confirmation(&mut self) -> Option<Effect> {
        if self.is_busy() {
            return None;
        }
        let (Some(user), Some(center), Some(date), Some(time)) = (
            self.current_user.as_ref(),
            self.selected_center.as_ref(),
            self.selected_date,
            self.selected_time.as_deref(),
        ) else {
            warn!("confirmation requested with incomplete booking data");
            return None;
        };
        let request = ConfirmationRequest {
            user_id: user.id.clone(),
            center_id: center.id.clone(),
            date: schedule::iso_date(date),
            time: time.to_string(),
        };
        self.error = None;
        let seq = self.begin(RequestKind::Confirm);
        Some(Effect::ConfirmAppointment { seq, request })
    }

    fn finish_confirmation(
        &mut self,
        seq: u64,
        result: Result<Confirmation, BackendError>,
    ) -> Option<Effect> {
        if !self.settle(RequestKind::Confirm, seq) {
            return None;
        }
        match result {
            Ok(confirmation) => {
                self.confirmation = Some(confirmation);
                self.transition(Step::Complete);
            }
            Err(err) => {
                warn!(error = %err, "appointment confirmation failed");
                self.error = Some(err.to_string());
            }
        }
        None
    }

    fn go_back(&mut self) {
        // Navigating away abandons any outstanding request; its response
        // will no longer match and gets dropped.
        self.pending = None;
        match self.step {
            Step::Verify | Step::Kind => self.reset(),
            Step::Identifier => self.transition(Step::Kind),
            Step::ConfirmUser => self.transition(Step::Identifier),
            Step::SelectCenter => self.transition(Step::ConfirmUser),
            Step::SelectDate => self.transition(Step::SelectCenter),
            Step::SelectTime => self.transition(Step::SelectDate),
            Step::Summary => self.transition(Step::SelectTime),
            Step::Initial | Step::Complete => {
                debug!(step = %self.step, "back ignored");
            }
        }
    }

    /// Return to the initial screen and clear every flow field. The center
    /// catalog is reference data, not flow data, and survives; so does the
    /// sequence counter, which keeps responses from a pre-reset request
    /// distinguishable from fresh ones.
    fn reset(&mut self) {
        let centers = std::mem::take(&mut self.centers);
        let next_seq = self.next_seq;
        *self = FlowState::new(self.today);
        self.centers = centers;
        self.next_seq = next_seq;
        debug!("flow reset");
    }

    fn transition(&mut self, to: Step) {
        debug!(from = %self.step, %to, "transition");
        self.step = to;
        self.error = None;
    }

    fn begin(&mut self, kind: RequestKind) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending = Some(Pending { kind, seq });
        seq
    }

    /// Accept a response only if it answers the currently pending request;
    /// anything else is stale (the user navigated away or reset).
    fn settle(&mut self, kind: RequestKind, seq: u64) -> bool {
        if self.pending == Some(Pending { kind, seq }) {
            self.pending = None;
            true
        } else {
            debug!(?kind, seq, "dropped stale response");
            false
        }
    }

    /// Project the state onto the single screen to render. Preconditions
    /// are checked here: a step whose required fields are missing yields
    /// [`Screen::Invalid`] instead of panicking further down.
    pub fn screen(&self) -> Screen<'_> {
        if let Some(step) = &self.invalid_step {
            return Screen::Invalid { step: step.clone() };
        }
        match self.step {
            Step::Initial => Screen::Initial,
            Step::Verify => Screen::Verify,
            Step::Kind => Screen::Kind,
            Step::Identifier => match self.kind {
                Some(kind) => Screen::Identifier { kind },
                None => self.invalid(),
            },
            Step::ConfirmUser => match &self.current_user {
                Some(user) => Screen::ConfirmUser { user },
                None => self.invalid(),
            },
            Step::SelectCenter => match &self.current_user {
                Some(_) => Screen::SelectCenter,
                None => self.invalid(),
            },
            Step::SelectDate => match &self.selected_center {
                Some(center) => Screen::SelectDate { center },
                None => self.invalid(),
            },
            Step::SelectTime => match (&self.selected_center, self.selected_date) {
                (Some(center), Some(date)) => Screen::SelectTime { center, date },
                _ => self.invalid(),
            },
            Step::Summary => match (
                &self.current_user,
                &self.selected_center,
                self.selected_date,
                self.selected_time.as_deref(),
            ) {
                (Some(user), Some(center), Some(date), Some(time)) => Screen::Summary {
                    user,
                    center,
                    date,
                    time,
                },
                _ => self.invalid(),
            },
            Step::Complete => match &self.confirmation {
                Some(confirmation) => Screen::Complete { confirmation },
                None => self.invalid(),
            },
        }
    }

    fn invalid(&self) -> Screen<'_> {
        Screen::Invalid {
            step: self.step.to_string(),
        }
    }
}

/// What the view should draw. Exactly one variant per state; variants carry
/// the fields whose presence the state requires, already unwrapped.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    Initial,
    Verify,
    Kind,
    Identifier {
        kind: AppointmentKind,
    },
    ConfirmUser {
        user: &'a UserProfile,
    },
    SelectCenter,
    SelectDate {
        center: &'a Center,
    },
    SelectTime {
        center: &'a Center,
        date: Date,
    },
    Summary {
        user: &'a UserProfile,
        center: &'a Center,
        date: Date,
        time: &'a str,
    },
    Complete {
        confirmation: &'a Confirmation,
    },
    Invalid {
        step: String,
    },
}
