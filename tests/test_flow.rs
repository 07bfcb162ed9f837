mod common;

use common::*;
use citaflow::schedule;

/// Walk a fresh flow to the identifier entry step.
fn to_identifier(flow: &mut FlowState) {
    assert!(flow.apply(Event::StartBooking).is_none());
    assert!(
        flow.apply(Event::KindChosen(AppointmentKind::Individual))
            .is_none()
    );
    assert_eq!(flow.step, Step::Identifier);
}

/// Walk a fresh flow to the summary step without touching a backend, by
/// answering the lookup effect with a canned profile.
fn to_summary(flow: &mut FlowState, identifier: &str) {
    to_identifier(flow);
    flow.apply(Event::IdentifierEdited(identifier.to_string()));
    let effect = flow
        .apply(Event::IdentifierSubmitted)
        .expect("submit starts a lookup");
    let Effect::LookupIdentity { seq, .. } = effect else {
        panic!("expected a lookup effect, got {effect:?}");
    };
    flow.apply(Event::LookupFinished {
        seq,
        result: Ok(profile(identifier)),
    });
    assert_eq!(flow.step, Step::ConfirmUser);
    flow.apply(Event::UserConfirmed);
    flow.apply(Event::CenterPicked(center()));
    let date = flow.available_dates[0];
    flow.apply(Event::DatePicked(date));
    let slot = flow.available_times[0];
    flow.apply(Event::TimePicked(slot));
    assert_eq!(flow.step, Step::Summary);
}

#[test]
fn whitespace_identifier_never_triggers_lookup() {
    let mut flow = fresh_flow();
    to_identifier(&mut flow);
    flow.apply(Event::IdentifierEdited("   ".to_string()));
    assert!(flow.apply(Event::IdentifierSubmitted).is_none());
    assert_eq!(flow.step, Step::Identifier);
    assert!(flow.error.is_some());
    assert!(!flow.is_busy());
}

#[test]
fn lookup_failure_stays_on_identifier() {
    let mut flow = fresh_flow();
    to_identifier(&mut flow);
    flow.apply(Event::IdentifierEdited("404".to_string()));
    let Some(Effect::LookupIdentity { seq, .. }) = flow.apply(Event::IdentifierSubmitted) else {
        panic!("expected a lookup effect");
    };
    flow.apply(Event::LookupFinished {
        seq,
        result: Err(BackendError::NotFound),
    });
    assert_eq!(flow.step, Step::Identifier);
    assert!(flow.error.is_some());
    assert!(flow.current_user.is_none());
}

#[test]
fn resubmission_while_lookup_pending_is_ignored() {
    let mut flow = fresh_flow();
    to_identifier(&mut flow);
    flow.apply(Event::IdentifierEdited("001".to_string()));
    assert!(flow.apply(Event::IdentifierSubmitted).is_some());
    assert!(flow.is_busy());
    assert!(flow.apply(Event::IdentifierSubmitted).is_none());
}

#[test]
fn stale_lookup_response_is_dropped() {
    let mut flow = fresh_flow();
    to_identifier(&mut flow);
    flow.apply(Event::IdentifierEdited("001".to_string()));
    let Some(Effect::LookupIdentity { seq: stale_seq, .. }) =
        flow.apply(Event::IdentifierSubmitted)
    else {
        panic!("expected a lookup effect");
    };

    // user gives up waiting and navigates away
    flow.apply(Event::Back);
    assert_eq!(flow.step, Step::Kind);

    // the abandoned response must not mutate the flow
    flow.apply(Event::LookupFinished {
        seq: stale_seq,
        result: Ok(profile("001")),
    });
    assert_eq!(flow.step, Step::Kind);
    assert!(flow.current_user.is_none());

    // a fresh submission gets a new sequence number and still works
    flow.apply(Event::KindChosen(AppointmentKind::Individual));
    let Some(Effect::LookupIdentity { seq, .. }) = flow.apply(Event::IdentifierSubmitted) else {
        panic!("expected a second lookup effect");
    };
    assert_ne!(seq, stale_seq);
    flow.apply(Event::LookupFinished {
        seq,
        result: Ok(profile("001")),
    });
    assert_eq!(flow.step, Step::ConfirmUser);
}

#[test]
fn every_step_projects_to_one_screen() {
    for step in Step::ALL {
        let mut flow = fresh_flow();
        flow.start_at(step.as_str());
        let screen = flow.screen();
        match step {
            Step::Initial => assert!(matches!(screen, Screen::Initial)),
            Step::Verify => assert!(matches!(screen, Screen::Verify)),
            Step::Kind => assert!(matches!(screen, Screen::Kind)),
            // the remaining steps require fields a fresh flow does not
            // have and must degrade to the diagnostic screen
            _ => assert!(
                matches!(screen, Screen::Invalid { .. }),
                "step {step} should be invalid on a fresh flow"
            ),
        }
    }
}

#[test]
fn confirm_user_without_profile_renders_invalid() {
    let mut flow = fresh_flow();
    flow.start_at("confirm-user");
    match flow.screen() {
        Screen::Invalid { step } => assert_eq!(step, "confirm-user"),
        other => panic!("expected the diagnostic screen, got {other:?}"),
    }
}

#[test]
fn unknown_external_step_renders_invalid_verbatim() {
    let mut flow = fresh_flow();
    flow.start_at("checkout");
    match flow.screen() {
        Screen::Invalid { step } => assert_eq!(step, "checkout"),
        other => panic!("expected the diagnostic screen, got {other:?}"),
    }
}

#[test]
fn back_transitions_follow_the_step_order() {
    let mut flow = fresh_flow();
    to_summary(&mut flow, "001");
    let expected = [
        Step::SelectTime,
        Step::SelectDate,
        Step::SelectCenter,
        Step::ConfirmUser,
        Step::Identifier,
        Step::Kind,
        Step::Initial,
    ];
    for step in expected {
        flow.apply(Event::Back);
        assert_eq!(flow.step, step);
    }
    // leaving the type step is a full reset
    assert!(flow.kind.is_none());
    assert!(flow.current_user.is_none());
}

#[test]
fn reset_clears_every_flow_field() {
    let mut flow = fresh_flow();
    to_summary(&mut flow, "001");
    flow.apply(Event::Reset);

    assert_eq!(flow.step, Step::Initial);
    assert!(flow.kind.is_none());
    assert!(flow.identifier.is_empty());
    assert!(flow.verify_code.is_empty());
    assert!(flow.current_user.is_none());
    assert!(flow.selected_center.is_none());
    assert!(flow.available_dates.is_empty());
    assert!(flow.selected_date.is_none());
    assert!(flow.available_times.is_empty());
    assert!(flow.selected_time.is_none());
    assert!(flow.confirmation.is_none());
    assert!(flow.error.is_none());
    assert!(!flow.is_busy());
}

#[test]
fn confirmation_conflict_returns_to_summary() {
    let mut flow = fresh_flow();
    to_summary(&mut flow, "001");
    let Some(Effect::ConfirmAppointment { seq, request }) =
        flow.apply(Event::AppointmentConfirmed)
    else {
        panic!("expected a confirmation effect");
    };
    assert_eq!(request.date, schedule::iso_date(flow.available_dates[0]));

    flow.apply(Event::ConfirmationFinished {
        seq,
        result: Err(BackendError::Conflict),
    });
    assert_eq!(flow.step, Step::Summary);
    let message = flow.error.as_deref().expect("conflict is surfaced inline");
    assert!(message.contains("no longer available"));
}

#[test]
fn verify_placeholder_uses_the_inline_error_field() {
    let mut flow = fresh_flow();
    flow.apply(Event::StartVerify);
    assert_eq!(flow.step, Step::Verify);

    flow.apply(Event::VerifyCodeEdited("CITA-123".to_string()));
    assert!(flow.apply(Event::VerifySubmitted).is_none());
    assert_eq!(flow.step, Step::Verify);
    assert!(flow.error.is_some());

    flow.apply(Event::Back);
    assert_eq!(flow.step, Step::Initial);
    assert!(flow.error.is_none());
}

#[tokio::test(start_paused = true)]
async fn full_booking_round_trip() -> anyhow::Result<()> {
    let backend = MockBackend::default();
    let mut flow = fresh_flow();

    // wizard mount: fetch the catalog
    let effect = flow
        .apply(Event::CentersRequested)
        .expect("mount fetches the catalog");
    let reply = dispatch(&backend, effect).await;
    flow.apply(reply);
    assert_eq!(flow.centers.len(), 3);

    // reset keeps the reference catalog and starts a clean flow
    flow.apply(Event::Reset);
    assert_eq!(flow.centers.len(), 3);

    flow.apply(Event::StartBooking);
    flow.apply(Event::KindChosen(AppointmentKind::Individual));
    flow.apply(Event::IdentifierEdited("001".to_string()));
    let effect = flow
        .apply(Event::IdentifierSubmitted)
        .expect("submit starts the lookup");
    assert!(flow.is_busy());
    let reply = dispatch(&backend, effect).await;
    flow.apply(reply);

    assert_eq!(flow.step, Step::ConfirmUser);
    match flow.screen() {
        Screen::ConfirmUser { user } => assert_eq!(user.identifier, "001"),
        other => panic!("expected the confirm-user screen, got {other:?}"),
    }

    flow.apply(Event::UserConfirmed);
    let first_center = flow.centers[0].clone();
    flow.apply(Event::CenterPicked(first_center));
    assert_eq!(
        flow.available_dates.len(),
        usize::from(schedule::LOOKAHEAD_DAYS)
    );
    let first_date = flow.available_dates[0];
    flow.apply(Event::DatePicked(first_date));
    let first_slot = flow.available_times[0];
    flow.apply(Event::TimePicked(first_slot));

    match flow.screen() {
        Screen::Summary { user, time, .. } => {
            assert_eq!(user.identifier, "001");
            assert_eq!(time, first_slot);
        }
        other => panic!("expected the summary screen, got {other:?}"),
    }

    let effect = flow
        .apply(Event::AppointmentConfirmed)
        .expect("confirmation starts");
    let reply = dispatch(&backend, effect).await;
    flow.apply(reply);

    assert_eq!(flow.step, Step::Complete);
    let confirmation = flow.confirmation.as_ref().expect("receipt stored");
    assert!(
        confirmation
            .qr_payload
            .contains(&schedule::iso_date(first_date))
    );

    // start over returns to a blank initial screen
    flow.apply(Event::Reset);
    assert_eq!(flow.step, Step::Initial);
    assert!(flow.confirmation.is_none());
    Ok(())
}
