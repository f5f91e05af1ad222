//! Concurrent duplicate starts: the store's atomic check-and-create must let
//! exactly one caller win.

use crate::modules::meetings::use_cases::start_meeting::command::StartMeeting;
use crate::modules::shifts::adapters::outbound::sessions::ShiftSessionStore;
use crate::modules::shifts::use_cases::error::ShiftError;
use crate::modules::shifts::use_cases::start_shift::command::StartShift;
use crate::shared::core::primitives::GeoPoint;
use crate::shared::infrastructure::clock::Clock;
use crate::tests::fixtures::{make_lead, make_selfie, test_state};
use tokio::join;

#[tokio::test]
async fn concurrent_shift_starts_leave_a_single_open_session() {
    let (state, handles) = test_state();
    let command = || StartShift {
        user_id: "user-0001".into(),
        selfie: make_selfie(),
        location: None,
        notes: None,
    };

    let (first, second) = join!(
        state.start_shift.handle(command()),
        state.start_shift.handle(command())
    );
    assert!(
        first.is_ok() ^ second.is_ok(),
        "exactly one start should win"
    );
    let loser = first.err().or(second.err()).unwrap();
    assert!(matches!(loser, ShiftError::AlreadyActive));

    let open = handles
        .sessions
        .find_open("user-0001", handles.clock.now().date_naive())
        .await
        .unwrap();
    assert!(open.is_some());
}

#[tokio::test]
async fn concurrent_meeting_starts_leave_a_single_open_meeting() {
    let (state, handles) = test_state();
    handles.seed_lead(make_lead("lead-0001", 1)).await;
    let command = || StartMeeting {
        lead_id: "lead-0001".into(),
        acting_user_id: "user-0001".into(),
        selfie: make_selfie(),
        location: GeoPoint {
            latitude: 12.97,
            longitude: 77.59,
        },
    };

    let (first, second) = join!(
        state.start_meeting.handle(command()),
        state.start_meeting.handle(command())
    );
    assert!(
        first.is_ok() ^ second.is_ok(),
        "exactly one start should win"
    );
}
