//! A full working day driven through the shift tracker handlers.

use crate::modules::shifts::core::session::BreakKind;
use crate::modules::shifts::use_cases::error::ShiftError;
use crate::modules::shifts::use_cases::start_break::command::StartBreak;
use crate::modules::shifts::use_cases::start_shift::command::StartShift;
use crate::modules::shifts::use_cases::end_shift::command::EndShift;
use crate::tests::fixtures::{make_selfie, test_state};
use chrono::{TimeZone, Utc};

const USER: &str = "user-0001";

fn start_command() -> StartShift {
    StartShift {
        user_id: USER.into(),
        selfie: make_selfie(),
        location: None,
        notes: None,
    }
}

#[tokio::test]
async fn a_shift_with_a_half_hour_lunch_accounts_every_timer() {
    let (state, handles) = test_state();
    handles
        .clock
        .set(Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap());

    state
        .start_shift
        .handle(start_command())
        .await
        .expect("start shift failed");
    let status = state.shift_status.handle(USER).await.unwrap();
    assert!(status.shift_started);
    assert!(!status.shift_ended);

    // 13:00, lunch starts.
    handles
        .clock
        .set(Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap());
    state
        .start_break
        .handle(StartBreak {
            user_id: USER.into(),
            kind: BreakKind::Lunch,
            notes: None,
        })
        .await
        .expect("start break failed");
    let status = state.shift_status.handle(USER).await.unwrap();
    assert!(status.break_active);

    // 13:30, lunch ends.
    handles
        .clock
        .set(Utc.with_ymd_and_hms(2026, 3, 2, 13, 30, 0).unwrap());
    let record = state.end_break.handle(USER).await.expect("end break failed");
    assert_eq!(record.duration_minutes, Some(30.0));
    let status = state.shift_status.handle(USER).await.unwrap();
    assert!(!status.break_active);
    assert!(status.break_ended);
    assert_eq!(status.break_minutes, 30.0);

    // 17:00, shift ends.
    handles
        .clock
        .set(Utc.with_ymd_and_hms(2026, 3, 2, 17, 0, 0).unwrap());
    state
        .end_shift
        .handle(EndShift {
            user_id: USER.into(),
            selfie: make_selfie(),
            location: None,
        })
        .await
        .expect("end shift failed");
    let status = state.shift_status.handle(USER).await.unwrap();
    assert!(status.shift_ended);
    assert_eq!(status.shift_timer_seconds, 28_800);
}

#[tokio::test]
async fn a_second_start_before_the_end_is_rejected() {
    let (state, _handles) = test_state();
    state
        .start_shift
        .handle(start_command())
        .await
        .expect("start shift failed");
    let result = state.start_shift.handle(start_command()).await;
    assert!(matches!(result, Err(ShiftError::AlreadyActive)));
}

#[tokio::test]
async fn double_break_start_and_orphan_break_end_are_rejected() {
    let (state, _handles) = test_state();
    state
        .start_shift
        .handle(start_command())
        .await
        .expect("start shift failed");

    let result = state.end_break.handle(USER).await;
    assert!(matches!(result, Err(ShiftError::NoBreakToEnd)));

    let break_command = StartBreak {
        user_id: USER.into(),
        kind: BreakKind::Coffee,
        notes: None,
    };
    state
        .start_break
        .handle(break_command.clone())
        .await
        .expect("start break failed");
    let result = state.start_break.handle(break_command).await;
    assert!(matches!(result, Err(ShiftError::BreakAlreadyActive)));
}

#[tokio::test]
async fn ending_the_shift_with_an_open_break_is_allowed() {
    let (state, handles) = test_state();
    state
        .start_shift
        .handle(start_command())
        .await
        .expect("start shift failed");
    state
        .start_break
        .handle(StartBreak {
            user_id: USER.into(),
            kind: BreakKind::Personal,
            notes: None,
        })
        .await
        .expect("start break failed");

    handles.clock.advance_secs(600);
    let ended = state
        .end_shift
        .handle(EndShift {
            user_id: USER.into(),
            selfie: make_selfie(),
            location: None,
        })
        .await
        .expect("end shift failed");
    assert!(ended.session.shift_end.is_some());
    // The open break's minutes were never added.
    assert_eq!(ended.session.break_minutes, 0.0);
}
