//! Meeting close against the audit invariant: one ledger row per observed
//! status change, names resolved before overwrite, best-effort recording.

use crate::modules::meetings::use_cases::end_meeting::command::EndMeeting;
use crate::modules::meetings::use_cases::start_meeting::command::StartMeeting;
use crate::modules::leads::use_cases::update_lead::command::UpdateLead;
use crate::shared::core::primitives::GeoPoint;
use crate::shared::infrastructure::clock::Clock;
use crate::tests::fixtures::{make_lead, make_recording, make_selfie, test_state};

const LEAD: &str = "lead-0001";
const EXEC: &str = "user-0001";

fn here() -> GeoPoint {
    GeoPoint {
        latitude: 12.97,
        longitude: 77.59,
    }
}

fn start_command() -> StartMeeting {
    StartMeeting {
        lead_id: LEAD.into(),
        acting_user_id: EXEC.into(),
        selfie: make_selfie(),
        location: here(),
    }
}

fn end_command() -> EndMeeting {
    EndMeeting {
        lead_id: LEAD.into(),
        acting_user_id: EXEC.into(),
        selfie: make_selfie(),
        location: here(),
        new_status: 5,
        plan_interest: Some("gold plan".into()),
        recording: None,
        notes: Some("closed on site".into()),
        next_follow_up_date: None,
    }
}

#[tokio::test]
async fn closing_a_meeting_on_sold_completes_the_lead_and_audits_once() {
    let (state, handles) = test_state();
    handles.seed_lead(make_lead(LEAD, 1)).await;

    state
        .start_meeting
        .handle(start_command())
        .await
        .expect("start meeting failed");
    handles.clock.advance_secs(1800);
    let ended = state
        .end_meeting
        .handle(end_command())
        .await
        .expect("end meeting failed");
    assert_eq!(ended.meeting.meeting_end_time, Some(handles.clock.now()));

    let lead = handles.lead(LEAD).await.unwrap();
    assert_eq!(lead.lead_status, 5);
    assert_eq!(lead.completed_at, Some(handles.clock.now()));

    let history = handles.history(LEAD).await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status_before, "Interested");
    assert_eq!(history[0].status_after, "Sold");
    assert_eq!(history[0].action, "Meet");
    assert_eq!(history[0].acting_user_id, EXEC);
}

#[tokio::test]
async fn a_lost_recording_never_blocks_the_close_or_the_lead_update() {
    let (state, handles) = test_state();
    handles.seed_lead(make_lead(LEAD, 1)).await;
    handles.media.fail_directory("recordings").await;

    state
        .start_meeting
        .handle(start_command())
        .await
        .expect("start meeting failed");
    let ended = state
        .end_meeting
        .handle(EndMeeting {
            recording: Some(make_recording()),
            ..end_command()
        })
        .await
        .expect("end meeting failed");
    assert!(ended.recording_url.is_none());
    assert!(ended.meeting.meeting_end_time.is_some());

    let lead = handles.lead(LEAD).await.unwrap();
    assert_eq!(lead.lead_status, 5);
    let history = handles.history(LEAD).await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, "Meet");
}

#[tokio::test]
async fn a_direct_edit_and_a_meeting_close_each_audit_exactly_once() {
    let (state, handles) = test_state();
    handles.seed_lead(make_lead(LEAD, 1)).await;

    state
        .update_lead
        .handle(UpdateLead {
            lead_id: LEAD.into(),
            acting_user_id: EXEC.into(),
            lead_status: Some(2),
            plan_interest: None,
            next_follow_up_date: None,
            meeting_notes: None,
            note: None,
        })
        .await
        .expect("update failed");
    assert_eq!(handles.history(LEAD).await.len(), 1);

    handles.clock.advance_secs(3600);
    state
        .start_meeting
        .handle(start_command())
        .await
        .expect("start meeting failed");
    state
        .end_meeting
        .handle(end_command())
        .await
        .expect("end meeting failed");

    let history = handles.history(LEAD).await;
    assert_eq!(history.len(), 2);
    // Newest first.
    assert_eq!(history[0].action, "Meet");
    assert_eq!(history[0].status_before, "Follow Up");
    assert_eq!(history[1].action, "Update");
}

#[tokio::test]
async fn a_new_meeting_can_start_after_the_previous_one_closed() {
    let (state, handles) = test_state();
    handles.seed_lead(make_lead(LEAD, 1)).await;

    state
        .start_meeting
        .handle(start_command())
        .await
        .expect("first start failed");
    state
        .end_meeting
        .handle(EndMeeting {
            new_status: 2,
            ..end_command()
        })
        .await
        .expect("end failed");
    state
        .start_meeting
        .handle(start_command())
        .await
        .expect("second start failed");
}
