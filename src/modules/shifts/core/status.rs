use crate::modules::shifts::core::session::{BreakRecord, ShiftSession};
use crate::shared::core::primitives::seconds_between;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Derived view of a user's day. Pure read: nothing here mutates state, so two
/// calls with the same inputs return the same flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftStatus {
    pub shift_started: bool,
    pub shift_ended: bool,
    pub break_active: bool,
    pub break_ended: bool,
    pub shift_timer_seconds: i64,
    pub break_timer_seconds: i64,
    pub break_minutes: f64,
}

pub fn derive(
    session: Option<&ShiftSession>,
    latest_break: Option<&BreakRecord>,
    now: DateTime<Utc>,
) -> ShiftStatus {
    let Some(session) = session else {
        return ShiftStatus {
            shift_started: false,
            shift_ended: false,
            break_active: false,
            break_ended: false,
            shift_timer_seconds: 0,
            break_timer_seconds: 0,
            break_minutes: 0.0,
        };
    };

    let shift_timer_seconds = match session.shift_end {
        Some(end) => seconds_between(session.shift_start, end),
        None => seconds_between(session.shift_start, now),
    };
    let break_timer_seconds = latest_break
        .map(|b| match b.break_end {
            Some(end) => seconds_between(b.break_start, end),
            None => seconds_between(b.break_start, now),
        })
        .unwrap_or(0);

    ShiftStatus {
        shift_started: true,
        shift_ended: session.shift_end.is_some(),
        break_active: latest_break.is_some_and(BreakRecord::is_open),
        break_ended: latest_break.is_some_and(|b| b.break_end.is_some()),
        shift_timer_seconds,
        break_timer_seconds,
        break_minutes: session.break_minutes,
    }
}
