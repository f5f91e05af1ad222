use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::modules::leads::use_cases::lead_history::inbound::http as lead_history_http;
use crate::modules::leads::use_cases::update_lead::inbound::http as update_lead_http;
use crate::modules::meetings::use_cases::end_meeting::inbound::http as end_meeting_http;
use crate::modules::meetings::use_cases::start_meeting::inbound::http as start_meeting_http;
use crate::modules::shifts::use_cases::end_break::inbound::http as end_break_http;
use crate::modules::shifts::use_cases::end_shift::inbound::http as end_shift_http;
use crate::modules::shifts::use_cases::shift_status::inbound::http as shift_status_http;
use crate::modules::shifts::use_cases::start_break::inbound::http as start_break_http;
use crate::modules::shifts::use_cases::start_shift::inbound::http as start_shift_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/shift/start", post(start_shift_http::handle))
        .route("/shift/start-break", post(start_break_http::handle))
        .route("/shift/end-break", post(end_break_http::handle))
        .route("/shift/end", post(end_shift_http::handle))
        .route("/shift/status", get(shift_status_http::handle))
        .route("/meetings/start", post(start_meeting_http::handle))
        .route("/meetings/end", post(end_meeting_http::handle))
        .route("/leads/{id}", put(update_lead_http::handle))
        .route("/leads/{id}/history", get(lead_history_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
