use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::leads::use_cases::update_lead::command::UpdateLead;
use crate::shell::payloads::reject;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateLeadBody {
    pub user_id: String,
    #[serde(default)]
    pub lead_status: Option<i64>,
    #[serde(default)]
    pub plan_interest: Option<String>,
    #[serde(default)]
    pub next_follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub meeting_notes: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(lead_id): Path<String>,
    body: Result<Json<UpdateLeadBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return reject(StatusCode::UNPROCESSABLE_ENTITY, "invalid request body"),
    };
    let command = UpdateLead {
        lead_id,
        acting_user_id: body.user_id,
        lead_status: body.lead_status,
        plan_interest: body.plan_interest,
        next_follow_up_date: body.next_follow_up_date,
        meeting_notes: body.meeting_notes,
        note: body.note,
    };
    match state.update_lead.handle(command).await {
        Ok(lead) => Json(lead).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod update_lead_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::tests::fixtures::{make_lead, test_state};

    use super::handle;

    #[tokio::test]
    async fn it_should_update_the_lead_and_append_history() {
        let (state, handles) = test_state();
        handles.seed_lead(make_lead("lead-0001", 1)).await;
        let app = Router::new()
            .route("/leads/{id}", put(handle))
            .with_state(state);
        let response = app
            .oneshot(
                Request::put("/leads/lead-0001")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"user_id":"user-0001","lead_status":2}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["lead_status"], 2);

        let history = handles.history("lead-0001").await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action, "Update");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_lead() {
        let (state, _handles) = test_state();
        let app = Router::new()
            .route("/leads/{id}", put(handle))
            .with_state(state);
        let response = app
            .oneshot(
                Request::put("/leads/lead-0404")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"user_id":"user-0001","lead_status":2}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
