use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{error::AlarmError, models::Direction, services::alarms_service, AppState};

#[derive(Deserialize)]
pub struct CreateAlarmBody {
    pub symbol: String,
    pub target: f64,

    // Inferred from the live price when absent.
    #[serde(default)]
    pub direction: Option<Direction>,

    #[serde(default)]
    pub note: String,

    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Deserialize)]
pub struct OwnerQuery {
    pub owner: Option<String>,
}

fn error_json(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

// POST /alarms
pub async fn post_create_alarm(
    State(state): State<AppState>,
    Json(body): Json<CreateAlarmBody>,
) -> Response {
    if !body.target.is_finite() || body.target <= 0.0 {
        return error_json(
            StatusCode::BAD_REQUEST,
            "target must be a positive price".to_string(),
        );
    }

    let created = alarms_service::create_alarm(
        &state,
        &body.symbol,
        body.target,
        body.direction,
        &body.note,
        body.owner,
    )
    .await;

    match created {
        Ok(alarm) => (StatusCode::CREATED, Json(alarm)).into_response(),
        Err(e @ AlarmError::BadSymbol(_)) => error_json(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e @ AlarmError::PriceUnavailable(_)) => {
            error_json(StatusCode::BAD_GATEWAY, e.to_string())
        }
        Err(e) => error_json(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

// GET /alarms
pub async fn get_alarms(State(state): State<AppState>, Query(q): Query<OwnerQuery>) -> Response {
    let alarms = alarms_service::list_alarms(&state, q.owner.as_deref()).await;
    Json(alarms).into_response()
}

// POST /alarms/:symbol/delete
pub async fn post_delete_alarms(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(q): Query<OwnerQuery>,
) -> Response {
    match alarms_service::remove_alarms(&state, &symbol, q.owner.as_deref()).await {
        Ok(removed) => Json(json!({ "removed": removed })).into_response(),
        Err(e) => error_json(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
