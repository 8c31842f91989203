use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, controllers::alarms_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/alarms",
            get(alarms_controller::get_alarms).post(alarms_controller::post_create_alarm),
        )
        .route(
            "/alarms/:symbol/delete",
            post(alarms_controller::post_delete_alarms),
        )
}
