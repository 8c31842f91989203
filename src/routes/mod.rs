use axum::Router;

use crate::AppState;

pub mod alarms_routes;
pub mod home_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = alarms_routes::add_routes(router);

    router.with_state(state)
}
