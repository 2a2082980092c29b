use axum::{Router, routing::get};

use crate::modules::club_orders::use_cases::place_order::inbound::http as place_order_http;
use crate::modules::club_orders::use_cases::view_overview::inbound::http as overview_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(place_order_http::show_form).post(place_order_http::handle),
        )
        .route("/overview", get(overview_http::handle))
        .with_state(state)
}
