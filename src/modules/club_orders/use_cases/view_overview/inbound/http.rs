use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::modules::club_orders::use_cases::view_overview::inbound::view::render_overview_page;
use crate::shell::html::error_page;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.overview_handler.handle().await {
        Ok(rows) => Html(render_overview_page(&rows)).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to load order overview");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(error_page("Die Übersicht konnte nicht geladen werden.")),
            )
                .into_response()
        }
    }
}
