use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/meetings", post(handlers::meeting::create_meeting))
        .route("/api/meetings", get(handlers::meeting::list_meetings))
        .route("/api/meetings/next", get(handlers::meeting::next_meeting))
        .route("/api/meetings/:id", get(handlers::meeting::get_meeting))
        .route("/api/meetings/:id", put(handlers::meeting::update_meeting))
        .route("/api/meetings/:id", delete(handlers::meeting::delete_meeting))
        .route(
            "/api/meetings/:id/roster",
            get(handlers::meeting::meeting_roster),
        )
        .route("/api/meetings/:id/qr", get(handlers::meeting::meeting_qr))
        .route(
            "/api/meetings/:id/manual-checkin",
            post(handlers::attendance::manual_checkin),
        )
}
