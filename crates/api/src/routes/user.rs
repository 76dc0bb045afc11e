use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/users", post(handlers::user::create_user))
        .route("/api/users", get(handlers::user::list_users))
        .route(
            "/api/users/by-id-number/:id_number",
            get(handlers::user::get_user_by_id_number),
        )
        .route("/api/users/:id", get(handlers::user::get_user))
        .route("/api/users/:id", put(handlers::user::update_user))
        .route("/api/users/:id/qr", get(handlers::user::user_qr))
        .route("/api/users/:id/dashboard", get(handlers::user::user_dashboard))
        .route("/api/users/:id/activity", get(handlers::user::user_activity))
}
