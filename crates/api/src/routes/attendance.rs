use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/attendance", post(handlers::attendance::mark_attendance))
        .route("/api/attendance/scan", post(handlers::attendance::scan))
}
