use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/reports/officers", get(handlers::report::officer_report))
        .route(
            "/api/reports/officers.csv",
            get(handlers::report::officer_report_csv),
        )
        .route("/api/reports/summary", get(handlers::report::report_summary))
        .route("/api/reports/leaderboard", get(handlers::report::leaderboard))
}
