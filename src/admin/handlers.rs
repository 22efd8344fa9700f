use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::http::server::AppState;
use crate::store::StoreStats;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StoreStats> {
    Json(state.store.stats())
}
