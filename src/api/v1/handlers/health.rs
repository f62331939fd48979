/*
 * Responsibility
 * - GET /health (疎通用, guard の外)
 * - 現在 admin 必須になっているメソッドも返す (設定の確認用)
 */
use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub protected_methods: Vec<String>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        protected_methods: state
            .guard
            .protected_methods()
            .iter()
            .map(str::to_string)
            .collect(),
    })
}
