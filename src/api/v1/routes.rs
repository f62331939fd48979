/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - admin guard は app.rs 側で v1 全体に layer する (メソッド単位で判定するため route ごとには掛けない)
 */
use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use crate::api::v1::handlers::recipes::{create_recipe, delete_recipe, list_recipes, update_recipe};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route("/recipes/{recipe_id}", put(update_recipe).delete(delete_recipe))
}
