/*
 * Responsibility
 * - /recipes 系 CRUD handler
 * - 認可は middleware (admin guard) 側で済んでいる前提。handler は判定しない
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::v1::dto::recipes::{CreateRecipeRequest, RecipeResponse, UpdateRecipeRequest},
    error::AppError,
    state::AppState,
};

pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<RecipeResponse>> {
    let rows = state.recipes.list();
    Json(rows.into_iter().map(RecipeResponse::from).collect())
}

pub async fn create_recipe(
    State(state): State<AppState>,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_RECIPE", msg))?;

    let row = state.recipes.create(req.name.trim(), &req.instructions);

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn update_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<u64>,
    Json(req): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_RECIPE", msg))?;

    let row = state
        .recipes
        .update(
            recipe_id,
            req.name.as_deref().map(str::trim),
            req.instructions.as_deref(),
        )
        .ok_or(AppError::not_found("recipe"))?;

    Ok(Json(row.into()))
}

pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<u64>,
) -> Result<StatusCode, AppError> {
    if state.recipes.delete(recipe_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("recipe"))
    }
}
