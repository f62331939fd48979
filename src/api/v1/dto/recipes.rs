/*
 * Responsibility
 * - Recipes の request/response DTO
 * - validate() で形式チェック
 */
use serde::{Deserialize, Serialize};

use crate::repos::recipe_repo::RecipeRow;

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: String,
    #[serde(default)]
    pub instructions: String,
}

impl CreateRecipeRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub instructions: Option<String>,
}

impl UpdateRecipeRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("name cannot be empty");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: u64,
    pub name: String,
    pub instructions: String,
}

impl From<RecipeRow> for RecipeResponse {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            instructions: row.instructions,
        }
    }
}
