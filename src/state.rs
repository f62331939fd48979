/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - guard: 保護メソッド + SessionDirectory
 *   - recipes: in-memory の業務データ
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::guard::AccessGuard;
use crate::repos::recipe_repo::RecipeCatalog;

#[derive(Clone, Debug)]
pub struct AppState {
    pub guard: Arc<AccessGuard>,
    pub recipes: Arc<RecipeCatalog>,
}

impl AppState {
    pub fn new(guard: Arc<AccessGuard>, recipes: Arc<RecipeCatalog>) -> Self {
        Self { guard, recipes }
    }
}
