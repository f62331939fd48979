/*
 * Responsibility
 * - recipes の in-memory 保存 (guard の動作確認用のダミー業務データ)
 * - id は 1 から採番
 */
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRow {
    pub id: u64,
    pub name: String,
    pub instructions: String,
}

#[derive(Debug, Default)]
struct Table {
    next_id: u64,
    rows: BTreeMap<u64, RecipeRow>,
}

#[derive(Debug, Default)]
pub struct RecipeCatalog {
    table: RwLock<Table>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Vec<RecipeRow> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rows
            .values()
            .cloned()
            .collect()
    }

    pub fn create(&self, name: &str, instructions: &str) -> RecipeRow {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        table.next_id += 1;

        let row = RecipeRow {
            id: table.next_id,
            name: name.to_string(),
            instructions: instructions.to_string(),
        };
        table.rows.insert(row.id, row.clone());
        row
    }

    // None fields are left untouched.
    pub fn update(
        &self,
        id: u64,
        name: Option<&str>,
        instructions: Option<&str>,
    ) -> Option<RecipeRow> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let row = table.rows.get_mut(&id)?;

        if let Some(name) = name {
            row.name = name.to_string();
        }
        if let Some(instructions) = instructions {
            row.instructions = instructions.to_string();
        }

        Some(row.clone())
    }

    pub fn delete(&self, id: u64) -> bool {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .rows
            .remove(&id)
            .is_some()
    }
}
