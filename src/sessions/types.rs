use serde::Serialize;
use uuid::Uuid;

/// A logged-in identity as seen by the guard.
///
/// Only `is_admin` takes part in access decisions; `id` and `username`
/// are carried for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

impl User {
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            is_admin,
        }
    }

    pub fn admin(username: impl Into<String>) -> Self {
        Self::new(username, true)
    }

    pub fn member(username: impl Into<String>) -> Self {
        Self::new(username, false)
    }
}
