use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{SessionDirectory, User};

/// Process-local session table.
///
/// Writers are the login/logout side of the application; the guard only
/// goes through [`SessionDirectory::lookup`]. Many readers, rare writers.
#[derive(Debug, Default)]
pub struct InMemorySessionDirectory {
    sessions: RwLock<HashMap<String, User>>,
}

impl InMemorySessionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed<I, T>(seed: I) -> Self
    where
        I: IntoIterator<Item = (T, User)>,
        T: Into<String>,
    {
        let sessions = seed
            .into_iter()
            .map(|(token, user)| (token.into(), user))
            .collect();

        Self {
            sessions: RwLock::new(sessions),
        }
    }

    /// Registers `token` for `user`, returning the user previously bound to it.
    pub fn insert(&self, token: impl Into<String>, user: User) -> Option<User> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), user)
    }

    pub fn remove(&self, token: &str) -> Option<User> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionDirectory for InMemorySessionDirectory {
    fn lookup(&self, token: &str) -> Option<User> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }
}
