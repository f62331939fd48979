use super::User;

/// Read-only view of the token → user mapping owned by the authentication side.
///
/// Implementations own their synchronization; callers never lock.
/// Lookups must not block, since the guard runs inline on every request.
pub trait SessionDirectory: Send + Sync {
    fn lookup(&self, token: &str) -> Option<User>;
}
