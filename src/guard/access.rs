use std::fmt;
use std::sync::Arc;

use axum::http::{HeaderMap, Request, header, request::Parts};
use thiserror::Error;

use super::{ProtectedMethodSet, extract_token};
use crate::sessions::SessionDirectory;

/// Why a protected request was turned away.
///
/// Kept for server-side logs only; every variant is reported to the client
/// as the same 401 "Access denied".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Denial {
    #[error("missing or blank credential")]
    MissingCredential,
    #[error("malformed credential")]
    MalformedCredential,
    #[error("unknown token")]
    UnknownToken,
    #[error("insufficient privilege")]
    InsufficientPrivilege,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Reject(Denial),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn into_result(self) -> Result<(), Denial> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Reject(denial) => Err(denial),
        }
    }
}

impl From<Result<(), Denial>> for Decision {
    fn from(res: Result<(), Denial>) -> Self {
        match res {
            Ok(()) => Decision::Allow,
            Err(denial) => Decision::Reject(denial),
        }
    }
}

/// What the guard needs to see of a request: its method and the raw
/// `Authorization` value.
pub trait GuardedRequest {
    fn method(&self) -> &str;

    /// `Err(MalformedCredential)` when the header is present but not visible ASCII.
    fn authorization(&self) -> Result<Option<&str>, Denial>;
}

fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, Denial> {
    headers
        .get(header::AUTHORIZATION)
        .map(|v| v.to_str().map_err(|_| Denial::MalformedCredential))
        .transpose()
}

impl<B> GuardedRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn authorization(&self) -> Result<Option<&str>, Denial> {
        authorization_header(self.headers())
    }
}

impl GuardedRequest for Parts {
    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn authorization(&self) -> Result<Option<&str>, Denial> {
        authorization_header(&self.headers)
    }
}

/// Transport-free request head, for callers that already hold plain strings.
#[derive(Debug, Clone, Copy)]
pub struct RequestHead<'a> {
    pub method: &'a str,
    pub authorization: Option<&'a str>,
}

impl<'a> RequestHead<'a> {
    pub fn new(method: &'a str, authorization: Option<&'a str>) -> Self {
        Self {
            method,
            authorization,
        }
    }
}

impl GuardedRequest for RequestHead<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn authorization(&self) -> Result<Option<&str>, Denial> {
        Ok(self.authorization)
    }
}

/// Admin gate keyed on HTTP method.
///
/// Requests whose method is not in the protected set pass untouched. For
/// protected methods the caller's token must resolve, through the injected
/// [`SessionDirectory`], to a user with `is_admin` set.
///
/// The guard is immutable after construction and never writes to the
/// directory, so one instance is shared across all workers.
#[derive(Clone)]
pub struct AccessGuard {
    methods: ProtectedMethodSet,
    sessions: Arc<dyn SessionDirectory>,
}

impl AccessGuard {
    pub fn new<I, S>(sessions: Arc<dyn SessionDirectory>, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_methods(sessions, ProtectedMethodSet::new(methods))
    }

    pub fn with_methods(sessions: Arc<dyn SessionDirectory>, methods: ProtectedMethodSet) -> Self {
        Self { methods, sessions }
    }

    /// A guard with nothing protected; every request is allowed.
    pub fn permissive(sessions: Arc<dyn SessionDirectory>) -> Self {
        Self::with_methods(sessions, ProtectedMethodSet::default())
    }

    pub fn protected_methods(&self) -> &ProtectedMethodSet {
        &self.methods
    }

    pub fn intercept<R>(&self, req: &R) -> Decision
    where
        R: GuardedRequest + ?Sized,
    {
        self.check(req).into()
    }

    fn check<R>(&self, req: &R) -> Result<(), Denial>
    where
        R: GuardedRequest + ?Sized,
    {
        if !self.methods.is_protected(req.method()) {
            return Ok(());
        }

        let header = req.authorization()?;
        let token = extract_token(header)?;

        let user = self.sessions.lookup(token).ok_or(Denial::UnknownToken)?;
        if !user.is_admin {
            return Err(Denial::InsufficientPrivilege);
        }

        tracing::debug!(
            method = req.method(),
            user_id = %user.id,
            username = %user.username,
            "admin access granted"
        );

        Ok(())
    }
}

impl fmt::Debug for AccessGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessGuard")
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}
