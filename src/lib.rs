//! Method-scoped admin guard for an axum HTTP API.
//!
//! Requests whose HTTP method is in the configured protected set must carry
//! a token (`Authorization: Bearer <token>` or a bare `<token>`) that
//! resolves to an admin user; anything else is answered with 401
//! "Access denied". All other methods pass through untouched.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod guard;
pub mod middleware;
pub mod repos;
pub mod sessions;
pub mod state;
