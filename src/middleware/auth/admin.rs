//! Admin gate for write methods.
//!
//! Runs [`AccessGuard::intercept`](crate::guard::AccessGuard::intercept) on
//! every request under the router it is applied to:
//! - Allow: the request is passed to `next` untouched.
//! - Reject: the handler is never called; the client gets 401 "Access denied".
//!
//! The concrete denial reason only goes to the log.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::guard::Decision;
use crate::state::AppState;

/// `/api/v1/*` に admin guard を掛ける。
///
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::admin::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, admin_middleware))
}

async fn admin_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if let Decision::Reject(denial) = state.guard.intercept(&req) {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            reason = %denial,
            "admin access denied"
        );
        return Err(denial.into());
    }

    Ok(next.run(req).await)
}
