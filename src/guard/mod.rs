/*!
 * Method-scoped admin guard
 *
 * Responsibility:
 * - 保護対象メソッドの判定 (CREATE→POST, UPDATE→PUT の別名を含む)
 * - Authorization ヘッダからのトークン抽出
 * - SessionDirectory 経由で admin かどうかを判定し Allow / Reject を返す
 *
 * HTTP (401 への変換) は middleware::auth::admin 側の責務
 */

mod access;
mod credential;
mod methods;

pub use access::{AccessGuard, Decision, Denial, GuardedRequest, RequestHead};
pub use credential::extract_token;
pub use methods::ProtectedMethodSet;
