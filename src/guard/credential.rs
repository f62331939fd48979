use super::Denial;

/// Pulls the session token out of an `Authorization` header value.
///
/// - `abc123` → `abc123` (bare token, no scheme)
/// - `Bearer abc123` → `abc123`
/// - `Bearer abc123 extra` → `abc123` (parts past the second are ignored)
///
/// The scheme name is not checked.
pub fn extract_token(header: Option<&str>) -> Result<&str, Denial> {
    let header = match header {
        Some(h) if !h.trim().is_empty() => h,
        _ => return Err(Denial::MissingCredential),
    };

    let mut parts = header.split_ascii_whitespace();
    match (parts.next(), parts.next()) {
        (Some(_scheme), Some(token)) => Ok(token),
        (Some(token), None) => Ok(token),
        _ => Err(Denial::MalformedCredential),
    }
}
