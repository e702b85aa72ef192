use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Shared admin secret gating the mutating endpoints.
///
/// An unset or blank secret means every mutating request is denied.
#[derive(Clone)]
pub struct AdminToken {
    secret: Option<String>,
}

impl AdminToken {
    pub fn from_secret(secret: Option<String>) -> Self {
        let secret = secret
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self { secret }
    }

    /// True iff both the configured secret and the presented token are
    /// non-empty after trimming and match exactly (case-sensitive).
    pub fn verify(&self, presented: Option<&str>) -> bool {
        let Some(secret) = self.secret.as_deref() else {
            return false;
        };

        match presented.map(str::trim) {
            Some(token) if !token.is_empty() => token == secret,
            _ => false,
        }
    }
}

pub async fn require_admin(
    State(admin_token): State<AdminToken>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let presented = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    if admin_token.verify(presented) {
        Ok(next.run(req).await)
    } else {
        tracing::warn!("Rejected request with invalid admin token");
        Err(WebError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denies_when_secret_unset() {
        let token = AdminToken::from_secret(None);
        assert!(!token.verify(Some("anything")));
    }

    #[test]
    fn denies_when_secret_blank() {
        let token = AdminToken::from_secret(Some("   ".to_string()));
        assert!(!token.verify(Some("   ")));
        assert!(!token.verify(Some("")));
    }

    #[test]
    fn denies_when_header_absent_or_empty() {
        let token = AdminToken::from_secret(Some("s3cret".to_string()));
        assert!(!token.verify(None));
        assert!(!token.verify(Some("")));
        assert!(!token.verify(Some("   ")));
    }

    #[test]
    fn denies_on_mismatch_case_sensitive() {
        let token = AdminToken::from_secret(Some("s3cret".to_string()));
        assert!(!token.verify(Some("S3CRET")));
        assert!(!token.verify(Some("s3cret2")));
    }

    #[test]
    fn accepts_exact_match_after_trimming() {
        let token = AdminToken::from_secret(Some("  s3cret ".to_string()));
        assert!(token.verify(Some("s3cret")));
        assert!(token.verify(Some(" s3cret\t")));
    }
}
