//! Authentication service for HTTP Basic credentials.

use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Service for verifying basic-auth credentials against the configured
/// pair.
///
/// Both fields are compared in constant time, so response latency reveals
/// nothing about how much of a guess matched.
pub struct AuthService {
    user: String,
    password: String,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(user: String, password: String) -> Self {
        Self { user, password }
    }

    /// Checks a presented credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when either field differs from
    /// the configured value.
    pub fn verify(&self, user: &str, password: &str) -> Result<(), AppError> {
        let matches: bool = (user.as_bytes().ct_eq(self.user.as_bytes())
            & password.as_bytes().ct_eq(self.password.as_bytes()))
        .into();

        if matches {
            Ok(())
        } else {
            Err(AppError::unauthorized("invalid credentials"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        AuthService::new("admin".to_string(), "hunter2".to_string())
    }

    #[test]
    fn test_verify_accepts_configured_pair() {
        assert!(test_service().verify("admin", "hunter2").is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let result = test_service().verify("admin", "letmein");
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_verify_rejects_wrong_user() {
        let result = test_service().verify("root", "hunter2");
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_verify_rejects_swapped_fields() {
        let result = test_service().verify("hunter2", "admin");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_empty_credentials() {
        let result = test_service().verify("", "");
        assert!(result.is_err());
    }
}
