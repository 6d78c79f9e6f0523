use std::collections::HashSet;

use axum::http::StatusCode;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use standard_error::{StandardError, Status};

use crate::prelude::Result;

/// Bearer token payload. Tokens carry no expiry claim.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

impl Claims {
    pub fn new(username: &str, is_admin: bool) -> Self {
        Claims {
            username: username.into(),
            is_admin,
        }
    }

    pub fn sign(&self, secret: &str) -> Result<String> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| {
            StandardError::new(&format!("ERR-AUTH-000: could not sign token: {}", e))
        })
    }

    pub fn verify(token: &str, secret: &str) -> Result<Self> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| {
            StandardError::new("ERR-AUTH-001: invalid bearer token")
                .code(StatusCode::UNAUTHORIZED)
        })
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    const SECRET: &str = "secret-dev";

    #[traced_test]
    #[test]
    fn test_sign_verify_roundtrip() -> Result<()> {
        let token = Claims::new("admin", true).sign(SECRET)?;
        let claims = Claims::verify(&token, SECRET)?;
        assert_eq!(claims.username, "admin");
        assert!(claims.is_admin);
        Ok(())
    }

    #[test]
    fn test_wrong_secret_rejected() -> Result<()> {
        let token = Claims::new("admin", true).sign(SECRET)?;
        assert!(Claims::verify(&token, "other-secret").is_err());
        Ok(())
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(Claims::verify("not-a-jwt", SECRET).is_err());
    }

    #[test]
    fn test_missing_admin_claim_defaults_to_false() -> Result<()> {
        let token = encode(
            &Header::default(),
            &serde_json::json!({ "username": "u1" }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .map_err(|e| StandardError::new(&format!("ERR-AUTH-000: {}", e)))?;
        let claims = Claims::verify(&token, SECRET)?;
        assert!(!claims.is_admin);
        Ok(())
    }
}
