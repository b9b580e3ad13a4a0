//! Access-token issuing and verification.
//!
//! Tokens are HMAC-SHA256 signed JWTs carried in the `X-Access-Token` header. A token is issued on
//! a successful login and stays valid for two calendar months. The custom claims carry the account
//! id, email and role label; only the `admin` role passes the access-control middleware.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, error::ErrorInternalServerError, FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Months, Utc};
use jwt_compact::{
    alg::{Hs256, Hs256Key},
    AlgorithmExt,
    Claims,
    Header,
    TimeOptions,
    UntrustedToken,
    ValidationError,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{config::AuthConfig, errors::AuthError};

/// The header that carries the access token on every protected request.
pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";
/// The role label that grants access to the protected routes.
pub const ADMIN_ROLE: &str = "admin";

//--------------------------------------        Claims       ---------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub email: String,
    /// The role label of the account, if any was assigned.
    pub role: Option<String>,
}

impl JwtClaims {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Extracts the claims the access-control middleware stored on the request. Handlers that take a
/// `JwtClaims` argument therefore only ever run behind the middleware.
impl FromRequest for JwtClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req
            .extensions()
            .get::<JwtClaims>()
            .cloned()
            .ok_or_else(|| ErrorInternalServerError("No JWT claims found in request extensions"));
        ready(claims)
    }
}

//--------------------------------------        Issuer        --------------------------------------------------------

/// Signs access tokens with the server's HMAC key.
pub struct TokenIssuer {
    key: Hs256Key,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        let key = Hs256Key::new(config.jwt_secret.reveal().as_bytes());
        Self { key }
    }

    /// Issues a signed token for the given account. Returns the compact token string together with
    /// the expiry instant, which login responses report as a date.
    pub fn issue_token(
        &self,
        user_id: i64,
        email: &str,
        role: Option<String>,
    ) -> Result<(String, DateTime<Utc>), AuthError> {
        let expires_at = Utc::now()
            .checked_add_months(Months::new(2))
            .ok_or_else(|| AuthError::SigningError("Token expiry overflows the calendar".to_string()))?;
        let custom = JwtClaims { user_id, email: email.to_string(), role };
        let mut claims = Claims::new(custom);
        claims.expiration = Some(expires_at);
        let header = Header::empty().with_token_type("JWT");
        let token = Hs256
            .token(&header, &claims, &self.key)
            .map_err(|e| AuthError::SigningError(e.to_string()))?;
        debug!("🔑️ Issued access token for {email}, valid until {expires_at}");
        Ok((token, expires_at))
    }
}

//--------------------------------------       Verifier       --------------------------------------------------------

/// Checks the signature, shape and expiry of an access token and returns its claims.
///
/// A token whose signature does not verify, or that has expired, is rejected as `InvalidToken`.
/// A correctly signed token whose claims do not have the expected shape is the distinct
/// `InvalidClaims` rejection.
pub fn validate_access_token(token: &str, key: &Hs256Key) -> Result<JwtClaims, AuthError> {
    let untrusted = UntrustedToken::new(token).map_err(|_| AuthError::InvalidToken)?;
    let token: jwt_compact::Token<JwtClaims> = Hs256.validator(key).validate(&untrusted).map_err(|e| match e {
        ValidationError::MalformedClaims(_) => AuthError::InvalidClaims,
        _ => AuthError::InvalidToken,
    })?;
    let claims = token.claims();
    claims.validate_expiration(&TimeOptions::default()).map_err(|_| AuthError::InvalidToken)?;
    Ok(claims.custom.clone())
}
