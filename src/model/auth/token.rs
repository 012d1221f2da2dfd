use chrono::{serde::ts_seconds, DateTime, Duration, Utc};
use jsonwebtoken::{
    errors::Error as JwtError, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use log::warn;
use rocket::{
    http::{Cookie, SameSite, Status},
    request::{self, FromRequest},
    Request, State,
};
use serde::{Deserialize, Serialize};

use crate::model::identity::Identity;
use crate::Config;

pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

const BEARER_PREFIX: &str = "Bearer ";

/// An authentication token proving the caller's identity.
///
/// Whether that identity is the administrator or a registered voter is
/// decided by the election itself, not by the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    id: Identity,
}

impl AuthToken {
    pub fn new(id: Identity) -> Self {
        Self { id }
    }

    /// Get the authenticated identity.
    pub fn id(&self) -> &Identity {
        &self.id
    }

    /// Sign this token into a JWT that expires after `ttl`.
    pub fn encode(&self, secret: &[u8], ttl: Duration) -> Result<String, JwtError> {
        let claims = Claims {
            id: self.id.clone(),
            expire_at: Utc::now() + ttl,
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret),
        )
    }

    /// Verify and decode a JWT.
    pub fn decode(token: &str, secret: &[u8]) -> Result<Self, JwtError> {
        jsonwebtoken::decode(
            token,
            &DecodingKey::from_secret(secret),
            &Validation::default(),
        )
        .map(|data: TokenData<Claims>| Self::new(data.claims.id))
    }

    /// Serialize this token into a cookie.
    pub fn into_cookie(self, config: &Config) -> Result<Cookie<'static>, JwtError> {
        let token = self.encode(config.jwt_secret(), config.auth_ttl())?;
        Ok(Cookie::build(AUTH_TOKEN_COOKIE, token)
            .max_age(time::Duration::seconds(config.auth_ttl().num_seconds()))
            .http_only(true)
            .same_site(SameSite::Strict)
            .finish())
    }
}

/// Token claims: the identity as subject plus an expiry datetime.
#[derive(Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "sub")]
    id: Identity,
    #[serde(rename = "exp", with = "ts_seconds")]
    expire_at: DateTime<Utc>,
}

/// Reasons a request could not be authenticated.
#[derive(Debug)]
pub enum AuthError {
    /// Neither an `Authorization` header nor an auth cookie was present.
    Missing,
    /// A token was present but did not verify.
    Invalid(JwtError),
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthToken {
    type Error = AuthError;

    /// Get an AuthToken from the `Authorization: Bearer` header, falling back
    /// to the auth cookie.
    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        // Valid as `Config` is always managed.
        let config = req.guard::<&State<Config>>().await.unwrap();

        let raw = req
            .headers()
            .get_one("Authorization")
            .and_then(|header| header.strip_prefix(BEARER_PREFIX))
            .map(str::to_string)
            .or_else(|| {
                req.cookies()
                    .get(AUTH_TOKEN_COOKIE)
                    .map(|cookie| cookie.value().to_string())
            });

        match raw {
            None => request::Outcome::Failure((Status::Unauthorized, AuthError::Missing)),
            Some(raw) => match Self::decode(&raw, config.jwt_secret()) {
                Ok(token) => request::Outcome::Success(token),
                Err(err) => {
                    warn!("Rejected auth token: {err}");
                    request::Outcome::Failure((Status::Unauthorized, AuthError::Invalid(err)))
                }
            },
        }
    }
}
