use log::info;
use rocket::{
    http::{Cookie, CookieJar, Status},
    serde::json::Json,
    Route, State,
};

use crate::{
    error::{Error, Result},
    model::{
        api::auth::SessionRequest,
        auth::{AuthToken, AUTH_TOKEN_COOKIE},
    },
    Config,
};

pub fn routes() -> Vec<Route> {
    routes![login, logout]
}

/// Exchange a minted token for a session cookie, so browsers need not send
/// an `Authorization` header on every request.
#[post("/auth", data = "<session>", format = "json")]
pub async fn login(
    cookies: &CookieJar<'_>,
    session: Json<SessionRequest>,
    config: &State<Config>,
) -> Result<()> {
    let token = AuthToken::decode(&session.token, config.jwt_secret()).map_err(|err| {
        Error::Status(Status::Unauthorized, format!("Invalid auth token: {err}"))
    })?;

    info!("Opened session for {}", token.id());
    cookies.add(token.into_cookie(config)?);

    Ok(())
}

#[delete("/auth")]
pub fn logout(cookies: &CookieJar) -> Status {
    cookies.remove(Cookie::named(AUTH_TOKEN_COOKIE));
    Status::Ok
}
