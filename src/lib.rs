#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{figment::Figment, Build, Rocket};

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;

use config::{ConfigFairing, ElectionFairing};
use logging::LoggerFairing;

/// Build a server configured from `Rocket.toml` and `ROCKET_*` environment variables.
pub fn build() -> Rocket<Build> {
    rocket_for_figment(rocket::Config::figment())
}

/// Build a server from an explicit configuration source.
pub fn rocket_for_figment(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(ConfigFairing)
        .attach(ElectionFairing)
        .attach(LoggerFairing)
        .mount("/", api::routes())
}

/// The administrator identity of every test server.
#[cfg(test)]
pub(crate) const TEST_ADMIN: &str = "coordinator";

#[cfg(test)]
pub(crate) const TEST_JWT_SECRET: &str = "test jwt secret";

/// Configuration for test servers, independent of any local `Rocket.toml`.
#[cfg(test)]
pub(crate) fn test_figment() -> Figment {
    rocket::Config::figment()
        .merge(("administrator", TEST_ADMIN))
        .merge(("seed_genesis_proposal", true))
        .merge(("auth_ttl", 3600))
        .merge(("jwt_secret", TEST_JWT_SECRET))
        .merge(("log_level", "off"))
}

/// An `Authorization` header authenticating as `identity` on a test server.
#[cfg(test)]
pub(crate) fn bearer(identity: &str) -> rocket::http::Header<'static> {
    let token = model::auth::AuthToken::new(identity.parse().unwrap())
        .encode(TEST_JWT_SECRET.as_bytes(), chrono::Duration::hours(1))
        .unwrap();
    rocket::http::Header::new("Authorization", format!("Bearer {token}"))
}
