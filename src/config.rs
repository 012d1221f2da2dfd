use chrono::Duration;
use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    tokio::sync::Mutex,
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::{election::Election, event::LogObserver, identity::Identity};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Deserialize)]
pub struct Config {
    // non-secrets
    administrator: Identity,
    #[serde(default = "seed_genesis_by_default")]
    seed_genesis_proposal: bool,
    auth_ttl: u32,
    // secrets
    jwt_secret: String,
}

fn seed_genesis_by_default() -> bool {
    true
}

impl Config {
    /// The identity allowed to drive the election workflow.
    pub fn administrator(&self) -> &Identity {
        &self.administrator
    }

    /// Whether opening proposal registration seeds the genesis proposal at index 0.
    pub fn seed_genesis_proposal(&self) -> bool {
        self.seed_genesis_proposal
    }

    /// Valid lifetime of auth token cookies in seconds.
    pub fn auth_ttl(&self) -> Duration {
        Duration::seconds(self.auth_ttl.into())
    }

    /// Secret key used to sign and verify JWTs.
    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

/// A fairing that loads the application config and puts it in managed state.
/// This could easily be achieved using `AdHoc::config`, but is written out
/// explicitly for symmetry with the election fairing and control over error
/// messages.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that creates the election from the managed [`Config`] and places
/// it into managed state behind a mutex. Must be attached after [`ConfigFairing`].
pub struct ElectionFairing;

#[rocket::async_trait]
impl Fairing for ElectionFairing {
    fn info(&self) -> Info {
        Info {
            name: "Election",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let election = rocket.state::<Config>().map(|config| {
            info!(
                "Creating election administered by {}{}",
                config.administrator(),
                if config.seed_genesis_proposal() {
                    ", with genesis proposal"
                } else {
                    ""
                }
            );
            Election::new(config.administrator().clone())
                .with_genesis_proposal(config.seed_genesis_proposal())
                .with_observer(LogObserver)
        });

        match election {
            Some(election) => Ok(rocket.manage(Mutex::new(election))),
            None => {
                error!("Cannot create the election without a loaded config");
                Err(rocket)
            }
        }
    }
}
