mod access;
mod election_core;
mod error;
mod phase;
mod tally;

pub use access::AccessController;
pub use election_core::Election;
pub use error::{WorkflowError, WorkflowResult};
pub use phase::Phase;
pub use tally::plurality_winner;

/// The election as held in Rocket's managed state. Every request locks it for
/// the full duration of its check-then-act, so writers are serialised.
pub type SharedElection = rocket::tokio::sync::Mutex<Election>;
