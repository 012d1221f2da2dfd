//! API-compatible types.
//!
//! The types in this module only exist as request or response bodies; the
//! election's own types are serialised directly where they suffice.

pub mod auth;
pub mod proposal;
pub mod workflow;
