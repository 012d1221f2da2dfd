pub mod api;
pub mod auth;
pub mod election;
pub mod event;
pub mod identity;
pub mod proposal;
pub mod voter;
