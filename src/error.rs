use jsonwebtoken::errors::{Error as JwtError, ErrorKind as JwtErrorKind};
use log::warn;
use rocket::{http::Status, response::Responder, Request};
use thiserror::Error;

use crate::model::election::WorkflowError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
    #[error(transparent)]
    Jwt(#[from] JwtError),
    #[error("{1}")]
    Status(Status, String),
}

impl Error {
    /// The HTTP status this error should be reported with.
    pub fn status(&self) -> Status {
        match self {
            Self::Workflow(err) => match err {
                WorkflowError::Unauthorized(_) => Status::Forbidden,
                WorkflowError::InvalidPhase { .. }
                | WorkflowError::InvalidPhaseTransition { .. }
                | WorkflowError::AlreadyRegistered(_)
                | WorkflowError::AlreadyVoted(_) => Status::Conflict,
                WorkflowError::EmptyDescription => Status::UnprocessableEntity,
                WorkflowError::ProposalNotFound(_) => Status::NotFound,
            },
            Self::Jwt(err) => match err.kind() {
                JwtErrorKind::ExpiredSignature
                | JwtErrorKind::ImmatureSignature
                | JwtErrorKind::InvalidSignature => Status::Unauthorized,
                _ => Status::BadRequest,
            },
            Self::Status(status, _) => *status,
        }
    }
}

/// Respond with the status and the error message as the body, so callers can
/// see exactly which identity or proposal was at fault.
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = self.status();
        warn!("{} {}: {self}", req.method(), req.uri());
        (status, self.to_string()).respond_to(req)
    }
}
