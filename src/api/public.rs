use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        api::{proposal::ProposalDescription, workflow::WorkflowStatus},
        election::SharedElection,
        event::WorkflowEvent,
    },
};

pub fn routes() -> Vec<Route> {
    routes![workflow_status, winner, events]
}

#[get("/workflow")]
async fn workflow_status(election: &State<SharedElection>) -> Json<WorkflowStatus> {
    Json(WorkflowStatus::from(&*election.lock().await))
}

#[get("/workflow/winner")]
async fn winner(election: &State<SharedElection>) -> Result<Json<ProposalDescription>> {
    let election = election.lock().await;
    let (id, proposal) = election.winner()?;
    Ok(Json(ProposalDescription::new(id, proposal)))
}

/// Every event emitted so far, oldest first.
#[get("/events")]
async fn events(election: &State<SharedElection>) -> Json<Vec<WorkflowEvent>> {
    Json(election.lock().await.events().to_vec())
}
