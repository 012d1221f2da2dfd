use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        api::proposal::{NewProposal, ProposalDescription, ProposalSpec, VoteSpec},
        auth::AuthToken,
        election::SharedElection,
        identity::Identity,
        proposal::ProposalId,
        voter::Voter,
    },
};

pub fn routes() -> Vec<Route> {
    routes![get_voter, add_proposal, get_proposal, set_vote]
}

#[get("/voters/<identity>")]
async fn get_voter(
    token: AuthToken,
    identity: Identity,
    election: &State<SharedElection>,
) -> Result<Json<Voter>> {
    let voter = election.lock().await.voter(token.id(), &identity)?;
    Ok(Json(voter))
}

#[post("/proposals", data = "<spec>", format = "json")]
async fn add_proposal(
    token: AuthToken,
    spec: Json<ProposalSpec>,
    election: &State<SharedElection>,
) -> Result<Json<NewProposal>> {
    let id = election
        .lock()
        .await
        .add_proposal(token.id(), spec.into_inner().description)?;
    Ok(Json(NewProposal { id }))
}

#[get("/proposals/<proposal_id>")]
async fn get_proposal(
    token: AuthToken,
    proposal_id: ProposalId,
    election: &State<SharedElection>,
) -> Result<Json<ProposalDescription>> {
    let election = election.lock().await;
    let proposal = election.proposal(token.id(), proposal_id)?;
    Ok(Json(ProposalDescription::new(proposal_id, proposal)))
}

#[post("/votes", data = "<vote>", format = "json")]
async fn set_vote(
    token: AuthToken,
    vote: Json<VoteSpec>,
    election: &State<SharedElection>,
) -> Result<()> {
    election
        .lock()
        .await
        .set_vote(token.id(), vote.proposal_id)?;
    Ok(())
}
