use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        api::workflow::WorkflowStatus,
        auth::AuthToken,
        election::{Election, SharedElection, WorkflowResult},
        identity::Identity,
    },
};

pub fn routes() -> Vec<Route> {
    routes![
        add_voter,
        start_proposals_registering,
        end_proposals_registering,
        start_voting_session,
        end_voting_session,
        tally_votes,
    ]
}

#[post("/voters/<identity>")]
async fn add_voter(
    token: AuthToken,
    identity: Identity,
    election: &State<SharedElection>,
) -> Result<()> {
    election.lock().await.add_voter(token.id(), identity)?;
    Ok(())
}

#[post("/workflow/proposals/start")]
async fn start_proposals_registering(
    token: AuthToken,
    election: &State<SharedElection>,
) -> Result<Json<WorkflowStatus>> {
    advance(token, election, Election::start_proposals_registering).await
}

#[post("/workflow/proposals/end")]
async fn end_proposals_registering(
    token: AuthToken,
    election: &State<SharedElection>,
) -> Result<Json<WorkflowStatus>> {
    advance(token, election, Election::end_proposals_registering).await
}

#[post("/workflow/voting/start")]
async fn start_voting_session(
    token: AuthToken,
    election: &State<SharedElection>,
) -> Result<Json<WorkflowStatus>> {
    advance(token, election, Election::start_voting_session).await
}

#[post("/workflow/voting/end")]
async fn end_voting_session(
    token: AuthToken,
    election: &State<SharedElection>,
) -> Result<Json<WorkflowStatus>> {
    advance(token, election, Election::end_voting_session).await
}

#[post("/workflow/tally")]
async fn tally_votes(
    token: AuthToken,
    election: &State<SharedElection>,
) -> Result<Json<WorkflowStatus>> {
    advance(token, election, |election, caller| {
        election.tally_votes(caller).map(|_| ())
    })
    .await
}

/// Run a phase transition as the token holder and report where the workflow ended up.
async fn advance(
    token: AuthToken,
    election: &State<SharedElection>,
    transition: impl FnOnce(&mut Election, &Identity) -> WorkflowResult<()>,
) -> Result<Json<WorkflowStatus>> {
    let mut election = election.lock().await;
    transition(&mut *election, token.id())?;
    Ok(Json(WorkflowStatus::from(&*election)))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{Header, Status},
        local::asynchronous::Client,
    };

    use crate::{bearer, model::election::Phase, model::voter::Voter, TEST_ADMIN};

    const TRANSITIONS: [(&str, Phase); 5] = [
        ("/workflow/proposals/start", Phase::ProposalsRegistrationStarted),
        ("/workflow/proposals/end", Phase::ProposalsRegistrationEnded),
        ("/workflow/voting/start", Phase::VotingSessionStarted),
        ("/workflow/voting/end", Phase::VotingSessionEnded),
        ("/workflow/tally", Phase::VotesTallied),
    ];

    #[backend_test(admin)]
    async fn register_voter(client: Client) {
        let response = client.post("/voters/alice").dispatch().await;
        assert_eq!(Status::Ok, response.status());

        // The new voter can see their own record.
        let response = client
            .get("/voters/alice")
            .header(bearer("alice"))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
        let voter: Voter = response.into_json().await.unwrap();
        assert_eq!(voter, Voter::registered());
    }

    #[backend_test(admin)]
    async fn register_voter_twice(client: Client) {
        let response = client.post("/voters/alice").dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let response = client.post("/voters/alice").dispatch().await;
        assert_eq!(Status::Conflict, response.status());
        assert_eq!(
            response.into_string().await.unwrap(),
            "Voter alice is already registered"
        );
    }

    #[backend_test]
    async fn register_voter_not_admin(client: Client) {
        // No token at all.
        let response = client.post("/voters/alice").dispatch().await;
        assert_eq!(Status::Unauthorized, response.status());

        // Valid token, wrong identity.
        let response = client
            .post("/voters/alice")
            .header(bearer("alice"))
            .dispatch()
            .await;
        assert_eq!(Status::Forbidden, response.status());

        // Garbage token.
        let response = client
            .post("/voters/alice")
            .header(Header::new("Authorization", "Bearer garbage"))
            .dispatch()
            .await;
        assert_eq!(Status::Unauthorized, response.status());

        // Nothing was registered.
        let response = client
            .post("/voters/alice")
            .header(bearer(TEST_ADMIN))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
    }

    #[backend_test(admin)]
    async fn register_voter_wrong_phase(client: Client) {
        let response = client.post("/workflow/proposals/start").dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let response = client.post("/voters/alice").dispatch().await;
        assert_eq!(Status::Conflict, response.status());
    }

    #[backend_test(admin)]
    async fn full_workflow(client: Client) {
        for (uri, phase) in TRANSITIONS {
            let response = client.post(uri).dispatch().await;
            assert_eq!(Status::Ok, response.status());
            let status: rocket::serde::json::Value = response.into_json().await.unwrap();
            assert_eq!(status["phase"], phase as u8);

            // The public view agrees.
            let response = client.get("/workflow").dispatch().await;
            let public: rocket::serde::json::Value = response.into_json().await.unwrap();
            assert_eq!(public["phase"], phase as u8);
        }
    }

    #[backend_test(admin)]
    async fn skipped_transitions(client: Client) {
        // Nothing but the first transition is legal at the start.
        for (uri, _) in &TRANSITIONS[1..] {
            let response = client.post(*uri).dispatch().await;
            assert_eq!(Status::Conflict, response.status());
        }

        // Walk forward; every earlier transition is now illegal.
        for (i, (uri, _)) in TRANSITIONS.iter().enumerate() {
            let response = client.post(*uri).dispatch().await;
            assert_eq!(Status::Ok, response.status());
            for (earlier, _) in &TRANSITIONS[..=i] {
                let response = client.post(*earlier).dispatch().await;
                assert_eq!(Status::Conflict, response.status());
            }
        }
    }

    #[backend_test]
    async fn transitions_not_admin(client: Client) {
        for (uri, _) in TRANSITIONS {
            let response = client.post(uri).header(bearer("alice")).dispatch().await;
            assert_eq!(Status::Forbidden, response.status());
        }

        let response = client.get("/workflow").dispatch().await;
        let public: rocket::serde::json::Value = response.into_json().await.unwrap();
        assert_eq!(public["phase"], Phase::RegisteringVoters as u8);
    }
}
