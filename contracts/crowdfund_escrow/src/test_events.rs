extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, Symbol, TryFromVal, TryIntoVal,
};

use crate::events::{
    ContributionReceived, FundsWithdrawn, ProjectCancelled, ProjectCreated, ProjectFailed,
    RefundIssued,
};
use crate::{CrowdfundEscrow, CrowdfundEscrowClient, Project};

fn setup() -> (Env, CrowdfundEscrowClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);
    let contract_id = env.register(CrowdfundEscrow, ());
    let client = CrowdfundEscrowClient::new(&env, &contract_id);
    (env, client)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

fn register(env: &Env, client: &CrowdfundEscrowClient, token: &token::Client) -> Project {
    let creator = Address::generate(env);
    let deadline = env.ledger().timestamp() + 2 * 86_400;
    client.create_project(&creator, &token.address, &1_000, &deadline)
}

fn contribute(
    env: &Env,
    client: &CrowdfundEscrowClient,
    token: &token::Client,
    project_id: u64,
    amount: i128,
) -> Address {
    let contributor = Address::generate(env);
    token::StellarAssetClient::new(env, &token.address).mint(&contributor, &amount);
    client.contribute(&project_id, &contributor, &amount);
    contributor
}

fn pass_deadline(env: &Env, project: &Project) {
    let deadline = project.deadline;
    env.ledger().with_mut(|li| li.timestamp = deadline + 1);
}

#[test]
fn test_project_created_event() {
    let (env, client) = setup();
    let token = create_token(&env, &Address::generate(&env));
    let project = register(&env, &client, &token);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        project.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProjectCreated {
            project_id: project.id,
            creator: project.creator.clone(),
            token: token.address.clone(),
            funding_goal: 1_000,
            deadline: project.deadline,
        }
    );
}

#[test]
fn test_contribution_received_event() {
    let (env, client) = setup();
    let token = create_token(&env, &Address::generate(&env));
    let project = register(&env, &client, &token);
    let contributor = contribute(&env, &client, &token, project.id, 250);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("funded").into_val(&env),
        project.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ContributionReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ContributionReceived {
            project_id: project.id,
            contributor,
            amount: 250,
        }
    );
}

#[test]
fn test_project_failed_event() {
    let (env, client) = setup();
    let token = create_token(&env, &Address::generate(&env));
    let project = register(&env, &client, &token);
    contribute(&env, &client, &token, project.id, 10);

    pass_deadline(&env, &project);
    client.resolve_outcome(&project.id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("failed").into_val(&env),
        project.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectFailed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProjectFailed {
            project_id: project.id
        }
    );
}

#[test]
fn test_completed_outcome_emits_nothing() {
    let (env, client) = setup();
    let token = create_token(&env, &Address::generate(&env));
    let project = register(&env, &client, &token);
    contribute(&env, &client, &token, project.id, 1_000);

    pass_deadline(&env, &project);
    client.resolve_outcome(&project.id);

    let failed_events = env
        .events()
        .all()
        .iter()
        .filter(|(_, topics, _)| {
            topics
                .get(0)
                .and_then(|topic| Symbol::try_from_val(&env, &topic).ok())
                == Some(symbol_short!("failed"))
        })
        .count();
    assert_eq!(failed_events, 0);
}

#[test]
fn test_refund_issued_event() {
    let (env, client) = setup();
    let token = create_token(&env, &Address::generate(&env));
    let project = register(&env, &client, &token);
    let contributor = contribute(&env, &client, &token, project.id, 75);

    pass_deadline(&env, &project);
    client.resolve_outcome(&project.id);
    client.refund(&project.id, &contributor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("refunded"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("refunded").into_val(&env),
        project.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: RefundIssued = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RefundIssued {
            project_id: project.id,
            contributor,
            amount: 75,
        }
    );
}

#[test]
fn test_project_cancelled_event() {
    let (env, client) = setup();
    let token = create_token(&env, &Address::generate(&env));
    let project = register(&env, &client, &token);

    client.cancel_project(&project.id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("cancelled").into_val(&env),
        project.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectCancelled = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProjectCancelled {
            project_id: project.id,
            creator: project.creator.clone(),
        }
    );
}

#[test]
fn test_funds_withdrawn_event() {
    let (env, client) = setup();
    let token = create_token(&env, &Address::generate(&env));
    let project = register(&env, &client, &token);
    contribute(&env, &client, &token, project.id, 1_200);

    pass_deadline(&env, &project);
    client.resolve_outcome(&project.id);
    client.withdraw_funds(&project.id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        project.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            project_id: project.id,
            creator: project.creator.clone(),
            amount: 1_200,
        }
    );
}
