use std::sync::Arc;

use meal_picker::clients::{actor_client::ActorClient, SelectionClient};
use meal_picker::framework::mock::MockClient;
use meal_picker::gemini::{GeminiClient, FALLBACK_REASON};
use meal_picker::model::{
    Catalog, MenuItem, PickResult, Provenance, Selection, SelectionState,
};
use meal_picker::selection_actor::{self, SelectionCommand, SelectionError, SelectionEvent};

// Nothing listens on the discard port, so AI calls fail fast and exercise
// the adapter's internal fallback.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

fn dead_gemini() -> Arc<GeminiClient> {
    Arc::new(GeminiClient::with_base_url(Catalog::standard(), DEAD_ENDPOINT))
}

/// Real selection actor, spin driven with paused time: the flow must end in
/// a committed Result drawn from the catalog.
#[tokio::test(start_paused = true)]
async fn random_pick_terminates_in_a_result() {
    let catalog = Catalog::standard();
    let (actor, selection) = selection_actor::new(catalog.clone(), dead_gemini());
    let handle = tokio::spawn(actor.run(()));

    let result = selection
        .random_pick()
        .await
        .unwrap()
        .expect("idle machine must accept the trigger");

    assert_eq!(result.provenance, Provenance::Random);
    assert!(catalog.by_id(&result.item.id).is_some());
    assert!(!result.reason.is_empty());

    // The machine holds the result until an explicit reset.
    let state = selection.snapshot().await.unwrap();
    assert_eq!(state.result(), Some(&result));

    selection.reset().await.unwrap();
    assert!(selection.snapshot().await.unwrap().is_idle());

    drop(selection);
    handle.await.unwrap();
}

/// Triggers outside Idle are no-ops, observed both at the raw command level
/// and through the driving client.
#[tokio::test(start_paused = true)]
async fn triggers_while_busy_are_ignored() {
    let (actor, selection) = selection_actor::new(Catalog::standard(), dead_gemini());
    let handle = tokio::spawn(actor.run(()));

    // Enter RandomSpinning manually.
    let event = selection
        .inner()
        .command(SelectionCommand::StartRandom)
        .await
        .unwrap();
    assert_eq!(event, SelectionEvent::Accepted);

    // Re-entrant triggers: state unchanged.
    let event = selection
        .inner()
        .command(SelectionCommand::StartRandom)
        .await
        .unwrap();
    assert_eq!(event, SelectionEvent::Ignored);
    let event = selection
        .inner()
        .command(SelectionCommand::StartAi)
        .await
        .unwrap();
    assert_eq!(event, SelectionEvent::Ignored);
    assert!(matches!(
        selection.snapshot().await.unwrap(),
        SelectionState::RandomSpinning { .. }
    ));

    // The full flow reports the no-op as None.
    assert_eq!(selection.random_pick().await.unwrap(), None);

    drop(selection);
    handle.await.unwrap();
}

/// An unreachable AI service never surfaces an error: the adapter substitutes
/// a random dish and the machine still commits an AI-provenance result.
#[tokio::test]
async fn unreachable_service_still_commits_via_fallback() {
    let catalog = Catalog::standard();
    let (actor, selection) = selection_actor::new(catalog.clone(), dead_gemini());
    let handle = tokio::spawn(actor.run(()));

    let result = selection
        .recommend("Cold, rainy evening session.", &"k".repeat(32))
        .await
        .unwrap()
        .expect("idle machine must accept the trigger");

    assert_eq!(result.provenance, Provenance::Ai);
    assert_eq!(result.reason, FALLBACK_REASON);
    assert!(catalog.by_id(&result.item.id).is_some());

    drop(selection);
    handle.await.unwrap();
}

/// A blank credential is the caller-level failure path: the flow aborts, the
/// machine returns to Idle, and the error is surfaced for user messaging.
#[tokio::test]
async fn blank_credential_aborts_back_to_idle() {
    let (actor, selection) = selection_actor::new(Catalog::standard(), dead_gemini());
    let handle = tokio::spawn(actor.run(()));

    let result = selection.recommend("any condition", "   ").await;
    assert!(matches!(result, Err(SelectionError::Recommendation(_))));
    assert!(selection.snapshot().await.unwrap().is_idle());

    // The machine is usable again after the failure.
    let event = selection
        .inner()
        .command(SelectionCommand::StartAi)
        .await
        .unwrap();
    assert_eq!(event, SelectionEvent::Accepted);

    drop(selection);
    handle.await.unwrap();
}

/// Client-in-isolation: the recommendation flow against a scripted actor.
///
/// Pattern: Client + Mock
/// - Mocked selection actor (scripted Accepted/Committed replies)
/// - Real adapter pointed at a dead endpoint (deterministic fallback)
#[tokio::test]
async fn recommend_flow_with_mocked_actor() {
    let mut mock = MockClient::<Selection>::new();

    let committed = PickResult {
        item: MenuItem::new("sundubu", "Sundubu Jjigae", "img", "#ef4444", &["spicy"]),
        reason: "Scripted reason".to_string(),
        provenance: Provenance::Ai,
    };

    mock.expect_command().return_ok(SelectionEvent::Accepted);
    mock.expect_command()
        .return_ok(SelectionEvent::Committed(committed.clone()));

    let selection = SelectionClient::new(mock.client(), dead_gemini());
    let result = selection
        .recommend("scripted run", &"k".repeat(32))
        .await
        .unwrap();

    assert_eq!(result, Some(committed));
    mock.verify();
}
