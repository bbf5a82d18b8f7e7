use meal_picker::clients::actor_client::ActorClient;
use meal_picker::gemini::{CredentialError, GeminiClient};
use meal_picker::lifecycle::{GateError, MealSystem};
use meal_picker::model::{Catalog, Provenance};

// Nothing listens on the discard port: credential probes fail, and the
// recommendation path exercises the adapter fallback.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

fn dead_system(restored: Option<String>) -> MealSystem {
    MealSystem::with_gemini(
        GeminiClient::with_base_url(Catalog::standard(), DEAD_ENDPOINT),
        restored,
    )
}

#[tokio::test]
async fn gate_blocks_everything_until_login() {
    let system = dead_system(None);

    assert!(!system.is_authenticated().await.unwrap());
    assert!(matches!(
        system.random_pick().await,
        Err(GateError::Locked)
    ));
    assert!(matches!(
        system.recommend("anything").await,
        Err(GateError::Locked)
    ));
    assert!(matches!(
        system.add_order("kimchi").await,
        Err(GateError::Locked)
    ));
    assert!(matches!(
        system.remove_order("kimchi").await,
        Err(GateError::Locked)
    ));

    // Too short: rejected before any network call.
    assert!(matches!(
        system.login("short-key").await,
        Err(GateError::Credential(CredentialError::TooShort))
    ));

    // Long enough, but the probe cannot reach the service.
    assert!(matches!(
        system.login(&"k".repeat(32)).await,
        Err(GateError::Credential(CredentialError::Rejected(_)))
    ));
    assert!(!system.is_authenticated().await.unwrap());

    system.shutdown().await.unwrap();
}

/// A credential restored from session storage opens the gate without
/// re-validation, and the full pick/tally/logout loop works.
#[tokio::test(start_paused = true)]
async fn restored_session_runs_the_full_loop() {
    let system = dead_system(Some("restored-session-credential".to_string()));

    assert!(system.is_authenticated().await.unwrap());

    // Random pick, then tally the dish.
    let pick = system
        .random_pick()
        .await
        .unwrap()
        .expect("idle machine must accept the trigger");
    assert_eq!(pick.provenance, Provenance::Random);
    system.add_order(&pick.item.id).await.unwrap();
    system.selection.reset().await.unwrap();

    // AI recommendation: the dead endpoint lands on the adapter fallback.
    let recommendation = system
        .recommend("Everyone is wiped out after doubles.")
        .await
        .unwrap()
        .expect("idle machine must accept the trigger");
    assert_eq!(recommendation.provenance, Provenance::Ai);
    system.add_order(&recommendation.item.id).await.unwrap();
    system.selection.reset().await.unwrap();

    assert_eq!(system.order_total().await.unwrap(), 2);

    // Logout: credential gone, all state back to initial, gate closed again.
    system.logout().await.unwrap();
    assert!(!system.is_authenticated().await.unwrap());
    assert_eq!(system.order_total().await.unwrap(), 0);
    assert!(system.selection.snapshot().await.unwrap().is_idle());
    assert!(matches!(
        system.random_pick().await,
        Err(GateError::Locked)
    ));
    assert!(matches!(
        system.add_order(&pick.item.id).await,
        Err(GateError::Locked)
    ));

    system.shutdown().await.unwrap();
}

/// The recommendation trigger is a no-op while a result is still displayed.
#[tokio::test(start_paused = true)]
async fn second_trigger_while_result_is_shown_is_a_no_op() {
    let system = dead_system(Some("restored-session-credential".to_string()));

    let first = system.random_pick().await.unwrap();
    assert!(first.is_some());

    // Result not dismissed yet: both flows report the no-op as None.
    assert!(system.random_pick().await.unwrap().is_none());
    assert!(system.recommend("still busy").await.unwrap().is_none());

    system.selection.reset().await.unwrap();
    assert!(system.random_pick().await.unwrap().is_some());

    system.shutdown().await.unwrap();
}
