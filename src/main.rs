//! Demo walkthrough for the meal-picker system.
//!
//! Restores a credential from the `GREENFC_API_KEY` environment variable
//! (standing in for session-scoped storage), runs a random pick, tallies a
//! few orders, asks the AI coach for a recommendation, and logs out.

use meal_picker::lifecycle::{setup_tracing, MealSystem};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting the Green FC meal desk");

    // Session gate: a credential stored earlier in the session opens the
    // gate directly; without one there is nothing we can do here.
    let restored = std::env::var("GREENFC_API_KEY").ok().filter(|k| !k.is_empty());
    if restored.is_none() {
        info!("No stored credential. Set GREENFC_API_KEY to open the gate.");
        return Ok(());
    }

    let system = MealSystem::new(restored);

    // Random pick: sixteen animation ticks, then a committed dish.
    let span = tracing::info_span!("random_pick");
    let pick = async {
        info!("Spinning the random selector");
        system.random_pick().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    if let Some(pick) = &pick {
        info!(dish = %pick.item.name, reason = %pick.reason, "Random pick");
        system
            .add_order(&pick.item.id)
            .await
            .map_err(|e| e.to_string())?;
        system.selection.reset().await.map_err(|e| e.to_string())?;
    }

    // A couple of manual orders on top.
    system.add_order("kimchi").await.map_err(|e| e.to_string())?;
    system.add_order("kimchi").await.map_err(|e| e.to_string())?;
    let total = system.order_total().await.map_err(|e| e.to_string())?;
    info!(total, "Orders so far");

    // AI recommendation: falls back to a random dish if the service is
    // unreachable, and to the gate error if the credential is bad.
    let span = tracing::info_span!("ai_recommendation");
    let recommendation = async {
        info!("Asking the AI coach");
        system.recommend("Everyone looks drained after drills.").await
    }
    .instrument(span)
    .await;

    match recommendation {
        Ok(Some(result)) => {
            info!(dish = %result.item.name, reason = %result.reason, "Coach says");
            system
                .add_order(&result.item.id)
                .await
                .map_err(|e| e.to_string())?;
            system.selection.reset().await.map_err(|e| e.to_string())?;
        }
        Ok(None) => warn!("Recommendation trigger ignored (machine not idle)"),
        Err(e) => warn!(error = %e, "Recommendation failed"),
    }

    // Logout clears the credential and resets all state.
    system.logout().await.map_err(|e| e.to_string())?;
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
