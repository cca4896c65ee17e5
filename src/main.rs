// PawHub demo session - stands in for the app surface: issues commands
// against the domain layer and prints what a UI would render.

use std::sync::Arc;
use std::time::Duration;

use pawhub::{
    app_state::AppState,
    config::Config,
    filter::{FilterEngine, PetFilter},
    models::{ActivityDetail, ActivityInput, OrderInput, PetInput, PetType, PostInput},
    notify::TracingSink,
    store::TransitionOutcome,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize application state with a log-backed notification sink
    let state = AppState::new(config, Arc::new(TracingSink)).await?;

    // The pet family, durable across runs
    let pets = state.store.pets().await;
    println!("🐾 Pet family ({} pets):", pets.len());
    for pet in pets.iter() {
        println!(
            "  {} - {} {} ({})",
            pet.name,
            pet.breed,
            pet.pet_type.as_str(),
            pet.status.label()
        );
    }

    // Register a new pet; this round-trips through storage
    let rex = state
        .store
        .add_pet(PetInput {
            name: "Rex".to_string(),
            pet_type: Some(PetType::Dog),
            breed: "Labrador".to_string(),
            age: "2 years".to_string(),
            ..Default::default()
        })
        .await?;
    println!("Added {} (id {})", rex.name, rex.id);

    // A submission with blank required fields is rejected and the
    // collection stays as it was
    if state.store.add_pet(PetInput::default()).await.is_err() {
        let count = state.store.pets().await.len();
        println!("Rejected incomplete pet form, {} pets unchanged", count);
    }

    // Log an activity for the new pet
    state
        .store
        .add_activity(ActivityInput {
            pet_name: rex.name.clone(),
            title: "First Walk".to_string(),
            detail: Some(ActivityDetail::Walk {
                duration: "15 minutes".to_string(),
            }),
            ..Default::default()
        })
        .await?;

    // Search the dashboard the way the UI does
    let pets = state.store.pets().await;
    let filter = PetFilter::new("lab", "dog");
    let matched = FilterEngine::apply(pets.records(), &filter);
    println!(
        "Dashboard search 'lab' + type 'dog' -> {:?}",
        matched.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
    );

    // Order medicine and let the lifecycle run its course
    let pharmacies = state.store.pharmacies();
    let pharmacy = &pharmacies.records()[0];
    let order = state
        .place_pharmacy_order(
            OrderInput {
                pet_name: rex.name.clone(),
                medicine_name: "Heartgard Plus".to_string(),
                dosage: "1 chewable".to_string(),
                quantity: "6".to_string(),
                ..Default::default()
            },
            pharmacy.id,
        )
        .await?;
    println!(
        "Placed order {} at {} ({})",
        order.id,
        order.pharmacy_name,
        order.status.label()
    );

    // Requested -> Processing -> Ready on the configured delays
    let ready_after = state.config.lifecycle.ready_delay() + Duration::from_millis(500);
    tokio::time::sleep(ready_after).await;

    if let Some(order) = state.store.order(order.id).await {
        println!("Order {} is now: {}", order.id, order.status.label());
    }

    // Hand-off is manual once the order is ready
    match state.store.mark_order_delivered(order.id).await {
        TransitionOutcome::Applied(order) => {
            println!("Order {} delivered ({})", order.id, order.status.label())
        }
        TransitionOutcome::Skipped(skip) => {
            println!("Delivery skipped: {:?}", skip.reason)
        }
    }

    // Share the moment with the community
    let post = state
        .store
        .create_post(PostInput {
            content: format!("{} just had his first walk with us! 🐕", rex.name),
            tags: "#NewFamilyMember #FirstWalk".to_string(),
            media: None,
        })
        .await?;
    if let Some(liked) = state.store.like_post(post.id).await {
        println!(
            "Shared a post, {} like(s) and {} views so far",
            liked.likes,
            liked.view_count()
        );
    }

    // Browse jobs and nearby owners
    let receipt = state.store.apply_to_job(1).await?;
    println!("Applied to {} at {}", receipt.job_title, receipt.company);
    let request = state.store.send_connection_request(1).await?;
    println!("Sent friend request to {}", request.owner_name);

    state.shutdown().await;
    Ok(())
}
