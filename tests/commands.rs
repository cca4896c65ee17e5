// End-to-end command tests against the public surface: real config, a
// tempdir-backed JSON store and a recording sink standing in for the UI.

use std::sync::Arc;

use tempfile::TempDir;

use pawhub::app_state::AppState;
use pawhub::config::{Config, LifecycleConfig, StorageConfig};
use pawhub::error::AppError;
use pawhub::filter::{FilterEngine, JobFilter, OwnerFilter, PetFilter};
use pawhub::models::{OrderInput, OrderStatus, PetInput, PetType, PostInput};
use pawhub::notify::{RecordingSink, Severity};

fn test_config(dir: &TempDir) -> Config {
    Config {
        storage: StorageConfig {
            data_dir: dir.path().to_path_buf(),
        },
        lifecycle: LifecycleConfig::default(),
    }
}

async fn test_app(dir: &TempDir) -> (AppState, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let state = AppState::new(test_config(dir), sink.clone())
        .await
        .expect("app state should start");
    (state, sink)
}

fn rex() -> PetInput {
    PetInput {
        name: "Rex".to_string(),
        pet_type: Some(PetType::Dog),
        breed: "Labrador".to_string(),
        age: "2 years".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn fresh_app_serves_seed_catalogs() {
    let dir = TempDir::new().unwrap();
    let (state, _) = test_app(&dir).await;

    assert_eq!(state.store.pets().await.len(), 4);
    assert_eq!(state.store.posts().await.len(), 4);
    assert!(state.store.orders().await.is_empty());
    assert_eq!(state.store.jobs().len(), 6);
    assert_eq!(state.store.owners().len(), 4);
    assert_eq!(state.store.pharmacies().len(), 3);

    state.shutdown().await;
}

#[tokio::test]
async fn added_pet_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let (state, _) = test_app(&dir).await;
        state.store.add_pet(rex()).await.unwrap();
        state.shutdown().await;
    }

    let (state, _) = test_app(&dir).await;
    let pets = state.store.pets().await;
    assert_eq!(pets.len(), 5);
    assert_eq!(pets.records().last().map(|p| p.name.as_str()), Some("Rex"));

    state.shutdown().await;
}

#[tokio::test]
async fn corrupt_pet_document_falls_back_to_seeds() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pets.json"), "{ definitely not pets").unwrap();

    let (state, _) = test_app(&dir).await;
    let pets = state.store.pets().await;
    assert_eq!(pets.len(), 4);
    assert_eq!(pets.records()[0].name, "Buddy");

    state.shutdown().await;
}

#[tokio::test]
async fn pharmacy_order_resolves_the_pharmacy_and_schedules() {
    let dir = TempDir::new().unwrap();
    let (state, sink) = test_app(&dir).await;

    let order = state
        .place_pharmacy_order(
            OrderInput {
                pet_name: "Buddy".to_string(),
                medicine_name: "Apoquel".to_string(),
                dosage: "16mg".to_string(),
                quantity: "30".to_string(),
                ..Default::default()
            },
            1,
        )
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Requested);
    assert_eq!(order.pharmacy_name, "PetCare Pharmacy");
    // Requested -> Processing and Processing -> Ready are both on the books
    assert_eq!(state.lifecycle.pending_count(), 2);
    assert_eq!(sink.titles(), vec!["Order Placed Successfully!"]);

    let err = state
        .place_pharmacy_order(
            OrderInput {
                pet_name: "Buddy".to_string(),
                medicine_name: "Apoquel".to_string(),
                ..Default::default()
            },
            404,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    state.shutdown().await;
}

#[tokio::test]
async fn rejected_command_reports_error_and_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let (state, sink) = test_app(&dir).await;
    let before = state.store.pets().await;

    let err = state.store.add_pet(PetInput::default()).await.unwrap_err();
    match err {
        AppError::Validation(v) => {
            assert_eq!(v.missing_fields, vec!["name", "breed", "pet_type"])
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let after = state.store.pets().await;
    assert_eq!(after.version(), before.version());

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Missing Information");
    assert_eq!(notifications[0].severity, Severity::Error);

    state.shutdown().await;
}

#[tokio::test]
async fn dashboard_search_combines_selectors() {
    let dir = TempDir::new().unwrap();
    let (state, _) = test_app(&dir).await;
    let pets = state.store.pets().await;

    // Free text hits name or breed, the picker narrows by type
    let matched = FilterEngine::apply(pets.records(), &PetFilter::new("golden", "all"));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Buddy");

    let matched = FilterEngine::apply(pets.records(), &PetFilter::new("", "cat"));
    let names: Vec<_> = matched.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Whiskers", "Luna"]);

    let matched = FilterEngine::apply(pets.records(), &PetFilter::new("luna", "dog"));
    assert!(matched.is_empty());

    state.shutdown().await;
}

#[tokio::test]
async fn owner_search_spans_their_pets() {
    let dir = TempDir::new().unwrap();
    let (state, _) = test_app(&dir).await;
    let owners = state.store.owners();

    // "persian" only appears as Bella's breed, so it finds Sarah
    let matched = FilterEngine::apply(owners.records(), &OwnerFilter::new("persian", "all", "all"));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Sarah Johnson");

    // Type matches when any owned pet has it
    let matched = FilterEngine::apply(owners.records(), &OwnerFilter::new("", "all", "cat"));
    let names: Vec<_> = matched.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Sarah Johnson", "David Rodriguez"]);

    let matched = FilterEngine::apply(owners.records(), &OwnerFilter::new("", "Downtown", "all"));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Mike Chen");

    state.shutdown().await;
}

#[tokio::test]
async fn job_board_filters_by_text_location_and_category() {
    let dir = TempDir::new().unwrap();
    let (state, _) = test_app(&dir).await;
    let jobs = state.store.jobs();

    let matched = FilterEngine::apply(jobs.records(), &JobFilter::new("groomer", "", "all", "all"));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].title, "Pet Groomer");

    let matched = FilterEngine::apply(jobs.records(), &JobFilter::new("", "remote", "all", "all"));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].company, "Pet Life Magazine");

    let matched =
        FilterEngine::apply(jobs.records(), &JobFilter::new("", "", "veterinary", "all"));
    let titles: Vec<_> = matched.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, vec!["Veterinary Assistant", "Veterinary Technician"]);

    let matched =
        FilterEngine::apply(jobs.records(), &JobFilter::new("", "", "all", "full-time"));
    assert_eq!(matched.len(), 3);

    state.shutdown().await;
}

#[tokio::test]
async fn concurrent_likes_all_land() {
    let dir = TempDir::new().unwrap();
    let (state, _) = test_app(&dir).await;

    // Seed post 1 starts at 24 likes
    futures::future::join_all((0..10).map(|_| state.store.like_post(1))).await;

    let posts = state.store.posts().await;
    let post = posts.iter().find(|p| p.id == 1).unwrap();
    assert_eq!(post.likes, 34);

    state.shutdown().await;
}

#[tokio::test]
async fn community_flow_posts_likes_and_connects() {
    let dir = TempDir::new().unwrap();
    let (state, sink) = test_app(&dir).await;

    let post = state
        .store
        .create_post(PostInput {
            content: "Rex loved the park today".to_string(),
            tags: "#Rex #Park".to_string(),
            media: None,
        })
        .await
        .unwrap();
    assert_eq!(post.tags, vec!["#Rex", "#Park"]);

    let liked = state.store.like_post(post.id).await.unwrap();
    assert_eq!(liked.likes, 1);
    let liked = state.store.like_post(post.id).await.unwrap();
    assert_eq!(liked.likes, 2);
    // likes + comments * 2 + 15
    assert_eq!(liked.view_count(), 17);

    let receipt = state.store.send_connection_request(3).await.unwrap();
    assert_eq!(receipt.owner_name, "Emma Wilson");

    let titles = sink.titles();
    assert_eq!(titles, vec!["Post Created!", "Friend Request Sent!"]);

    state.shutdown().await;
}
