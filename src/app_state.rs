use std::sync::Arc;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    id_gen::RecordId,
    lifecycle::LifecycleEngine,
    models::{Order, OrderInput},
    notify::NotificationSink,
    storage::JsonFileStore,
    store::EntityStore,
};

/// The assembled domain layer: storage, entity store and lifecycle engine,
/// wired once at startup and passed around by handle. There is no global
/// instance; hosts construct as many isolated states as they need.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntityStore>,
    pub lifecycle: Arc<LifecycleEngine>,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config, sink: Arc<dyn NotificationSink>) -> anyhow::Result<Self> {
        // Initialize durable storage
        let storage = Arc::new(JsonFileStore::new(config.storage.data_dir.clone())?);

        // Load collections, then start the lifecycle driver against them
        let store = Arc::new(
            EntityStore::load(storage, Arc::clone(&sink), config.lifecycle.clone()).await,
        );
        let lifecycle = Arc::new(LifecycleEngine::start(
            Arc::clone(&store),
            sink,
            config.lifecycle.clone(),
        ));

        Ok(Self {
            store,
            lifecycle,
            config,
        })
    }

    /// Place a medicine order at the given pharmacy and register its
    /// scheduled status transitions.
    pub async fn place_pharmacy_order(
        &self,
        input: OrderInput,
        pharmacy_id: RecordId,
    ) -> AppResult<Order> {
        let pharmacy = self
            .store
            .pharmacy(pharmacy_id)
            .ok_or_else(|| AppError::NotFound(format!("pharmacy {}", pharmacy_id)))?;

        let order = self.store.place_order(input, &pharmacy).await?;
        self.lifecycle.schedule_order(order.id);
        Ok(order)
    }

    /// Stop the lifecycle driver. Pending simulated transitions are lost,
    /// matching what a process exit would do.
    pub async fn shutdown(&self) {
        self.lifecycle.shutdown().await;
    }
}
