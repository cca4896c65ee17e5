// The entity store owns every domain collection and is the only place any
// of them change. Commands validate, insert, notify and persist; readers
// get copy-on-write snapshots that later mutations never touch.

pub mod seed;

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::LifecycleConfig;
use crate::error::{AppError, AppResult, ValidationError};
use crate::id_gen::{RecordId, RecordIdGenerator};
use crate::models::{
    Activity, ActivityInput, ConnectionRequest, JobApplication, JobListing, MedicalRecord,
    Order, OrderInput, OrderStatus, OutboundMessage, OwnerProfile, Pet, PetInput, PetStatus,
    Pharmacy, Post, PostAuthor, PostInput, Vaccination, post::extract_tags,
};
use crate::notify::{Notification, NotificationSink, OrderStatusEvent};
use crate::storage::{KeyValueStore, PETS_KEY};

/// Immutable view of one collection at a point in time. Cloning is cheap
/// and a handed-out snapshot never observes later mutations.
#[derive(Debug)]
pub struct Snapshot<T> {
    version: u64,
    records: Arc<Vec<T>>,
}

impl<T> Snapshot<T> {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            version: self.version,
            records: Arc::clone(&self.records),
        }
    }
}

/// A versioned collection. Mutations rebuild the backing vec, so existing
/// snapshots keep pointing at the old one.
#[derive(Debug)]
struct Collection<T> {
    version: u64,
    records: Arc<Vec<T>>,
}

impl<T: Clone> Collection<T> {
    fn new(records: Vec<T>) -> Self {
        Self {
            version: 1,
            records: Arc::new(records),
        }
    }

    fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            version: self.version,
            records: Arc::clone(&self.records),
        }
    }

    fn mutate(&mut self, apply: impl FnOnce(&mut Vec<T>)) {
        let mut next = (*self.records).clone();
        apply(&mut next);
        self.records = Arc::new(next);
        self.version += 1;
    }
}

/// Result of a guarded status transition. A skip is not an error: stale
/// schedule entries are expected whenever an order was removed or already
/// moved past the expected status.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    Applied(Order),
    Skipped(GuardSkip),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuardSkip {
    pub order_id: RecordId,
    pub expected: OrderStatus,
    pub target: OrderStatus,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    OrderMissing,
    StatusMismatch(OrderStatus),
}

pub struct EntityStore {
    ids: RecordIdGenerator,
    storage: Arc<dyn KeyValueStore>,
    sink: Arc<dyn NotificationSink>,
    lifecycle: LifecycleConfig,

    pets: RwLock<Collection<Pet>>,
    activities: RwLock<Collection<Activity>>,
    orders: RwLock<Collection<Order>>,
    posts: RwLock<Collection<Post>>,

    // Read-only catalogs, snapshotted once at load
    medical_records: Snapshot<MedicalRecord>,
    vaccinations: Snapshot<Vaccination>,
    jobs: Snapshot<JobListing>,
    owners: Snapshot<OwnerProfile>,
    pharmacies: Snapshot<Pharmacy>,
}

impl EntityStore {
    /// Build the store: pets come from durable storage when a valid
    /// document exists, the demo seeds otherwise. Never fails; a broken
    /// storage layer degrades to seeds with a warning.
    pub async fn load(
        storage: Arc<dyn KeyValueStore>,
        sink: Arc<dyn NotificationSink>,
        lifecycle: LifecycleConfig,
    ) -> Self {
        let pets = Self::load_pets(storage.as_ref()).await;

        Self {
            ids: RecordIdGenerator::new(),
            storage,
            sink,
            lifecycle,
            pets: RwLock::new(Collection::new(pets)),
            activities: RwLock::new(Collection::new(seed::activities())),
            orders: RwLock::new(Collection::new(Vec::new())),
            posts: RwLock::new(Collection::new(seed::posts())),
            medical_records: Collection::new(seed::medical_records()).snapshot(),
            vaccinations: Collection::new(seed::vaccinations()).snapshot(),
            jobs: Collection::new(seed::jobs()).snapshot(),
            owners: Collection::new(seed::owners()).snapshot(),
            pharmacies: Collection::new(seed::pharmacies()).snapshot(),
        }
    }

    async fn load_pets(storage: &dyn KeyValueStore) -> Vec<Pet> {
        match storage.get(PETS_KEY).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Pet>>(&json) {
                Ok(pets) => {
                    info!("Loaded {} pets from storage", pets.len());
                    pets
                }
                Err(e) => {
                    warn!("Stored pet data is malformed, using defaults: {}", e);
                    seed::pets()
                }
            },
            Ok(None) => {
                debug!("No stored pets, using defaults");
                seed::pets()
            }
            Err(e) => {
                warn!("Could not read stored pets, using defaults: {}", e);
                seed::pets()
            }
        }
    }

    /// Write the current pet collection through to storage. Failures are
    /// logged and swallowed: losing durability must not fail the command
    /// that already succeeded in memory.
    async fn persist_pets(&self) {
        let snapshot = self.pets.read().await.snapshot();
        let json = match serde_json::to_string(snapshot.records()) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize pets for persistence: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.put(PETS_KEY, json).await {
            warn!("Could not persist pets: {}", e);
        }
    }

    fn reject(&self, title: &str, description: &str, missing: Vec<&'static str>) -> AppError {
        self.sink.notify(Notification::error(title, description));
        AppError::Validation(ValidationError::new(missing))
    }

    // ---- creation commands ----

    pub async fn add_pet(&self, input: PetInput) -> AppResult<Pet> {
        let mut missing = Vec::new();
        require(&mut missing, "name", &input.name);
        require(&mut missing, "breed", &input.breed);
        if input.pet_type.is_none() {
            missing.push("pet_type");
        }

        let pet_type = match (missing.is_empty(), input.pet_type) {
            (true, Some(pet_type)) => pet_type,
            _ => {
                return Err(self.reject(
                    "Missing Information",
                    "Please fill in all required fields.",
                    missing,
                ));
            }
        };

        let pet = Pet {
            id: self.ids.next_id(),
            name: input.name,
            pet_type,
            breed: input.breed,
            age: input.age,
            gender: input.gender,
            weight: input.weight,
            microchip: input.microchip,
            image: input.image,
            notes: input.notes,
            status: PetStatus::Healthy,
        };

        self.pets.write().await.mutate(|pets| pets.push(pet.clone()));
        self.persist_pets().await;

        self.sink.notify(Notification::info(
            "Pet Added Successfully!",
            format!("{} has been added to your pet family.", pet.name),
        ));
        Ok(pet)
    }

    pub async fn add_activity(&self, input: ActivityInput) -> AppResult<Activity> {
        let mut missing = Vec::new();
        require(&mut missing, "pet_name", &input.pet_name);
        if input.detail.is_none() {
            missing.push("kind");
        }
        require(&mut missing, "title", &input.title);

        let detail = match (missing.is_empty(), input.detail) {
            (true, Some(detail)) => detail,
            _ => {
                return Err(self.reject(
                    "Missing Information",
                    "Please fill in all required fields.",
                    missing,
                ));
            }
        };

        let activity = Activity {
            id: self.ids.next_id(),
            pet_name: input.pet_name,
            title: input.title,
            detail,
            date: input.date,
            time: input.time,
            notes: input.notes,
        };

        self.activities
            .write()
            .await
            .mutate(|activities| activities.insert(0, activity.clone()));

        self.sink.notify(Notification::info(
            "Activity Added",
            "New activity has been logged successfully.",
        ));
        Ok(activity)
    }

    pub async fn place_order(&self, input: OrderInput, pharmacy: &Pharmacy) -> AppResult<Order> {
        let mut missing = Vec::new();
        require(&mut missing, "pet_name", &input.pet_name);
        require(&mut missing, "medicine_name", &input.medicine_name);
        if !missing.is_empty() {
            return Err(self.reject(
                "Missing Information",
                "Please fill in all required fields.",
                missing,
            ));
        }

        let placed_at = Utc::now();
        let order = Order {
            id: self.ids.next_id(),
            pet_name: input.pet_name,
            medicine_name: input.medicine_name,
            dosage: input.dosage,
            quantity: input.quantity,
            delivery: input.delivery,
            notes: input.notes,
            pharmacy_id: pharmacy.id,
            pharmacy_name: pharmacy.name.clone(),
            status: OrderStatus::Requested,
            placed_at,
            estimated_ready: placed_at + Duration::days(self.lifecycle.estimated_ready_days),
        };

        self.orders
            .write()
            .await
            .mutate(|orders| orders.insert(0, order.clone()));

        self.sink.notify(Notification::info(
            "Order Placed Successfully!",
            format!("Your medicine order has been sent to {}.", pharmacy.name),
        ));
        Ok(order)
    }

    pub async fn create_post(&self, input: PostInput) -> AppResult<Post> {
        if input.content.trim().is_empty() {
            return Err(self.reject(
                "Missing Content",
                "Please write something about your pet!",
                vec!["content"],
            ));
        }

        let post = Post {
            id: self.ids.next_id(),
            author: PostAuthor {
                name: "Demo User".to_string(),
                avatar: "/placeholder.svg?height=50&width=50".to_string(),
                location: "Your Location".to_string(),
            },
            content: input.content,
            media: input.media,
            likes: 0,
            comments: 0,
            shares: 0,
            posted_at: Utc::now(),
            tags: extract_tags(&input.tags),
        };

        self.posts
            .write()
            .await
            .mutate(|posts| posts.insert(0, post.clone()));

        self.sink.notify(Notification::info(
            "Post Created!",
            "Your post has been shared with the community.",
        ));
        Ok(post)
    }

    /// Bump the like count on a post. Unknown ids are a silent no-op: the
    /// post may have left the feed between render and click.
    pub async fn like_post(&self, post_id: RecordId) -> Option<Post> {
        let mut posts = self.posts.write().await;
        if !posts.records.iter().any(|post| post.id == post_id) {
            debug!("Ignoring like for unknown post {}", post_id);
            return None;
        }

        let mut liked = None;
        posts.mutate(|posts| {
            if let Some(post) = posts.iter_mut().find(|post| post.id == post_id) {
                post.likes += 1;
                liked = Some(post.clone());
            }
        });
        liked
    }

    // ---- simulation commands (receipts are returned, never stored) ----

    pub async fn send_message(&self, owner_id: RecordId, body: &str) -> AppResult<OutboundMessage> {
        if body.trim().is_empty() {
            return Err(self.reject(
                "Empty Message",
                "Please write a message before sending.",
                vec!["message"],
            ));
        }

        let owner = self
            .owner(owner_id)
            .ok_or_else(|| AppError::NotFound(format!("owner {}", owner_id)))?;

        self.sink.notify(Notification::info(
            "Message Sent!",
            format!("Your message has been sent to {}.", owner.name),
        ));
        Ok(OutboundMessage {
            owner_id: owner.id,
            owner_name: owner.name,
            body: body.to_string(),
            sent_at: Utc::now(),
        })
    }

    pub async fn apply_to_job(&self, job_id: RecordId) -> AppResult<JobApplication> {
        let job = self
            .job(job_id)
            .ok_or_else(|| AppError::NotFound(format!("job {}", job_id)))?;

        self.sink.notify(Notification::info(
            "Application Submitted!",
            format!(
                "Your application for {} has been sent to {}.",
                job.title, job.company
            ),
        ));
        Ok(JobApplication {
            job_id: job.id,
            job_title: job.title,
            company: job.company,
            submitted_at: Utc::now(),
        })
    }

    pub async fn send_connection_request(
        &self,
        owner_id: RecordId,
    ) -> AppResult<ConnectionRequest> {
        let owner = self
            .owner(owner_id)
            .ok_or_else(|| AppError::NotFound(format!("owner {}", owner_id)))?;

        self.sink.notify(Notification::info(
            "Friend Request Sent!",
            format!("Friend request sent to {}.", owner.name),
        ));
        Ok(ConnectionRequest {
            owner_id: owner.id,
            owner_name: owner.name,
            sent_at: Utc::now(),
        })
    }

    // ---- order lifecycle ----

    /// The only way any order status changes. Applies `target` when the
    /// order exists and still sits at `expected`; anything else is a
    /// skip, logged at debug and otherwise invisible.
    pub async fn apply_order_transition(
        &self,
        order_id: RecordId,
        expected: OrderStatus,
        target: OrderStatus,
    ) -> TransitionOutcome {
        let mut orders = self.orders.write().await;

        let current = orders
            .records
            .iter()
            .find(|order| order.id == order_id)
            .map(|order| order.status);

        let reason = match current {
            None => Some(SkipReason::OrderMissing),
            Some(status) if status != expected => Some(SkipReason::StatusMismatch(status)),
            Some(_) => None,
        };

        if let Some(reason) = reason {
            debug!(
                "Skipping transition of order {} to {:?}: {:?}",
                order_id, target, reason
            );
            return TransitionOutcome::Skipped(GuardSkip {
                order_id,
                expected,
                target,
                reason,
            });
        }

        let mut updated = None;
        orders.mutate(|orders| {
            if let Some(order) = orders.iter_mut().find(|order| order.id == order_id) {
                order.status = target;
                updated = Some(order.clone());
            }
        });

        match updated {
            Some(order) => TransitionOutcome::Applied(order),
            // The guard held the lock the whole time, so this is unreachable;
            // report it as a skip rather than panicking.
            None => TransitionOutcome::Skipped(GuardSkip {
                order_id,
                expected,
                target,
                reason: SkipReason::OrderMissing,
            }),
        }
    }

    /// Manual hand-off once an order is ready. Runs the same guard as the
    /// scheduled transitions, so a double click or a stale button is a
    /// no-op.
    pub async fn mark_order_delivered(&self, order_id: RecordId) -> TransitionOutcome {
        let outcome = self
            .apply_order_transition(order_id, OrderStatus::Ready, OrderStatus::Delivered)
            .await;

        if let TransitionOutcome::Applied(order) = &outcome {
            if let Some((title, message)) = order.status.announcement() {
                self.sink.order_status_changed(OrderStatusEvent {
                    order_id: order.id,
                    new_status: order.status,
                    title: title.to_string(),
                    message: message.to_string(),
                });
            }
        }
        outcome
    }

    /// Drop an order from the collection. Host-side cleanup only; any
    /// transitions still scheduled for it will skip through the guard.
    pub async fn remove_order(&self, order_id: RecordId) -> Option<Order> {
        let mut orders = self.orders.write().await;
        if !orders.records.iter().any(|order| order.id == order_id) {
            return None;
        }

        let mut removed = None;
        orders.mutate(|orders| {
            if let Some(index) = orders.iter().position(|order| order.id == order_id) {
                removed = Some(orders.remove(index));
            }
        });
        removed
    }

    // ---- reads ----

    pub async fn pets(&self) -> Snapshot<Pet> {
        self.pets.read().await.snapshot()
    }

    pub async fn pet(&self, pet_id: RecordId) -> Option<Pet> {
        self.pets
            .read()
            .await
            .records
            .iter()
            .find(|pet| pet.id == pet_id)
            .cloned()
    }

    pub async fn activities(&self) -> Snapshot<Activity> {
        self.activities.read().await.snapshot()
    }

    pub async fn orders(&self) -> Snapshot<Order> {
        self.orders.read().await.snapshot()
    }

    pub async fn order(&self, order_id: RecordId) -> Option<Order> {
        self.orders
            .read()
            .await
            .records
            .iter()
            .find(|order| order.id == order_id)
            .cloned()
    }

    pub async fn posts(&self) -> Snapshot<Post> {
        self.posts.read().await.snapshot()
    }

    pub fn jobs(&self) -> Snapshot<JobListing> {
        self.jobs.clone()
    }

    pub fn job(&self, job_id: RecordId) -> Option<JobListing> {
        self.jobs.iter().find(|job| job.id == job_id).cloned()
    }

    pub fn owners(&self) -> Snapshot<OwnerProfile> {
        self.owners.clone()
    }

    pub fn owner(&self, owner_id: RecordId) -> Option<OwnerProfile> {
        self.owners
            .iter()
            .find(|owner| owner.id == owner_id)
            .cloned()
    }

    pub fn pharmacies(&self) -> Snapshot<Pharmacy> {
        self.pharmacies.clone()
    }

    pub fn pharmacy(&self, pharmacy_id: RecordId) -> Option<Pharmacy> {
        self.pharmacies
            .iter()
            .find(|pharmacy| pharmacy.id == pharmacy_id)
            .cloned()
    }

    pub fn medical_history(&self, pet_id: RecordId) -> Vec<MedicalRecord> {
        self.medical_records
            .iter()
            .filter(|record| record.pet_id == pet_id)
            .cloned()
            .collect()
    }

    pub fn vaccinations(&self, pet_id: RecordId) -> Vec<Vaccination> {
        self.vaccinations
            .iter()
            .filter(|vaccination| vaccination.pet_id == pet_id)
            .cloned()
            .collect()
    }
}

fn require(missing: &mut Vec<&'static str>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(field);
    }
}
