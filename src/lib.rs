// PawHub domain layer - entity collections, filtering and the order
// lifecycle simulation behind the pet-care app surfaces.

// Application wiring
pub mod app_state;
pub mod config;

// Domain records and their metadata
pub mod models;

// Entity store - the single owner and mutator of all collections
pub mod store;

// Pure filtering over snapshots
pub mod filter;

// Scheduled order status transitions
pub mod lifecycle;

// Host-facing notification contract
pub mod notify;

// Durable key-value persistence
pub mod storage;

// Common utilities
pub mod error;
pub mod id_gen;

// Re-exports for convenience
pub use app_state::AppState;
pub use error::{AppError, AppResult, ValidationError};
pub use id_gen::{RecordId, RecordIdGenerator};
pub use store::{EntityStore, Snapshot, TransitionOutcome};
