// Snowflake-like record IDs: time-ordered 64-bit integers, unique within a
// process. New records sort after old ones by construction.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier for every stored record (pets, orders, posts, ...).
pub type RecordId = i64;

/// 64-bit ID format: [timestamp:42][sequence:22]
/// 42 bits of milliseconds and 4M IDs per millisecond, far beyond what a
/// single interactive session produces.
#[derive(Debug)]
pub struct RecordIdGenerator {
    sequence: AtomicU64,
    last_timestamp: AtomicU64,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
            last_timestamp: AtomicU64::new(0),
        }
    }

    /// Generate the next unique ID.
    pub fn next_id(&self) -> RecordId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        let last_ts = self.last_timestamp.load(Ordering::Relaxed);

        let sequence = if now == last_ts {
            // Same millisecond - increment sequence
            self.sequence.fetch_add(1, Ordering::Relaxed)
        } else {
            // New millisecond - reset sequence
            self.last_timestamp.store(now, Ordering::Relaxed);
            self.sequence.store(1, Ordering::Relaxed);
            0
        };

        // Construct 64-bit ID: [timestamp:42][sequence:22]
        let id = ((now & 0x3FF_FFFF_FFFF) << 22) | (sequence & 0x3F_FFFF);

        id as RecordId
    }

    /// Extract the creation timestamp (millis since epoch) from an ID.
    pub fn extract_timestamp(id: RecordId) -> u64 {
        (id as u64) >> 22
    }

    /// Extract the per-millisecond sequence from an ID.
    pub fn extract_sequence(id: RecordId) -> u32 {
        ((id as u64) & 0x3F_FFFF) as u32
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let generator = RecordIdGenerator::new();

        let id1 = generator.next_id();
        let id2 = generator.next_id();
        let id3 = generator.next_id();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert!(id1 < id2);
        assert!(id2 < id3);
    }

    #[test]
    fn sequence_increments_within_a_millisecond() {
        let generator = RecordIdGenerator::new();

        let id1 = generator.next_id();
        let id2 = generator.next_id();

        if RecordIdGenerator::extract_timestamp(id1) == RecordIdGenerator::extract_timestamp(id2) {
            assert!(
                RecordIdGenerator::extract_sequence(id2)
                    > RecordIdGenerator::extract_sequence(id1)
            );
        }
    }

    #[test]
    fn timestamp_is_recent() {
        let generator = RecordIdGenerator::new();
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let id = generator.next_id();

        let ts = RecordIdGenerator::extract_timestamp(id);
        assert!(ts >= before);
        assert!(ts <= before + 1000);
    }
}
