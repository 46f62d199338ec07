//! Snippet id allocation
//!
//! Ids stay integers derived from the creation time in milliseconds, but the
//! allocator never hands out a value at or below its persisted high-water
//! mark. Two snippets created in the same millisecond therefore still get
//! distinct ids.

use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::storage::{KeyValueStore, LAST_ID_KEY};

type Clock = Box<dyn Fn() -> u64 + Send + Sync>;

/// Allocates monotonically increasing, time-derived snippet ids
pub struct IdAllocator {
    clock: Clock,
}

impl std::fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdAllocator").finish_non_exhaustive()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Creates an allocator that reads the wall clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// Creates an allocator with a custom millisecond clock
    #[must_use]
    pub fn with_clock(clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Reserves the next id and persists the new high-water mark
    ///
    /// `floor` is the largest id already present in the collection; the
    /// result is strictly greater than both it and the persisted mark.
    ///
    /// # Errors
    ///
    /// Returns `IdsExhausted` if the mark or `floor` is already `u64::MAX`,
    /// or a write error if the new mark cannot be persisted.
    pub fn allocate(&self, backend: &dyn KeyValueStore, floor: u64) -> StoreResult<u64> {
        let last = backend
            .get(LAST_ID_KEY)
            .and_then(|value| value.as_u64())
            .unwrap_or(0)
            .max(floor);

        let next = last
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted(last))?;
        let id = (self.clock)().max(next);

        backend
            .update(LAST_ID_KEY, Value::from(id))
            .map_err(|e| StoreError::Write(format!("Failed to reserve snippet id: {e}")))?;

        Ok(id)
    }
}

fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
