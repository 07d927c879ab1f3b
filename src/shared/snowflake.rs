//! Snowflake ID Generator
//!
//! Twitter-style unique ID generation. Entity ids are rendered as
//! `<prefix>-<snowflake>`, e.g. `thread-1164437292396544000`.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Default epoch (2023-01-01T00:00:00.000Z)
pub const DEFAULT_EPOCH: u64 = 1672531200000;

/// Id prefixes per entity kind
pub mod prefix {
    pub const THREAD: &str = "thread";
    pub const COMMENT: &str = "comment";
    pub const REPLY: &str = "reply";
    pub const COMMENT_LIKE: &str = "comment_like";
}

/// Snowflake ID generator
pub struct SnowflakeGenerator {
    machine_id: u64,
    epoch: u64,
    // (last timestamp, sequence within that millisecond)
    state: Mutex<(u64, u64)>,
}

impl SnowflakeGenerator {
    /// Create a new snowflake generator
    pub fn new(machine_id: u64, epoch: u64) -> Self {
        Self {
            machine_id: machine_id & 0x3FF, // 10 bits
            epoch,
            state: Mutex::new((0, 0)),
        }
    }

    /// Generate a new snowflake ID
    pub fn generate(&self) -> i64 {
        let mut state = self.state.lock();
        let mut timestamp = current_timestamp().max(state.0);

        let sequence = if timestamp == state.0 {
            let next = (state.1 + 1) & 0xFFF;
            if next == 0 {
                // Sequence exhausted for this millisecond, borrow the next one
                timestamp += 1;
            }
            next
        } else {
            0
        };
        *state = (timestamp, sequence);

        let id = (timestamp.saturating_sub(self.epoch) << 22) | (self.machine_id << 12) | sequence;

        id as i64
    }

    /// Generate a prefixed entity id
    pub fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.generate())
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(1, DEFAULT_EPOCH)
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
