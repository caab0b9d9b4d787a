//! Snowflake ID Generator
//!
//! Time-ordered unique document IDs. Layout (most significant first):
//! 41 bits of milliseconds since the configured epoch, 10 bits of machine
//! ID, 12 bits of per-millisecond sequence.

use chrono::Utc;
use parking_lot::Mutex;

/// Default epoch (2024-01-01T00:00:00.000Z)
pub const DEFAULT_EPOCH: u64 = 1_704_067_200_000;

const MACHINE_ID_BITS: u64 = 10;
const SEQUENCE_BITS: u64 = 12;
const MACHINE_ID_MASK: u64 = (1 << MACHINE_ID_BITS) - 1;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

struct GeneratorState {
    last_timestamp: u64,
    sequence: u64,
}

/// Snowflake ID generator
pub struct SnowflakeGenerator {
    machine_id: u64,
    epoch: u64,
    state: Mutex<GeneratorState>,
}

impl SnowflakeGenerator {
    /// Create a new snowflake generator
    pub fn new(machine_id: u16, epoch: u64) -> Self {
        Self {
            machine_id: u64::from(machine_id) & MACHINE_ID_MASK,
            epoch,
            state: Mutex::new(GeneratorState {
                last_timestamp: 0,
                sequence: 0,
            }),
        }
    }

    /// Generate a new snowflake ID
    pub fn generate(&self) -> i64 {
        let mut state = self.state.lock();

        // Never move backwards, even if the wall clock does.
        let mut timestamp = current_millis().max(state.last_timestamp);

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond; borrow the next one.
                timestamp += 1;
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        let id = (timestamp.saturating_sub(self.epoch) << (MACHINE_ID_BITS + SEQUENCE_BITS))
            | (self.machine_id << SEQUENCE_BITS)
            | state.sequence;

        id as i64
    }

    /// Generate a new ID rendered as a document key.
    pub fn generate_id(&self) -> String {
        self.generate().to_string()
    }
}

fn current_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
