use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct PlateLensConfig {
    pub recognition: RecognitionConfig,
}

#[derive(Clone, Debug)]
pub struct RecognitionConfig {
    /// Fixed part of the simulated model latency, in milliseconds.
    pub latency_base_ms: u64,
    /// Upper bound of the uniformly drawn extra latency, in milliseconds.
    pub latency_jitter_ms: u64,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            latency_base_ms: 2000,
            latency_jitter_ms: 2000,
        }
    }
}

impl RecognitionConfig {
    pub fn without_latency() -> Self {
        Self {
            latency_base_ms: 0,
            latency_jitter_ms: 0,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
