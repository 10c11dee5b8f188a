use std::time::Duration;

use rand::Rng;

use crate::domain::{common::RecognitionConfig, recognition::ports::ModelLatency};

/// Sleeps for `base + U(0, 1) * jitter` before each recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedModelLatency {
    base: Duration,
    jitter: Duration,
}

impl SimulatedModelLatency {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.jitter.is_zero() {
            return self.base;
        }
        self.base + self.jitter.mul_f64(rng.gen_range(0.0..1.0))
    }
}

impl From<&RecognitionConfig> for SimulatedModelLatency {
    fn from(config: &RecognitionConfig) -> Self {
        Self::new(
            Duration::from_millis(config.latency_base_ms),
            Duration::from_millis(config.latency_jitter_ms),
        )
    }
}

impl ModelLatency for SimulatedModelLatency {
    async fn wait(&self) {
        let delay = self.next_delay(&mut rand::thread_rng());
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
