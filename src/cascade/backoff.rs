//! Retry bound and full-jitter exponential backoff.

use std::time::Duration;

use rand::Rng;

/// Configuration for the per-provider delivery loop.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts per provider, including the first.
    pub max_attempts: u32,
    /// Base delay; retry `i` (0-indexed) waits `base * 2^i` plus jitter.
    pub base_delay: Duration,
    /// Exclusive upper bound of the uniform jitter added to every wait.
    pub jitter_max: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(1000),
            jitter_max: Duration::from_millis(1000),
        }
    }
}

impl RetryConfig {
    /// Backoff before retry `attempt` (0-indexed).
    ///
    /// Exponential growth plus uniform jitter, so concurrent callers do not
    /// retry in lockstep.
    pub(crate) fn backoff(&self, attempt: u32) -> Duration {
        let base = self.base_delay.as_millis() as u64;
        let exp = base.saturating_mul(1u64 << attempt.min(32));

        let jitter_cap = self.jitter_max.as_millis() as u64;
        let jitter = if jitter_cap == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..jitter_cap)
        };

        Duration::from_millis(exp.saturating_add(jitter))
    }
}
