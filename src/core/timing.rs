//! Delays used to make the assistant feel like it is typing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub welcome_delay_ms: u64,
    pub typing_base_ms: u64,
    pub typing_jitter_ms: u64,
    pub quick_action_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            welcome_delay_ms: 300,
            typing_base_ms: 1500,
            typing_jitter_ms: 1000,
            quick_action_delay_ms: 1000,
        }
    }
}

impl TimingConfig {
    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }

    pub fn quick_action_delay(&self) -> Duration {
        Duration::from_millis(self.quick_action_delay_ms)
    }

    /// Base delay plus a jitter sample in `[0, typing_jitter_ms]`.
    pub fn typing_delay(&self, jitter: &mut dyn Jitter) -> Duration {
        let extra = jitter.sample(Duration::from_millis(self.typing_jitter_ms));
        Duration::from_millis(self.typing_base_ms).saturating_add(extra)
    }
}

pub trait Jitter: Send {
    /// Returns a duration in `[0, max]`.
    fn sample(&mut self, max: Duration) -> Duration;
}

/// Jitter drawn from the operating system's random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsJitter;

impl Jitter for OsJitter {
    fn sample(&mut self, max: Duration) -> Duration {
        let max_ms = max.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        let mut buf = [0u8; 8];
        if let Err(err) = getrandom::fill(&mut buf) {
            tracing::debug!("random source unavailable, typing jitter disabled: {err}");
            return Duration::ZERO;
        }
        let raw = u64::from_le_bytes(buf);
        let sample = match max_ms.checked_add(1) {
            Some(span) => raw % span,
            None => raw,
        };
        Duration::from_millis(sample)
    }
}

/// Always returns the same fraction of the allowed range.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub Duration);

impl Jitter for FixedJitter {
    fn sample(&mut self, max: Duration) -> Duration {
        self.0.min(max)
    }
}
