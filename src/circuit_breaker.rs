//! # Circuit Breaker Module
//!
//! Failure-count circuit breaker guarding calls to the spell-correction
//! service. After a run of failures the breaker opens and callers skip the
//! service until the reset window elapses, instead of stalling every
//! message on a dead endpoint.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Breaker thresholds.
#[derive(Debug, Clone)]
pub struct BreakerConfig {
    /// Consecutive failures before the breaker opens.
    pub failure_threshold: u32,
    /// How long the breaker stays open before allowing another attempt.
    pub reset_after: Duration,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            reset_after: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Default)]
struct BreakerState {
    failures: u32,
    last_failure: Option<Instant>,
}

#[derive(Debug)]
pub struct CircuitBreaker {
    state: Mutex<BreakerState>,
    config: BreakerConfig,
}

impl CircuitBreaker {
    pub fn new(config: BreakerConfig) -> Self {
        Self {
            state: Mutex::new(BreakerState::default()),
            config,
        }
    }

    /// Whether requests should currently be skipped.
    ///
    /// Automatically closes again once the reset window has elapsed.
    pub fn is_open(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.failures < self.config.failure_threshold {
            return false;
        }
        match state.last_failure {
            Some(at) if at.elapsed() < self.config.reset_after => true,
            _ => {
                state.failures = 0;
                state.last_failure = None;
                false
            }
        }
    }

    pub fn record_failure(&self) {
        let mut state = self.state.lock().unwrap();
        state.failures += 1;
        state.last_failure = Some(Instant::now());
    }

    pub fn record_success(&self) {
        let mut state = self.state.lock().unwrap();
        state.failures = 0;
        state.last_failure = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaker_opens_after_threshold() {
        let breaker = CircuitBreaker::new(BreakerConfig {
            failure_threshold: 3,
            reset_after: Duration::from_secs(60),
        });

        assert!(!breaker.is_open());
        breaker.record_failure();
        breaker.record_failure();
        assert!(!breaker.is_open());
        breaker.record_failure();
        assert!(breaker.is_open());
    }

    #[test]
    fn test_success_resets_failures() {
        let breaker = CircuitBreaker::new(BreakerConfig {
            failure_threshold: 2,
            reset_after: Duration::from_secs(60),
        });

        breaker.record_failure();
        breaker.record_success();
        breaker.record_failure();
        assert!(!breaker.is_open());
    }

    #[test]
    fn test_breaker_closes_after_reset_window() {
        let breaker = CircuitBreaker::new(BreakerConfig {
            failure_threshold: 1,
            reset_after: Duration::from_millis(0),
        });

        breaker.record_failure();
        // Zero reset window: the breaker closes again immediately.
        assert!(!breaker.is_open());
    }
}
