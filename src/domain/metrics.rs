use serde::Serialize;
use std::time::{Duration, Instant};

/// Per-algorithm operation counter and wall-clock timer.
///
/// Each algorithm owns its own instance; there is no shared state. The
/// timer keeps the last start/stop pair; reading elapsed time while the
/// timer is running returns the time since `start_timer`.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    operations: u64,
    started_at: Option<Instant>,
    elapsed: Duration,
    running: bool,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_timer(&mut self) {
        self.started_at = Some(Instant::now());
        self.running = true;
    }

    /// No-op when the timer is not running.
    pub fn stop_timer(&mut self) {
        if self.running {
            if let Some(started_at) = self.started_at {
                self.elapsed = started_at.elapsed();
            }
            self.running = false;
        }
    }

    pub fn increment_operations(&mut self) {
        self.operations += 1;
    }

    pub fn increment_operations_by(&mut self, count: u64) {
        self.operations += count;
    }

    pub fn operations_count(&self) -> u64 {
        self.operations
    }

    pub fn execution_time_ns(&self) -> u128 {
        if self.running {
            self.started_at
                .map(|started_at| started_at.elapsed().as_nanos())
                .unwrap_or(0)
        } else {
            self.elapsed.as_nanos()
        }
    }

    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_ns() as f64 / 1_000_000.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            operations: self.operations,
            elapsed_ms: self.execution_time_ms(),
        }
    }
}

/// Point-in-time copy of a `Metrics` instance, serialized into events
/// and kept in the analysis report.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MetricsSnapshot {
    pub operations: u64,
    pub elapsed_ms: f64,
}
