// Usage metrics module
//
// Lightweight counters for what the user did during a session, logged on shutdown

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Session usage metrics
///
/// Uses atomic operations so it can be shared behind an `Arc` between GUI callbacks
/// without locking.
#[derive(Debug)]
pub struct Metrics {
    /// Join requests handled
    pub joins: AtomicU64,

    /// Pattern requests that produced a pattern
    pub patterns_built: AtomicU64,

    /// Pattern requests rejected before reaching the pattern builder
    pub patterns_rejected: AtomicU64,

    /// Pattern requests the pattern builder failed on
    pub pattern_errors: AtomicU64,

    /// Page switches
    pub page_views: AtomicU64,

    /// Session start time
    start_time: Instant,
}

impl Metrics {
    /// Create a new Metrics instance
    pub fn new() -> Self {
        Self {
            joins: AtomicU64::new(0),
            patterns_built: AtomicU64::new(0),
            patterns_rejected: AtomicU64::new(0),
            pattern_errors: AtomicU64::new(0),
            page_views: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_join(&self) {
        self.joins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pattern_built(&self) {
        self.patterns_built.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pattern_rejected(&self) {
        self.patterns_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pattern_error(&self) {
        self.pattern_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_page_view(&self) {
        self.page_views.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Total pattern requests, whatever their outcome
    pub fn pattern_requests(&self) -> u64 {
        self.patterns_built.load(Ordering::Relaxed)
            + self.patterns_rejected.load(Ordering::Relaxed)
            + self.pattern_errors.load(Ordering::Relaxed)
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Session Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Joins: {}, page views: {}",
            self.joins.load(Ordering::Relaxed),
            self.page_views.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Patterns: {} requested, {} built, {} rejected, {} errors",
            self.pattern_requests(),
            self.patterns_built.load(Ordering::Relaxed),
            self.patterns_rejected.load(Ordering::Relaxed),
            self.pattern_errors.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.joins.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.pattern_requests(), 0);
    }

    #[test]
    fn test_pattern_counters() {
        let metrics = Metrics::new();

        metrics.record_pattern_built();
        metrics.record_pattern_built();
        metrics.record_pattern_rejected();
        metrics.record_pattern_error();

        assert_eq!(metrics.patterns_built.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.patterns_rejected.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.pattern_errors.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.pattern_requests(), 4);
    }

    #[test]
    fn test_join_and_page_counters() {
        let metrics = Metrics::new();

        metrics.record_join();
        metrics.record_page_view();
        metrics.record_page_view();

        assert_eq!(metrics.joins.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.page_views.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_uptime() {
        let metrics = Metrics::new();
        thread::sleep(Duration::from_millis(10));
        assert!(metrics.uptime().as_millis() >= 10);
    }
}
