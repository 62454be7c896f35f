// Processing metrics module
//
// Provides lightweight counters for monitoring processing outcomes

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for processing operations.
///
/// Uses atomic operations so a processor can record outcomes through a shared
/// reference. All counters increase monotonically until
/// [`reset`](Self::reset) is called.
#[derive(Debug, Default)]
pub struct ProcessingMetrics {
    /// Total number of items transformed across all operations
    pub items_processed: AtomicUsize,

    /// Number of operations that succeeded
    pub successful_operations: AtomicUsize,

    /// Number of operations that failed
    pub failed_operations: AtomicUsize,
}

impl ProcessingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful operation that transformed `items` inputs.
    pub fn record_success(&self, items: usize) {
        self.successful_operations.fetch_add(1, Ordering::Relaxed);
        self.items_processed.fetch_add(items, Ordering::Relaxed);
    }

    /// Record a failed operation.
    pub fn record_failure(&self) {
        self.failed_operations.fetch_add(1, Ordering::Relaxed);
    }

    /// Success rate over all completed operations, as a percentage.
    ///
    /// `None` until at least one operation has completed.
    pub fn success_rate(&self) -> Option<f64> {
        let succeeded = self.successful_operations.load(Ordering::Relaxed);
        let failed = self.failed_operations.load(Ordering::Relaxed);
        let total = succeeded + failed;
        if total > 0 {
            Some(succeeded as f64 / total as f64 * 100.0)
        } else {
            None
        }
    }

    /// Formatted multi-line summary of the counters.
    ///
    /// Reports "N/A" for the success rate when no operations have completed,
    /// rather than dividing by zero.
    pub fn summary(&self) -> String {
        let rate = match self.success_rate() {
            Some(rate) => format!("{}%", rate),
            None => "N/A".to_string(),
        };

        format!(
            "Processing Statistics:\n  Total Processed: {}\n  Successful Operations: {}\n  Failed Operations: {}\n  Success Rate: {}",
            self.items_processed.load(Ordering::Relaxed),
            self.successful_operations.load(Ordering::Relaxed),
            self.failed_operations.load(Ordering::Relaxed),
            rate
        )
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.items_processed.store(0, Ordering::Relaxed);
        self.successful_operations.store(0, Ordering::Relaxed);
        self.failed_operations.store(0, Ordering::Relaxed);
    }

    /// Log a summary of the counters.
    pub fn log_summary(&self) {
        tracing::info!(
            "Processing metrics: {} items, {} succeeded, {} failed",
            self.items_processed.load(Ordering::Relaxed),
            self.successful_operations.load(Ordering::Relaxed),
            self.failed_operations.load(Ordering::Relaxed)
        );
    }
}
