use crate::config::SharedConfig;
use crate::metrics::ProcessingMetrics;
use crate::models::{ProcessingMode, ProcessingResult};
use crate::text::strings;

/// Configuration key holding the maximum accepted batch size.
const BATCH_SIZE_KEY: &str = "processing.batch_size";

/// Default batch limit when the key is absent from configuration.
const DEFAULT_BATCH_SIZE: &str = "10";

/// Configuration-driven item and batch transformer.
///
/// Applies one of three fixed transforms per item (see
/// [`ProcessingMode`]) and enforces a batch-size limit read from the shared
/// configuration store under `processing.batch_size`. All operation-level
/// failures come back as a [`ProcessingResult`] with a message; nothing here
/// panics on bad input or bad configuration.
///
/// Several processors may share one [`SharedConfig`]; the handle is
/// single-threaded and writes require external coordination if the store is
/// ever shared more widely.
pub struct DataProcessor {
    config: SharedConfig,
    metrics: ProcessingMetrics,
}

impl DataProcessor {
    /// Create a processor bound to a shared configuration store.
    pub fn new(config: SharedConfig) -> Self {
        Self {
            config,
            metrics: ProcessingMetrics::new(),
        }
    }

    /// Transform a single input according to `mode`.
    ///
    /// An empty input is a hard per-item failure. Note the asymmetry with
    /// [`process_batch`](Self::process_batch), which silently skips empty
    /// items; both behaviors are part of the compatibility contract.
    pub fn process_item(&self, input: &str, mode: ProcessingMode) -> ProcessingResult {
        if input.is_empty() {
            self.metrics.record_failure();
            return ProcessingResult::fail("Input cannot be empty");
        }

        let output = apply_processing(input, mode);
        self.metrics.record_success(1);
        tracing::debug!("Processed item in {} mode", mode);
        ProcessingResult::ok(output, 1)
    }

    /// Transform a batch of inputs according to `mode`.
    ///
    /// The batch is rejected outright, with no item processed, when it is
    /// larger than the configured `processing.batch_size` limit (default 10).
    /// A non-numeric configured limit is reported as a processing failure.
    /// Empty inputs within an accepted batch are skipped; the result carries
    /// the transformed items joined with `", "` and the count of items
    /// actually transformed.
    pub fn process_batch(&self, inputs: &[String], mode: ProcessingMode) -> ProcessingResult {
        let configured = self
            .config
            .borrow()
            .get_or(BATCH_SIZE_KEY, DEFAULT_BATCH_SIZE)
            .to_owned();

        let limit: usize = match configured.parse() {
            Ok(limit) => limit,
            Err(_) => {
                self.metrics.record_failure();
                tracing::warn!("Invalid {} value: {:?}", BATCH_SIZE_KEY, configured);
                return ProcessingResult::fail(format!(
                    "Invalid batch size in configuration: {:?}",
                    configured
                ));
            }
        };

        if inputs.len() > limit {
            self.metrics.record_failure();
            return ProcessingResult::fail(format!(
                "Batch size exceeds configured limit of {}",
                limit
            ));
        }

        let processed: Vec<String> = inputs
            .iter()
            .filter(|input| !input.is_empty())
            .map(|input| apply_processing(input, mode))
            .collect();

        let count = processed.len();
        self.metrics.record_success(count);
        tracing::debug!("Processed batch of {} items in {} mode", count, mode);
        ProcessingResult::ok(strings::join(&processed, ", "), count)
    }

    /// Write a configuration value under the `processing.` prefix.
    pub fn set_processing_config(&self, key: &str, value: &str) {
        self.config
            .borrow_mut()
            .set(format!("processing.{}", key), value);
    }

    /// Formatted summary of the operation counters.
    pub fn statistics(&self) -> String {
        self.metrics.summary()
    }

    /// Reset the operation counters to zero.
    pub fn reset_statistics(&self) {
        self.metrics.reset();
    }

    /// Direct access to the underlying counters.
    pub fn metrics(&self) -> &ProcessingMetrics {
        &self.metrics
    }
}

/// Apply the mode-specific transform to a single non-empty input.
fn apply_processing(input: &str, mode: ProcessingMode) -> String {
    match mode {
        ProcessingMode::Simple => format!("[SIMPLE] {}", strings::to_upper(input)),
        ProcessingMode::Advanced => {
            let reversed: String = input.chars().rev().collect();
            format!("[ADVANCED] {}", strings::to_lower(&reversed))
        }
        ProcessingMode::Batch => {
            let trimmed = input.trim_matches([' ', '\t', '\n', '\r']);
            format!("[BATCH] {}", trimmed)
        }
    }
}
