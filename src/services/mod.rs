//! Services module - business logic for text processing operations.
//!
//! The services are **framework-agnostic** and have no dependencies on the
//! demo binary, making them testable and reusable.
//!
//! # Components
//!
//! - [`DataProcessor`]: configuration-driven item and batch transformer.
//!   Reads its batch limit from the shared [`ConfigStore`](crate::ConfigStore)
//!   and tracks success/failure counters via
//!   [`ProcessingMetrics`](crate::ProcessingMetrics).
//!
//! - [`PipelineModule`]: named transformation stage whose output can be fed
//!   into the next stage, illustrating how several components chain.
//!
//! # Design Philosophy
//!
//! - **Synchronous**: single-threaded blocking calls, no background tasks
//! - **Explicit ownership**: dependencies are injected through constructors,
//!   never reached through global state
//! - **Recoverable failures as values**: operations report failures in a
//!   [`ProcessingResult`](crate::ProcessingResult) rather than panicking;
//!   only constructor argument validation returns a hard error
//!
//! # Usage Example
//!
//! ```
//! use textkit::{ConfigStore, DataProcessor, ProcessingMode};
//!
//! let config = ConfigStore::new_shared();
//! let processor = DataProcessor::new(config);
//!
//! let result = processor.process_item("hello", ProcessingMode::Simple);
//! assert!(result.success);
//! assert_eq!(result.output, "[SIMPLE] HELLO");
//! ```

pub mod pipeline;
pub mod processor;

pub use pipeline::PipelineModule;
pub use processor::DataProcessor;
