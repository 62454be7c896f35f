use crate::core::CoreError;
use crate::text::validate;

/// Named transformation stage for building small processing chains.
///
/// Each stage reverses its input and tags it with the stage name; feeding one
/// stage's output into the next illustrates how components compose. The stage
/// keeps a count of how many inputs it has seen.
#[derive(Debug, Clone)]
pub struct PipelineModule {
    name: String,
    process_count: u64,
}

impl PipelineModule {
    /// Create a stage with the given name.
    ///
    /// # Errors
    /// [`CoreError::EmptyName`] if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if validate::is_empty(&name) {
            return Err(CoreError::EmptyName);
        }

        tracing::debug!("Created pipeline module '{}'", name);
        Ok(Self {
            name,
            process_count: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of inputs this stage has processed.
    pub fn process_count(&self) -> u64 {
        self.process_count
    }

    /// Reverse the input and tag it with the stage name.
    pub fn process_data(&mut self, input: &str) -> String {
        self.process_count += 1;
        tracing::debug!("Module '{}' processing: {}", self.name, input);

        let reversed: String = input.chars().rev().collect();
        format!("[{}] Processed: {}", self.name, reversed)
    }

    /// Human-readable statistics lines for this stage.
    pub fn statistics(&self) -> Vec<String> {
        vec![
            format!("Module Name: {}", self.name),
            format!("Process Count: {}", self.process_count),
            format!("Library Version: {}", crate::VERSION),
        ]
    }
}
