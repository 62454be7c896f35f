// Minimal named component demonstrating the library's validation and
// error-handling conventions: construction validates its arguments, and
// processing requires an explicit initialize() call.

use crate::text::{strings, validate};
use thiserror::Error;

/// Errors from [`Core`] construction and processing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Component name cannot be empty")]
    EmptyName,

    #[error("Component must be initialized before processing")]
    NotInitialized,
}

/// Named component with an explicit initialization lifecycle.
///
/// A `Core` is constructed by the caller and passed where needed; there is no
/// hidden process-wide instance. The name must contain at least one
/// non-whitespace character, both at construction and on rename.
#[derive(Debug, Clone)]
pub struct Core {
    name: String,
    initialized: bool,
}

impl Core {
    /// Create a new component with the given name.
    ///
    /// # Errors
    /// [`CoreError::EmptyName`] if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if validate::is_empty(&name) {
            return Err(CoreError::EmptyName);
        }

        Ok(Self {
            name,
            initialized: false,
        })
    }

    /// The component's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the component, with the same validation as construction.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CoreError> {
        let name = name.into();
        if validate::is_empty(&name) {
            return Err(CoreError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    /// Mark the component ready for processing. Idempotent.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return true;
        }

        tracing::debug!("Initializing component '{}'", self.name);
        self.initialized = true;
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Uppercase the input and tag it with the component name.
    ///
    /// # Errors
    /// [`CoreError::NotInitialized`] if [`initialize`](Self::initialize) has
    /// not been called.
    pub fn process(&self, input: &str) -> Result<String, CoreError> {
        if !self.initialized {
            return Err(CoreError::NotInitialized);
        }

        Ok(format!("[{}] {}", self.name, strings::to_upper(input)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_name() {
        assert_eq!(Core::new("").unwrap_err(), CoreError::EmptyName);
        assert_eq!(Core::new("   \t").unwrap_err(), CoreError::EmptyName);
    }

    #[test]
    fn test_set_name_rejects_empty_name() {
        let mut core = Core::new("engine").unwrap();
        assert_eq!(core.set_name("  ").unwrap_err(), CoreError::EmptyName);
        assert_eq!(core.name(), "engine");

        core.set_name("renamed").unwrap();
        assert_eq!(core.name(), "renamed");
    }

    #[test]
    fn test_process_requires_initialization() {
        let core = Core::new("engine").unwrap();
        assert_eq!(core.process("x").unwrap_err(), CoreError::NotInitialized);
    }

    #[test]
    fn test_process_after_initialize() {
        let mut core = Core::new("engine").unwrap();
        assert!(core.initialize());
        assert_eq!(core.process("hello").unwrap(), "[engine] HELLO");
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut core = Core::new("engine").unwrap();
        assert!(core.initialize());
        assert!(core.initialize());
        assert!(core.is_initialized());
    }
}
