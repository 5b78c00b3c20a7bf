//! Error types for the tinycheck harness.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur while registering test cases and modules.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A case with the same name already exists in the enclosing scope
    #[error("Duplicate test case '{name}' in scope '{scope}'")]
    DuplicateCase { scope: String, name: String },

    /// A group with the same name already exists in the module
    #[error("Duplicate test group '{name}' in module '{module}'")]
    DuplicateGroup { module: String, name: String },

    /// A module with the same name is already registered
    #[error("Duplicate module '{0}'")]
    DuplicateModule(String),

    /// Generic registry error with context
    #[error("Registry error: {0}")]
    Other(String),
}

/// Errors that can occur during fixture resolution.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A test case declared a fixture no provider is registered for
    #[error("Unknown fixture '{0}'")]
    Unknown(String),

    /// A provider with the same name is already registered
    #[error("Duplicate fixture '{0}'")]
    Duplicate(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with FixtureError
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
