//! Error types for the QuantLab extension layer.

use std::fmt;

/// The main error type for extension-layer operations.
#[derive(Debug)]
pub enum LabError {
    /// Command-table related error.
    Command(CommandError),
    /// A delegated operation failed while executing.
    Execution(String),
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(err) => write!(f, "Command error: {err}"),
            Self::Execution(msg) => write!(f, "Execution failed: {msg}"),
        }
    }
}

impl std::error::Error for LabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Command(err) => Some(err),
            Self::Execution(_) => None,
        }
    }
}

/// Command-table specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command identifier has no registered entry.
    NotRegistered(&'static str),
    /// The command identifier already has a registered entry.
    AlreadyRegistered(&'static str),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRegistered(id) => write!(f, "No command registered for '{id}'"),
            Self::AlreadyRegistered(id) => {
                write!(f, "A command is already registered for '{id}'")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<CommandError> for LabError {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

/// A specialized Result type for extension-layer operations.
pub type Result<T> = std::result::Result<T, LabError>;
