//! Error types for project scaffolding

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for scaffolding operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that stop a scaffolding run
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Cannot create project without a name")]
    EmptyProjectName,

    #[error("Unknown project type '{0}'. Available types: Nodejs, React, Webpack")]
    UnknownArchetype(String),

    #[error("Failed to create project directory {}: {source}", .path.display())]
    CreateStructure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize {file}: {source}")]
    Serialize {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure of a single external command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{command}' exited with {status}")]
    ExitStatus { command: String, status: ExitStatus },

    /// For runners that don't spawn a process, or report failure some other way
    #[error("'{command}' failed: {message}")]
    Failed { command: String, message: String },
}
