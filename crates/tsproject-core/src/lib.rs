//! tsproject-core - scaffolding for TypeScript projects
//!
//! Given a project name and an [`Archetype`] (plain Node, React, or a webpack
//! bundle), this library creates the project directory, installs the
//! TypeScript toolchain with npm, writes lint/format/compiler configuration
//! and starter sources, registers npm scripts, and initializes git.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Generators** - Pure functions producing dependency lists, config files, and templates
//! - **Layer 2: Assembly** - `ProjectBuilder` sequences file writes and external commands
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use tsproject_core::{Archetype, BuildOptions, ProjectBuilder, ProjectName, SystemRunner};
//!
//! let name = ProjectName::new("demo")?;
//! let builder = ProjectBuilder::new(SystemRunner::new(), BuildOptions::default());
//! let report = builder.build(&name, Archetype::Webpack).await?;
//! for failure in report.failures() {
//!     eprintln!("{}: {:?}", failure.action, failure.status);
//! }
//! ```

pub mod archetype;
pub mod builder;
pub mod config;
pub mod dependencies;
pub mod error;
pub mod report;
pub mod runtime;
pub mod scripts;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use archetype::{Archetype, ProjectName};
pub use builder::{BuildOptions, ProgressEvent, ProjectBuilder};
pub use config::ConfigBundle;
pub use dependencies::resolve_dependencies;
pub use error::{CommandError, ScaffoldError, ScaffoldResult};
pub use report::{ActionOutcome, ActionStatus, RunReport, Step};
pub use runtime::{CommandRunner, ProcessCommand, ScriptStrategy, SystemRunner, Toolchain};
pub use templates::TemplateBundle;

#[cfg(feature = "tui")]
pub use tui::run;
