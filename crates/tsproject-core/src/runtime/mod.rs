//! External process plumbing and environment detection
//!
//! This module provides:
//! - `ProcessCommand` and the `CommandRunner` seam used by the project builder
//! - npm / npx / git command construction
//! - Tool detection for Node.js, npm, and git

pub mod check;
pub mod command;
pub mod npm;

pub use check::{check_git, check_node, check_npm, check_runtimes, RuntimeInfo};
pub use command::{CommandRunner, ProcessCommand, SystemRunner};
pub use npm::{ScriptStrategy, Toolchain};
