//! Per-action results of a build

use crate::archetype::Archetype;
use std::fmt;
use std::path::{Path, PathBuf};

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateStructure,
    InitManifest,
    InstallDependencies,
    WriteConfig,
    WriteSources,
    SyncTypes,
    RegisterScripts,
    InitVersionControl,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::CreateStructure,
        Step::InitManifest,
        Step::InstallDependencies,
        Step::WriteConfig,
        Step::WriteSources,
        Step::SyncTypes,
        Step::RegisterScripts,
        Step::InitVersionControl,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Step::CreateStructure => "Creating project structure",
            Step::InitManifest => "Initializing npm",
            Step::InstallDependencies => "Installing dependencies",
            Step::WriteConfig => "Creating config files",
            Step::WriteSources => "Creating source files",
            Step::SyncTypes => "Fetching type declarations",
            Step::RegisterScripts => "Setting npm scripts",
            Step::InitVersionControl => "Setting up git",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStatus {
    Succeeded,
    Failed(String),
    Skipped(String),
}

/// One command run, file written, or directory created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub step: Step,
    /// Command line or project-relative path
    pub action: String,
    pub status: ActionStatus,
}

impl ActionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, ActionStatus::Failed(_))
    }
}

/// Everything that happened while building one project
#[derive(Debug, Clone)]
pub struct RunReport {
    root: PathBuf,
    archetype: Archetype,
    outcomes: Vec<ActionOutcome>,
    files_written: Vec<PathBuf>,
}

impl RunReport {
    pub(crate) fn new(root: PathBuf, archetype: Archetype) -> Self {
        Self {
            root,
            archetype,
            outcomes: Vec::new(),
            files_written: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, outcome: ActionOutcome) {
        self.outcomes.push(outcome);
    }

    pub(crate) fn record_file(&mut self, relative: &str) {
        self.files_written.push(PathBuf::from(relative));
    }

    /// Directory the project was created in
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn outcomes(&self) -> &[ActionOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ActionStatus::Skipped(_)))
    }

    /// Files written, relative to the project root
    pub fn files_written(&self) -> &[PathBuf] {
        &self.files_written
    }

    /// True when no action failed
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}
