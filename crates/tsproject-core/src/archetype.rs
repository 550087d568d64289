//! Project archetypes and project names

use crate::error::ScaffoldError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Kind of project to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Node,
    React,
    Webpack,
}

impl Archetype {
    /// All archetypes, in the order they are offered to the user
    pub const ALL: [Archetype; 3] = [Archetype::Node, Archetype::React, Archetype::Webpack];

    pub fn display_name(&self) -> &'static str {
        match self {
            Archetype::Node => "Nodejs",
            Archetype::React => "React",
            Archetype::Webpack => "Webpack",
        }
    }

    /// One-line hint shown next to the archetype in the selection prompt
    pub fn description(&self) -> &'static str {
        match self {
            Archetype::Node => "TypeScript on Node with ts-node",
            Archetype::React => "React app driven by react-scripts",
            Archetype::Webpack => "Browser bundle built with webpack and ts-loader",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Archetype {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nodejs" | "node" => Ok(Archetype::Node),
            "react" => Ok(Archetype::React),
            "webpack" => Ok(Archetype::Webpack),
            _ => Err(ScaffoldError::UnknownArchetype(s.to_string())),
        }
    }
}

/// Name of the project, used as the root directory name and page title
///
/// Only emptiness is checked. Names containing path separators or characters
/// the filesystem rejects are passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl AsRef<str>) -> Result<Self, ScaffoldError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ScaffoldError::EmptyProjectName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ProjectName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
