//! Source and markup files written into new projects
//!
//! This module provides:
//! - The HTML shell shared by the React and Webpack archetypes
//! - React entry point and root component sources
//! - The fixed webpack configuration
//! - Static files every project gets (stylesheet, placeholder source, ignore list)

pub mod html;
pub mod react;
pub mod webpack;

use crate::archetype::{Archetype, ProjectName};

pub use html::{html_shell, TEMPLATE_MARKER};
pub use react::{react_files, ReactFiles, ROOT_ELEMENT_ID};
pub use webpack::webpack_config;

/// CSS reset written to `src/index.css`
pub const STYLESHEET: &str = "\
*,
*::before,
*::after {
  padding: 0;
  margin: 0;
  outline: none;
  border: none;
  box-sizing: border-box;
}
";

/// Contents of `src/index.ts` for archetypes without a framework entry point
pub const PLACEHOLDER_SOURCE: &str = "// Hello, World!\n";

/// Contents of `.gitignore`
pub const GITIGNORE: &str = "\
node_modules
build
dist
.env
";

/// Archetype-specific source files for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateBundle {
    Node { index: String },
    React(ReactFiles),
    Webpack { config: String, html: String, index: String },
}

impl TemplateBundle {
    pub fn generate(name: &ProjectName, archetype: Archetype) -> Self {
        match archetype {
            Archetype::Node => TemplateBundle::Node {
                index: PLACEHOLDER_SOURCE.to_string(),
            },
            Archetype::React => TemplateBundle::React(react_files(name.as_str())),
            Archetype::Webpack => TemplateBundle::Webpack {
                config: webpack_config(),
                html: html_shell(name.as_str()),
                // webpack's entry is ./src/index.ts, so it needs a file to start from
                index: PLACEHOLDER_SOURCE.to_string(),
            },
        }
    }

    /// Directories to create (relative to the project root) before writing files
    pub fn directories(&self) -> &'static [&'static str] {
        match self {
            TemplateBundle::React(_) => &["src/components"],
            TemplateBundle::Node { .. } | TemplateBundle::Webpack { .. } => &[],
        }
    }

    /// `(relative path, contents)` pairs in write order
    pub fn files(&self) -> Vec<(&'static str, &str)> {
        match self {
            TemplateBundle::Node { index } => vec![("src/index.ts", index.as_str())],
            TemplateBundle::React(files) => vec![
                ("public/index.html", files.html.as_str()),
                ("src/components/App.tsx", files.app.as_str()),
                ("src/index.tsx", files.index.as_str()),
            ],
            TemplateBundle::Webpack {
                config,
                html,
                index,
            } => vec![
                ("webpack.config.js", config.as_str()),
                ("src/index.html", html.as_str()),
                ("src/index.ts", index.as_str()),
            ],
        }
    }
}
