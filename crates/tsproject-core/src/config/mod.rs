//! Lint, format, and compiler configuration files
//!
//! Each generator is a pure function of the archetype. Output is JSON with
//! keys in declaration order and single-space indentation, so the same
//! archetype always produces byte-identical text.

pub mod eslint;
pub mod prettier;
pub mod typescript;

use crate::archetype::Archetype;
use crate::error::{ScaffoldError, ScaffoldResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

pub use eslint::eslint_config;
pub use prettier::prettier_config;
pub use typescript::{typescript_config, ModuleFormat};

pub const ESLINT_FILE: &str = ".eslintrc";
pub const PRETTIER_FILE: &str = ".prettierrc";
pub const TYPESCRIPT_FILE: &str = "tsconfig.json";

/// Serialized configuration files for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBundle {
    pub eslint: String,
    pub prettier: String,
    pub typescript: String,
}

impl ConfigBundle {
    pub fn generate(archetype: Archetype) -> ScaffoldResult<Self> {
        Ok(Self {
            eslint: eslint_config(archetype)?,
            prettier: prettier_config()?,
            typescript: typescript_config(archetype)?,
        })
    }

    /// `(file name, contents)` pairs, relative to the project root
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (ESLINT_FILE, self.eslint.as_str()),
            (PRETTIER_FILE, self.prettier.as_str()),
            (TYPESCRIPT_FILE, self.typescript.as_str()),
        ]
    }
}

/// Serialize a config value the way the generated projects expect to read it
pub(crate) fn to_json<T: Serialize>(file: &'static str, value: &T) -> ScaffoldResult<String> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b" "));
    value
        .serialize(&mut serializer)
        .map_err(|source| ScaffoldError::Serialize { file, source })?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
