//! `.eslintrc` generation

use super::{to_json, ESLINT_FILE};
use crate::archetype::Archetype;
use crate::error::ScaffoldResult;
use serde::Serialize;

const BASE_EXTENDS: &[&str] = &["eslint:recommended", "plugin:@typescript-eslint/recommended"];
const REACT_EXTENDS: &[&str] = &["react-app", "react-app/jest"];

#[derive(Debug, Serialize)]
struct EslintConfig {
    root: bool,
    parser: &'static str,
    plugins: Vec<&'static str>,
    extends: Vec<&'static str>,
}

/// Generate `.eslintrc` for an archetype
pub fn eslint_config(archetype: Archetype) -> ScaffoldResult<String> {
    let mut extends = BASE_EXTENDS.to_vec();
    match archetype {
        Archetype::React => extends.extend_from_slice(REACT_EXTENDS),
        Archetype::Node | Archetype::Webpack => {}
    }

    let config = EslintConfig {
        root: true,
        parser: "@typescript-eslint/parser",
        plugins: vec!["@typescript-eslint"],
        extends,
    };

    to_json(ESLINT_FILE, &config)
}
