//! Static dependency table for each archetype

use crate::archetype::Archetype;

/// Packages installed for every project, in install order
pub const BASE_DEPENDENCIES: &[&str] = &[
    "typescript",
    "typesync",
    "@typescript-eslint/parser",
    "@typescript-eslint/eslint-plugin",
    "prettier",
    "jest",
    "eslint",
];

const NODE_DEPENDENCIES: &[&str] = &["ts-node"];

// react and react-dom ride along with the dev install instead of a second
// runtime install; react-scripts bundles them either way.
const REACT_DEPENDENCIES: &[&str] = &[
    "react",
    "react-dom",
    "react-scripts",
    "@testing-library/react",
    "@testing-library/jest-dom",
    "@testing-library/user-event",
    "eslint-config-react-app",
];

const WEBPACK_DEPENDENCIES: &[&str] = &[
    "webpack",
    "webpack-cli",
    "webpack-dev-server",
    "concurrently",
    "html-webpack-plugin",
    "html-webpack-tags-plugin",
    "ts-loader",
];

/// Packages specific to one archetype, appended after the base list
pub fn archetype_dependencies(archetype: Archetype) -> &'static [&'static str] {
    match archetype {
        Archetype::Node => NODE_DEPENDENCIES,
        Archetype::React => REACT_DEPENDENCIES,
        Archetype::Webpack => WEBPACK_DEPENDENCIES,
    }
}

/// Full list of dev dependencies to install for an archetype
pub fn resolve_dependencies(archetype: Archetype) -> Vec<&'static str> {
    BASE_DEPENDENCIES
        .iter()
        .chain(archetype_dependencies(archetype))
        .copied()
        .collect()
}
