//! npm task shortcuts registered in `package.json`

use crate::archetype::Archetype;

const COMMON_SCRIPTS: &[(&str, &str)] = &[
    ("get-types", "typesync && npm i"),
    ("format", "prettier --config .prettierrc 'src/**/*.ts' --write"),
    ("lint", "eslint src --ext .ts --fix"),
    ("test", "jest --watch"),
];

const NODE_SCRIPTS: &[(&str, &str)] = &[
    ("build", "tsc"),
    ("watch", "tsc --watch"),
    ("start", "ts-node src/index.ts"),
];

const REACT_SCRIPTS: &[(&str, &str)] = &[
    ("start", "BROWSER=none react-scripts start"),
    ("build", "react-scripts build"),
    ("test", "react-scripts test"),
    ("eject", "react-scripts eject"),
];

const WEBPACK_SCRIPTS: &[(&str, &str)] = &[
    ("build", "webpack --watch"),
    ("dev", "concurrently 'npm run build' 'webpack serve --live-reload'"),
];

/// Scripts to register, in order; a later entry with the same name wins
pub fn npm_scripts(archetype: Archetype) -> Vec<(&'static str, &'static str)> {
    let specific = match archetype {
        Archetype::Node => NODE_SCRIPTS,
        Archetype::React => REACT_SCRIPTS,
        Archetype::Webpack => WEBPACK_SCRIPTS,
    };
    COMMON_SCRIPTS.iter().chain(specific).copied().collect()
}

/// Script the user runs to start working, if the archetype has one
pub fn start_script(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Node | Archetype::React => "start",
        Archetype::Webpack => "dev",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(archetype: Archetype) -> Vec<&'static str> {
        npm_scripts(archetype).into_iter().map(|(n, _)| n).collect()
    }

    #[test]
    fn test_common_scripts_first() {
        for archetype in Archetype::ALL {
            assert_eq!(&names(archetype)[..4], &["get-types", "format", "lint", "test"]);
        }
    }

    #[test]
    fn test_archetype_scripts() {
        assert_eq!(&names(Archetype::Node)[4..], &["build", "watch", "start"]);
        assert_eq!(&names(Archetype::React)[4..], &["start", "build", "test", "eject"]);
        assert_eq!(&names(Archetype::Webpack)[4..], &["build", "dev"]);
    }

    #[test]
    fn test_react_overrides_test_runner() {
        let scripts = npm_scripts(Archetype::React);
        let last_test = scripts.iter().rev().find(|(n, _)| *n == "test").unwrap();
        assert_eq!(last_test.1, "react-scripts test");
    }

    #[test]
    fn test_start_script_is_registered() {
        for archetype in Archetype::ALL {
            assert!(names(archetype).contains(&start_script(archetype)));
        }
    }
}
