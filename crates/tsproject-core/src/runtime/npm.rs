//! npm, npx, and git command construction

use super::command::ProcessCommand;
use semver::Version;
use std::env;

/// Environment variable overriding the npm executable
pub const NPM_ENV: &str = "CREATE_TS_PROJECT_NPM";
/// Environment variable overriding the npx executable
pub const NPX_ENV: &str = "CREATE_TS_PROJECT_NPX";
/// Environment variable overriding the git executable
pub const GIT_ENV: &str = "CREATE_TS_PROJECT_GIT";

/// First npm release with `npm pkg set`
const PKG_SET_SINCE: Version = Version::new(7, 24, 0);

/// How task shortcuts are written into `package.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptStrategy {
    /// `npm set-script <name> <body>` (removed in npm 9)
    SetScript,
    /// `npm pkg set scripts.<name>=<body>`
    #[default]
    PkgSet,
}

impl ScriptStrategy {
    /// Pick the strategy for an `npm --version` string
    ///
    /// Versions that don't parse get `PkgSet`, which every supported npm has.
    pub fn for_npm_version(version: &str) -> Self {
        match parse_version(version) {
            Some(v) if v < PKG_SET_SINCE => ScriptStrategy::SetScript,
            _ => ScriptStrategy::PkgSet,
        }
    }
}

/// Parse version string, tolerating a leading 'v' and surrounding whitespace
pub fn parse_version(version_str: &str) -> Option<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).ok()
}

fn platform_program(name: &str) -> String {
    if cfg!(windows) && name != "git" {
        format!("{}.cmd", name)
    } else {
        name.to_string()
    }
}

/// Executable names for the external tools a build invokes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub npm: String,
    pub npx: String,
    pub git: String,
    pub scripts: ScriptStrategy,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            npm: platform_program("npm"),
            npx: platform_program("npx"),
            git: platform_program("git"),
            scripts: ScriptStrategy::default(),
        }
    }
}

impl Toolchain {
    /// Defaults, with program names overridden from the environment when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Toolchain::from_env`], reading variables through `lookup`
    ///
    /// Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str, fallback: String| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback)
        };
        Self {
            npm: var(NPM_ENV, defaults.npm),
            npx: var(NPX_ENV, defaults.npx),
            git: var(GIT_ENV, defaults.git),
            scripts: defaults.scripts,
        }
    }

    pub fn with_scripts(mut self, scripts: ScriptStrategy) -> Self {
        self.scripts = scripts;
        self
    }

    /// `npm init -y`
    pub fn npm_init(&self) -> ProcessCommand {
        ProcessCommand::new(&self.npm).args(["init", "-y"])
    }

    /// `npm i -D <packages...>`
    pub fn npm_install_dev(&self, packages: &[&str]) -> ProcessCommand {
        ProcessCommand::new(&self.npm)
            .args(["i", "-D"])
            .args(packages.iter().copied())
    }

    /// `npm i`
    pub fn npm_install(&self) -> ProcessCommand {
        ProcessCommand::new(&self.npm).arg("i")
    }

    /// `npx typesync`
    pub fn typesync(&self) -> ProcessCommand {
        ProcessCommand::new(&self.npx).arg("typesync")
    }

    /// Register a `package.json` script
    pub fn set_script(&self, name: &str, body: &str) -> ProcessCommand {
        match self.scripts {
            ScriptStrategy::SetScript => {
                ProcessCommand::new(&self.npm).args(["set-script", name, body])
            }
            ScriptStrategy::PkgSet => ProcessCommand::new(&self.npm)
                .args(["pkg", "set"])
                .arg(format!("scripts.{}={}", name, body)),
        }
    }

    /// `git init`
    pub fn git_init(&self) -> ProcessCommand {
        ProcessCommand::new(&self.git).arg("init")
    }

    /// `git add .`
    pub fn git_add_all(&self) -> ProcessCommand {
        ProcessCommand::new(&self.git).args(["add", "."])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix_toolchain(scripts: ScriptStrategy) -> Toolchain {
        Toolchain {
            npm: "npm".to_string(),
            npx: "npx".to_string(),
            git: "git".to_string(),
            scripts,
        }
    }

    #[test]
    fn test_old_npm_uses_set_script() {
        assert_eq!(ScriptStrategy::for_npm_version("6.14.18"), ScriptStrategy::SetScript);
        assert_eq!(ScriptStrategy::for_npm_version("7.23.0"), ScriptStrategy::SetScript);
    }

    #[test]
    fn test_new_npm_uses_pkg_set() {
        assert_eq!(ScriptStrategy::for_npm_version("7.24.0"), ScriptStrategy::PkgSet);
        assert_eq!(ScriptStrategy::for_npm_version("8.19.4\n"), ScriptStrategy::PkgSet);
        assert_eq!(ScriptStrategy::for_npm_version("v10.2.3"), ScriptStrategy::PkgSet);
    }

    #[test]
    fn test_invalid_version_uses_pkg_set() {
        assert_eq!(ScriptStrategy::for_npm_version("unknown"), ScriptStrategy::PkgSet);
        assert!(parse_version("").is_none());
    }

    #[test]
    fn test_set_script_forms() {
        let legacy = unix_toolchain(ScriptStrategy::SetScript).set_script("build", "tsc");
        assert_eq!(legacy.args, vec!["set-script", "build", "tsc"]);

        let modern = unix_toolchain(ScriptStrategy::PkgSet).set_script("watch", "tsc --watch");
        assert_eq!(modern.args, vec!["pkg", "set", "scripts.watch=tsc --watch"]);
    }

    #[test]
    fn test_env_overrides_program_names() {
        let tools = Toolchain::from_lookup(|key| match key {
            NPM_ENV => Some("pnpm".to_string()),
            GIT_ENV => Some("   ".to_string()),
            _ => None,
        });
        let defaults = Toolchain::default();

        assert_eq!(tools.npm, "pnpm");
        assert_eq!(tools.npx, defaults.npx);
        assert_eq!(tools.git, defaults.git);
        assert_eq!(tools.scripts, ScriptStrategy::PkgSet);
        assert_eq!(tools.npm_init().to_string(), "pnpm init -y");
    }

    #[test]
    fn test_install_dev_lists_packages() {
        let cmd = unix_toolchain(ScriptStrategy::PkgSet).npm_install_dev(&["typescript", "jest"]);
        assert_eq!(cmd.to_string(), "npm i -D typescript jest");
    }
}
