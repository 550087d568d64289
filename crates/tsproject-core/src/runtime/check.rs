//! Detection of Node.js, npm, and git

use super::npm::Toolchain;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// Short human-readable status, e.g. `npm (10.2.3)`
    pub fn summary(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", if cfg!(windows) { "node.exe" } else { "node" })
}

/// Check if npm is available
pub fn check_npm(tools: &Toolchain) -> RuntimeInfo {
    probe("npm", &tools.npm)
}

/// Check if git is available
pub fn check_git(tools: &Toolchain) -> RuntimeInfo {
    probe("git", &tools.git)
}

/// Probe every tool a build shells out to
///
/// Missing tools are not an error here: the build records each failed
/// command and carries on, so callers only warn.
pub fn check_runtimes(tools: &Toolchain) -> Vec<RuntimeInfo> {
    vec![check_node(), check_npm(tools), check_git(tools)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_unavailable() {
        let info = probe("nothing", "definitely-not-a-real-program-xyz");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert_eq!(info.summary(), "nothing (not installed)");
    }

    #[test]
    fn test_summary_includes_version() {
        let info = RuntimeInfo {
            name: "npm",
            version: Some("10.2.3".to_string()),
            available: true,
        };
        assert_eq!(info.summary(), "npm (10.2.3)");
    }

    #[test]
    fn test_check_runtimes_reports_all_tools() {
        let names: Vec<_> = check_runtimes(&Toolchain::default())
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Node.js", "npm", "git"]);
    }
}
