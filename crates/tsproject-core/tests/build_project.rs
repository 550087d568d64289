//! End-to-end builds against a temporary directory with recorded commands

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tsproject_core::{
    ActionStatus, Archetype, BuildOptions, CommandError, CommandRunner, ProcessCommand,
    ProjectBuilder, ProjectName, ScaffoldError, ScriptStrategy, Step, Toolchain,
};
use walkdir::WalkDir;

/// Records every command; fails the ones whose rendered text contains `fail_on`
#[derive(Default)]
struct RecordingRunner {
    calls: Mutex<Vec<(String, PathBuf)>>,
    fail_on: Option<&'static str>,
}

impl RecordingRunner {
    fn failing_on(pattern: &'static str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(pattern),
        }
    }

    fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(cmd, _)| cmd.clone())
            .collect()
    }

    fn working_dirs(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, cwd)| cwd.clone())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &ProcessCommand, cwd: &Path) -> Result<(), CommandError> {
        let rendered = command.to_string();
        self.calls
            .lock()
            .unwrap()
            .push((rendered.clone(), cwd.to_path_buf()));
        match self.fail_on {
            Some(pattern) if rendered.contains(pattern) => Err(CommandError::Failed {
                command: rendered,
                message: "simulated failure".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

fn options(parent: &Path) -> BuildOptions {
    BuildOptions {
        parent_dir: parent.to_path_buf(),
        tools: Toolchain {
            npm: "npm".to_string(),
            npx: "npx".to_string(),
            git: "git".to_string(),
            scripts: ScriptStrategy::PkgSet,
        },
        ..BuildOptions::default()
    }
}

fn relative_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

#[tokio::test]
async fn test_webpack_project_layout() {
    let tmp = TempDir::new().unwrap();
    let builder = ProjectBuilder::new(RecordingRunner::default(), options(tmp.path()));
    let name = ProjectName::new("demo").unwrap();

    let report = builder.build(&name, Archetype::Webpack).await.unwrap();
    assert!(report.is_clean());

    let root = tmp.path().join("demo");
    assert_eq!(report.root(), root.as_path());
    assert!(root.join("src/index.html").is_file());
    assert!(!root.join("src/components").exists());

    let webpack = fs::read_to_string(root.join("webpack.config.js")).unwrap();
    assert!(webpack.contains("./src/index.ts"));
    assert!(webpack.contains("bundle.js"));

    let tsconfig: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("tsconfig.json")).unwrap()).unwrap();
    assert_eq!(tsconfig["compilerOptions"]["module"], "es6");

    let html = fs::read_to_string(root.join("src/index.html")).unwrap();
    assert!(html.contains("<title>demo</title>"));
}

#[tokio::test]
async fn test_node_project_layout() {
    let tmp = TempDir::new().unwrap();
    let builder = ProjectBuilder::new(RecordingRunner::default(), options(tmp.path()));
    let name = ProjectName::new("demo").unwrap();

    builder.build(&name, Archetype::Node).await.unwrap();

    let root = tmp.path().join("demo");
    assert_eq!(
        relative_files(&root),
        vec![
            ".eslintrc",
            ".gitignore",
            ".prettierrc",
            "src/index.css",
            "src/index.ts",
            "tsconfig.json",
        ]
    );
    assert!(root.join("public").is_dir());
    assert_eq!(fs::read_dir(root.join("public")).unwrap().count(), 0);

    let index = fs::read_to_string(root.join("src/index.ts")).unwrap();
    assert!(index.starts_with("//"));

    let install = builder
        .runner()
        .commands()
        .into_iter()
        .find(|c| c.starts_with("npm i -D"))
        .unwrap();
    assert!(install.contains("ts-node"));
    assert!(!install.contains("react"));
    assert!(!install.contains("webpack"));
}

#[tokio::test]
async fn test_react_project_layout() {
    let tmp = TempDir::new().unwrap();
    let builder = ProjectBuilder::new(RecordingRunner::default(), options(tmp.path()));
    let name = ProjectName::new("demo").unwrap();

    let report = builder.build(&name, Archetype::React).await.unwrap();

    let root = tmp.path().join("demo");
    for file in ["public/index.html", "src/components/App.tsx", "src/index.tsx"] {
        assert!(root.join(file).is_file(), "missing {}", file);
    }
    assert!(report
        .files_written()
        .contains(&PathBuf::from("src/components/App.tsx")));

    let html = fs::read_to_string(root.join("public/index.html")).unwrap();
    assert!(html.contains(r#"<div id="root"></div>"#));
    assert!(!html.contains("<!-- template -->"));

    let eslint: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join(".eslintrc")).unwrap()).unwrap();
    assert_eq!(eslint["extends"][3], "react-app/jest");
}

#[tokio::test]
async fn test_commands_run_in_order_inside_project_root() {
    let tmp = TempDir::new().unwrap();
    let builder = ProjectBuilder::new(RecordingRunner::default(), options(tmp.path()));
    let name = ProjectName::new("demo").unwrap();

    builder.build(&name, Archetype::Node).await.unwrap();

    let commands = builder.runner().commands();
    assert_eq!(commands[0], "npm init -y");
    assert!(commands[1].starts_with("npm i -D typescript typesync"));
    assert_eq!(commands[2], "npx typesync");
    assert_eq!(commands[3], "npm i");
    assert_eq!(commands[4], "npm pkg set 'scripts.get-types=typesync && npm i'");
    assert_eq!(commands[commands.len() - 2], "git init");
    assert_eq!(commands[commands.len() - 1], "git add .");

    let root = tmp.path().join("demo");
    assert!(builder.runner().working_dirs().iter().all(|cwd| *cwd == root));
}

#[tokio::test]
async fn test_command_failures_do_not_stop_the_build() {
    let tmp = TempDir::new().unwrap();
    let builder = ProjectBuilder::new(RecordingRunner::failing_on("npm"), options(tmp.path()));
    let name = ProjectName::new("demo").unwrap();

    let report = builder.build(&name, Archetype::Webpack).await.unwrap();

    assert!(!report.is_clean());
    assert!(report
        .failures()
        .all(|f| f.action.starts_with("npm") || f.action.starts_with("npx")));
    assert!(report.failures().any(|f| f.step == Step::RegisterScripts));

    // Files and git still happen after npm failed
    let root = tmp.path().join("demo");
    assert!(root.join("webpack.config.js").is_file());
    assert!(root.join(".gitignore").is_file());
    assert!(builder.runner().commands().contains(&"git init".to_string()));
}

#[tokio::test]
async fn test_typesync_failure_skips_reinstall() {
    let tmp = TempDir::new().unwrap();
    let builder =
        ProjectBuilder::new(RecordingRunner::failing_on("typesync"), options(tmp.path()));
    let name = ProjectName::new("demo").unwrap();

    let report = builder.build(&name, Archetype::Node).await.unwrap();

    let sync: Vec<_> = report
        .outcomes()
        .iter()
        .filter(|o| o.step == Step::SyncTypes)
        .collect();
    assert_eq!(sync.len(), 2);
    assert!(sync[0].is_failure());
    assert!(matches!(sync[1].status, ActionStatus::Skipped(_)));
    assert!(!builder.runner().commands().contains(&"npm i".to_string()));
}

#[tokio::test]
async fn test_skip_install_and_git() {
    let tmp = TempDir::new().unwrap();
    let opts = BuildOptions {
        skip_install: true,
        skip_git: true,
        ..options(tmp.path())
    };
    let builder = ProjectBuilder::new(RecordingRunner::default(), opts);
    let name = ProjectName::new("demo").unwrap();

    let report = builder.build(&name, Archetype::Node).await.unwrap();

    let commands = builder.runner().commands();
    assert!(!commands
        .iter()
        .any(|c| c.starts_with("npm i -D") || c == "npm i"));
    assert!(!commands.iter().any(|c| c.starts_with("git")));
    assert_eq!(report.skipped().count(), 5);
    assert!(tmp.path().join("demo/.gitignore").is_file());
}

#[tokio::test]
async fn test_existing_directory_is_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("demo")).unwrap();
    let builder = ProjectBuilder::new(RecordingRunner::default(), options(tmp.path()));
    let name = ProjectName::new("demo").unwrap();

    let err = builder.build(&name, Archetype::Node).await.unwrap_err();

    assert!(matches!(err, ScaffoldError::CreateStructure { .. }));
    assert!(builder.runner().commands().is_empty());
}

#[tokio::test]
async fn test_progress_reports_every_step() {
    let tmp = TempDir::new().unwrap();
    let steps = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&steps);
    let builder = ProjectBuilder::new(RecordingRunner::default(), options(tmp.path()))
        .with_progress(move |event| {
            if let tsproject_core::ProgressEvent::StepStarted(step) = event {
                seen.lock().unwrap().push(step);
            }
        });
    let name = ProjectName::new("demo").unwrap();

    builder.build(&name, Archetype::React).await.unwrap();

    assert_eq!(*steps.lock().unwrap(), Step::ALL.to_vec());
}
