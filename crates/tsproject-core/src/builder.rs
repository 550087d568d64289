//! Project assembly pipeline
//!
//! `ProjectBuilder` turns a project name and archetype into a directory tree,
//! an npm manifest with dev dependencies, config and source files, npm
//! scripts, and a git repository. Only creating the project root is fatal;
//! every later action is recorded in the [`RunReport`] and the pipeline moves
//! on regardless of its result.

use crate::archetype::{Archetype, ProjectName};
use crate::config::ConfigBundle;
use crate::dependencies::resolve_dependencies;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::report::{ActionOutcome, ActionStatus, RunReport, Step};
use crate::runtime::{CommandRunner, ProcessCommand, Toolchain};
use crate::scripts::npm_scripts;
use crate::templates::{TemplateBundle, GITIGNORE, STYLESHEET};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Progress notifications emitted while a build runs
#[derive(Debug, Clone, Copy)]
pub enum ProgressEvent<'a> {
    StepStarted(Step),
    ActionFinished(&'a ActionOutcome),
}

/// Callback receiving [`ProgressEvent`]s
pub type ProgressHandler = Box<dyn Fn(ProgressEvent<'_>) + Send + Sync>;

/// Settings for a build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory the project root is created in
    pub parent_dir: PathBuf,
    /// External tool names and script registration style
    pub tools: Toolchain,
    /// Skip the network-bound dependency install and type sync
    pub skip_install: bool,
    /// Skip `git init` and `git add`; `.gitignore` is still written
    pub skip_git: bool,
    /// Stage the generated files after `git init`
    pub stage_files: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            parent_dir: PathBuf::from("."),
            tools: Toolchain::default(),
            skip_install: false,
            skip_git: false,
            stage_files: true,
        }
    }
}

/// Builds projects, delegating external commands to a [`CommandRunner`]
pub struct ProjectBuilder<R: CommandRunner> {
    runner: R,
    options: BuildOptions,
    progress: Option<ProgressHandler>,
}

impl<R: CommandRunner> ProjectBuilder<R> {
    pub fn new(runner: R, options: BuildOptions) -> Self {
        Self {
            runner,
            options,
            progress: None,
        }
    }

    /// Receive progress events while the build runs
    pub fn with_progress<F>(mut self, handler: F) -> Self
    where
        F: Fn(ProgressEvent<'_>) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(handler));
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Path the project root will be created at
    pub fn project_root(&self, name: &ProjectName) -> PathBuf {
        self.options.parent_dir.join(name)
    }

    /// Run the whole pipeline for one project
    ///
    /// Returns an error only when nothing could be created; otherwise the
    /// report lists every action and whether it succeeded.
    pub async fn build(
        &self,
        name: &ProjectName,
        archetype: Archetype,
    ) -> ScaffoldResult<RunReport> {
        info!(project = %name, %archetype, "building project");

        // Generate everything up front so a serialization failure can't leave
        // a half-written directory behind.
        let configs = ConfigBundle::generate(archetype)?;
        let templates = TemplateBundle::generate(name, archetype);

        let mut run = Run {
            builder: self,
            root: self.project_root(name),
            report: RunReport::new(self.project_root(name), archetype),
        };

        run.create_structure().await?;
        run.init_manifest().await;
        run.install_dependencies(archetype).await;
        run.write_config(&configs).await;
        run.write_sources(&templates).await;
        run.sync_types().await;
        run.register_scripts(archetype).await;
        run.init_version_control().await;

        let report = run.report;
        info!(
            root = %report.root().display(),
            failures = report.failures().count(),
            "build finished"
        );
        Ok(report)
    }

    fn emit(&self, event: ProgressEvent<'_>) {
        if let Some(handler) = &self.progress {
            handler(event);
        }
    }
}

/// State of a single build; `root` stands in for a working directory
struct Run<'b, R: CommandRunner> {
    builder: &'b ProjectBuilder<R>,
    root: PathBuf,
    report: RunReport,
}

impl<R: CommandRunner> Run<'_, R> {
    fn start(&self, step: Step) {
        debug!(%step, "step started");
        self.builder.emit(ProgressEvent::StepStarted(step));
    }

    fn record(&mut self, step: Step, action: String, status: ActionStatus) -> bool {
        let ok = status == ActionStatus::Succeeded;
        if let ActionStatus::Failed(reason) = &status {
            warn!(%step, %action, %reason, "action failed");
        }
        let outcome = ActionOutcome {
            step,
            action,
            status,
        };
        self.builder.emit(ProgressEvent::ActionFinished(&outcome));
        self.report.record(outcome);
        ok
    }

    async fn exec(&mut self, step: Step, command: ProcessCommand) -> bool {
        let status = match self.builder.runner.run(&command, &self.root).await {
            Ok(()) => ActionStatus::Succeeded,
            Err(e) => ActionStatus::Failed(e.to_string()),
        };
        self.record(step, command.to_string(), status)
    }

    fn skip(&mut self, step: Step, action: String, reason: &str) {
        self.record(step, action, ActionStatus::Skipped(reason.to_string()));
    }

    async fn mkdir(&mut self, step: Step, relative: &str) {
        let status = match fs::create_dir_all(self.root.join(relative)).await {
            Ok(()) => ActionStatus::Succeeded,
            Err(e) => ActionStatus::Failed(e.to_string()),
        };
        self.record(step, format!("{}/", relative), status);
    }

    async fn write(&mut self, step: Step, relative: &str, contents: &str) {
        let status = match fs::write(self.root.join(relative), contents).await {
            Ok(()) => {
                self.report.record_file(relative);
                ActionStatus::Succeeded
            }
            Err(e) => ActionStatus::Failed(e.to_string()),
        };
        self.record(step, relative.to_string(), status);
    }

    async fn create_structure(&mut self) -> ScaffoldResult<()> {
        self.start(Step::CreateStructure);
        for dir in [self.root.clone(), self.root.join("src")] {
            fs::create_dir(&dir)
                .await
                .map_err(|source| ScaffoldError::CreateStructure {
                    path: dir.clone(),
                    source,
                })?;
            let action = format!("{}/", relative_display(&self.root, &dir));
            self.record(Step::CreateStructure, action, ActionStatus::Succeeded);
        }
        Ok(())
    }

    async fn init_manifest(&mut self) {
        self.start(Step::InitManifest);
        let command = self.builder.options.tools.npm_init();
        self.exec(Step::InitManifest, command).await;
    }

    async fn install_dependencies(&mut self, archetype: Archetype) {
        self.start(Step::InstallDependencies);
        let dependencies = resolve_dependencies(archetype);
        let command = self.builder.options.tools.npm_install_dev(&dependencies);
        if self.builder.options.skip_install {
            self.skip(Step::InstallDependencies, command.to_string(), "--skip-install");
            return;
        }
        self.exec(Step::InstallDependencies, command).await;
    }

    async fn write_config(&mut self, configs: &ConfigBundle) {
        self.start(Step::WriteConfig);
        for (file, contents) in configs.files() {
            self.write(Step::WriteConfig, file, contents).await;
        }
    }

    async fn write_sources(&mut self, templates: &TemplateBundle) {
        self.start(Step::WriteSources);
        self.mkdir(Step::WriteSources, "public").await;
        self.write(Step::WriteSources, "src/index.css", STYLESHEET).await;
        for dir in templates.directories() {
            self.mkdir(Step::WriteSources, dir).await;
        }
        for (file, contents) in templates.files() {
            self.write(Step::WriteSources, file, contents).await;
        }
    }

    async fn sync_types(&mut self) {
        self.start(Step::SyncTypes);
        let tools = &self.builder.options.tools;
        let (typesync, reinstall) = (tools.typesync(), tools.npm_install());
        if self.builder.options.skip_install {
            self.skip(Step::SyncTypes, typesync.to_string(), "--skip-install");
            self.skip(Step::SyncTypes, reinstall.to_string(), "--skip-install");
            return;
        }
        if self.exec(Step::SyncTypes, typesync).await {
            self.exec(Step::SyncTypes, reinstall).await;
        } else {
            self.skip(Step::SyncTypes, reinstall.to_string(), "typesync failed");
        }
    }

    async fn register_scripts(&mut self, archetype: Archetype) {
        self.start(Step::RegisterScripts);
        for (name, body) in npm_scripts(archetype) {
            let command = self.builder.options.tools.set_script(name, body);
            self.exec(Step::RegisterScripts, command).await;
        }
    }

    async fn init_version_control(&mut self) {
        self.start(Step::InitVersionControl);
        let tools = &self.builder.options.tools;
        let (init, add) = (tools.git_init(), tools.git_add_all());
        let (skip_git, stage) = (self.builder.options.skip_git, self.builder.options.stage_files);

        if skip_git {
            self.skip(Step::InitVersionControl, init.to_string(), "--no-git");
        } else {
            self.exec(Step::InitVersionControl, init).await;
        }

        self.write(Step::InitVersionControl, ".gitignore", GITIGNORE).await;

        if skip_git || !stage {
            self.skip(Step::InitVersionControl, add.to_string(), "staging disabled");
        } else {
            self.exec(Step::InitVersionControl, add).await;
        }
    }
}

fn relative_display(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => root.display().to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
