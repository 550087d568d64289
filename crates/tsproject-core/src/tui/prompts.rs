//! Charm-style CLI prompts using cliclack

use crate::archetype::{Archetype, ProjectName};
use crate::builder::{BuildOptions, ProgressEvent, ProjectBuilder};
use crate::report::{ActionStatus, RunReport};
use crate::runtime::{check, ScriptStrategy, SystemRunner, Toolchain};
use crate::scripts::start_script;
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Project name; also the directory created in the current directory
    pub name: Option<String>,

    /// Project type to use instead of prompting
    pub template: Option<String>,

    /// Skip installing dependencies and type declarations
    pub skip_install: bool,

    /// Skip `git init` and `git add`
    pub skip_git: bool,

    /// Stage generated files after `git init`
    pub stage: bool,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            name: None,
            template: None,
            skip_install: false,
            skip_git: false,
            stage: true,
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    // Step 1: Validate the name before touching anything
    let name = match args.name.as_deref() {
        Some(raw) => ProjectName::new(raw)?,
        None => anyhow::bail!(
            "Cannot create project without name. Please enter name as first argument"
        ),
    };

    cliclack::intro("Create TypeScript Project")?;

    // Step 2: Select project type
    let archetype = select_archetype(args.template.as_deref())?;

    // Step 3: Check tools (advisory)
    let tools = check_tools()?;

    // Step 4: Build
    cliclack::log::info(format!("Creating {} project in directory {}", archetype, name))?;

    let options = BuildOptions {
        parent_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        tools,
        skip_install: args.skip_install,
        skip_git: args.skip_git,
        stage_files: args.stage,
    };
    let builder = ProjectBuilder::new(SystemRunner::new(), options).with_progress(show_progress);
    let report = builder.build(&name, archetype).await?;

    // Step 5: Summary and next steps
    print_summary(&report)?;
    print_next_steps(&name, archetype, args.skip_install)?;

    Ok(())
}

fn select_archetype(specified: Option<&str>) -> Result<Archetype> {
    if let Some(value) = specified {
        let archetype: Archetype = value.parse()?;
        cliclack::log::info(format!("Using project type: {}", archetype))?;
        return Ok(archetype);
    }

    let mut select = cliclack::select("Please select the type of project you want to create");
    for archetype in Archetype::ALL {
        select = select.item(archetype, archetype.display_name(), archetype.description());
    }

    Ok(select.interact()?)
}

fn check_tools() -> Result<Toolchain> {
    let tools = Toolchain::from_env();

    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");

    let runtimes = check::check_runtimes(&tools);
    let summary: Vec<String> = runtimes.iter().map(|r| r.summary()).collect();
    spinner.stop(format!("Detected tools: {}", summary.join(", ")));

    for missing in runtimes.iter().filter(|r| !r.available) {
        cliclack::log::warning(format!(
            "{} was not found; steps that need it will be reported as failed",
            missing.name
        ))?;
    }

    let scripts = runtimes
        .iter()
        .find(|r| r.name == "npm")
        .and_then(|r| r.version.as_deref())
        .map(ScriptStrategy::for_npm_version)
        .unwrap_or_default();

    Ok(tools.with_scripts(scripts))
}

fn show_progress(event: ProgressEvent<'_>) {
    // Prompt output errors are not worth aborting the build over
    let _ = match event {
        ProgressEvent::StepStarted(step) => cliclack::log::step(step.description()),
        ProgressEvent::ActionFinished(outcome) => match &outcome.status {
            ActionStatus::Failed(reason) => {
                cliclack::log::warning(format!("{} failed: {}", outcome.action, reason))
            }
            ActionStatus::Succeeded | ActionStatus::Skipped(_) => Ok(()),
        },
    };
}

fn print_summary(report: &RunReport) -> Result<()> {
    let failures: Vec<_> = report.failures().collect();
    if failures.is_empty() {
        cliclack::log::success(format!(
            "Created {} files in {}",
            report.files_written().len(),
            report.root().display()
        ))?;
    } else {
        let lines: Vec<String> = failures
            .iter()
            .map(|f| format!("  - [{}] {}", f.step, f.action))
            .collect();
        cliclack::log::warning(format!(
            "Project created with {} failed step(s):\n{}",
            failures.len(),
            lines.join("\n")
        ))?;
    }

    for skipped in report.skipped() {
        if let ActionStatus::Skipped(reason) = &skipped.status {
            cliclack::log::remark(format!("Skipped {} ({})", skipped.action, reason))?;
        }
    }

    Ok(())
}

/// Commands to show the user once the project exists
pub fn next_steps(name: &ProjectName, archetype: Archetype, skip_install: bool) -> Vec<String> {
    let mut steps = vec![format!("cd {}", name)];
    if skip_install {
        steps.push("npm install".to_string());
        steps.push("npm run get-types".to_string());
    }
    steps.push(format!("npm run {}", start_script(archetype)));
    steps
}

fn print_next_steps(name: &ProjectName, archetype: Archetype, skip_install: bool) -> Result<()> {
    let steps = next_steps(name, archetype, skip_install);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
