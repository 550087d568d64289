//! create-ts-project - Scaffold a TypeScript project for Node, React, or webpack

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tsproject_core::tui::CreateArgs;

#[derive(Parser, Debug)]
#[command(name = "create-ts-project")]
#[command(about = "Scaffold a TypeScript project with eslint, prettier, jest, and git")]
#[command(version)]
pub struct Args {
    /// Name of the project (also the directory to create)
    pub name: Option<String>,

    /// Project type to create instead of prompting (nodejs, react, webpack)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Skip installing dependencies and type declarations
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Don't initialize a git repository
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Don't stage the generated files after `git init`
    #[arg(long = "no-stage")]
    pub no_stage: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            template: args.template,
            skip_install: args.skip_install,
            skip_git: args.no_git,
            stage: !args.no_stage,
        }
    }
}

fn init_logging() {
    // Diagnostics stay quiet unless RUST_LOG asks for them; user-facing
    // progress goes through the prompts.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_logging();

    let args = Args::parse();
    let result = tsproject_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
