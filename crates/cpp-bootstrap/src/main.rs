//! cpp-bootstrap CLI - interactive scaffolding for minimal C++ projects

use anyhow::Result;
use bootstrap_core::tui::BootstrapArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cpp-bootstrap")]
#[command(about = "Interactive bootstrapper for minimal C++ projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full interactive project setup
    Interactive(StepArgs),
    /// Interactively create a CMakeLists.txt
    Cmakelists(StepArgs),
    /// Create src/main.cpp with a 'Hello, World!' program
    Src(StepArgs),
}

#[derive(Parser, Debug)]
pub struct StepArgs {
    /// Project root directory (skips the directory prompt)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

impl From<StepArgs> for BootstrapArgs {
    fn from(args: StepArgs) -> Self {
        BootstrapArgs { directory: args.directory }
    }
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

    let args = Args::parse();

    let result = match args.command {
        Some(Command::Interactive(step)) => bootstrap_core::tui::run(step.into()).await,
        Some(Command::Cmakelists(step)) => bootstrap_core::tui::run_cmakelists(step.into()),
        Some(Command::Src(step)) => bootstrap_core::tui::run_source_stub(step.into()),
        // No subcommand provided, default to the full interactive setup
        None => bootstrap_core::tui::run(BootstrapArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
