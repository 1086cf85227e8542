use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sortboard::BoardConfig;

use crate::error::Result;
use crate::script::{BoardReport, Replayer, demo_script, load_config, load_script};

#[derive(Debug, Parser)]
#[command(
    name = "sortboard-harness",
    about = "Replay drag-and-drop scripts against a seeded Kanban board",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the built-in drag scenario and print the final board.
    Demo(OutputArgs),

    /// Replay a JSON script of drag events.
    Replay(ReplayArgs),

    /// Print the seed board.
    Seed(OutputArgs),
}

#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// JSON array of drag events.
    pub script: PathBuf,

    /// Board configuration (.toml or .json).
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

pub fn run_with_output(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Demo(args) => {
            let mut replayer = Replayer::new(&BoardConfig::default())?;
            replayer.run(demo_script())?;
            emit(&replayer.report(), &args, out)
        }
        Commands::Replay(args) => {
            let config = match &args.config {
                Some(path) => load_config(path)?,
                None => BoardConfig::default(),
            };
            let events = load_script(&args.script)?;
            let mut replayer = Replayer::new(&config)?;
            replayer.run(events)?;
            emit(&replayer.report(), &args.output, out)
        }
        Commands::Seed(args) => {
            let replayer = Replayer::new(&BoardConfig::default())?;
            emit(&replayer.report(), &args, out)
        }
    }
}

fn emit(report: &BoardReport, args: &OutputArgs, out: &mut impl Write) -> Result<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        out.write_all(report.render_text().as_bytes())?;
    }
    Ok(())
}
