mod editor;
mod util;

use clap::Parser;
use color_eyre::{eyre::WrapErr, Report};
use std::{fs, path::PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::editor::{unescape, Command, Editor};
use crate::util::Display;

/// Apply scripted edits to text held in a rope
#[derive(Parser, Debug)]
#[command(name = "text-rope", version, about, long_about = None)]
struct Cli {
    /// File to load into the rope
    #[arg(value_name = "FILE", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Start from this text instead of a file (accepts \n, \t and \\ escapes)
    #[arg(short, long)]
    text: Option<String>,

    /// Edit command to apply, may be repeated
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    commands: Vec<String>,

    /// Read edit commands from a file, one per line, after any -c commands
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Rebalance the rope once all commands have run
    #[arg(long)]
    rebalance: bool,

    /// Print length, height, leaf count and balance at the end
    #[arg(long)]
    stats: bool,

    /// Print the tree structure at the end
    #[arg(long)]
    dump: bool,

    /// Write the final text to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut editor = Editor::new(Display::stdout());
    if let Some(file) = &cli.file {
        editor.load_file(file)?;
    } else if let Some(text) = &cli.text {
        editor.load_text(&unescape(text)?);
    }

    let mut script = cli.commands.clone();
    if let Some(path) = &cli.script {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("Error reading script '{}'", path.display()))?;
        script.extend(contents.lines().map(str::to_string));
    }
    editor.run(script.iter().map(String::as_str))?;

    if cli.rebalance {
        editor.execute(Command::Rebalance)?;
    }
    if cli.stats {
        editor.execute(Command::Stats)?;
    }
    if cli.dump {
        editor.execute(Command::Dump)?;
    }

    match cli.output {
        Some(path) => editor.execute(Command::Write(Some(path))),
        None => editor.execute(Command::Print),
    }
}
