use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flipbook", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `FLIPBOOK_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the spread layout for a book of N pages as JSON.
    Spreads(SpreadsArgs),
    /// Replay a scripted input sequence and print every event as a JSON line.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct SpreadsArgs {
    /// Number of pages.
    #[arg(long)]
    pages: usize,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Replay script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Controller config JSON (overrides the script's own config).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Probe page images under this directory instead of assuming every load succeeds.
    #[arg(long)]
    pages_dir: Option<PathBuf>,

    /// Print only the final state, not the event stream.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Spreads(args) => cmd_spreads(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("FLIPBOOK_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_spreads(args: SpreadsArgs) -> anyhow::Result<()> {
    let book = flipbook::Book::from_sources((0..args.pages).map(|i| format!("{i}")));
    let json = serde_json::to_string_pretty(book.spreads()).context("serialize spreads")?;
    println!("{json}");
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let script = flipbook::replay::Script::from_path(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;
    let config = args
        .config
        .as_ref()
        .map(|p| {
            flipbook::FlipbookConfig::from_path(p)
                .with_context(|| format!("load config '{}'", p.display()))
        })
        .transpose()?;

    let report = match &args.pages_dir {
        Some(dir) => {
            let mut probe = flipbook::replay::FsProbe::open(dir)?;
            flipbook::replay::replay(&script, config, &mut probe)?
        }
        None => flipbook::replay::replay(&script, config, &mut flipbook::replay::AlwaysLoaded)?,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if !args.summary {
        for ev in &report.events {
            serde_json::to_writer(&mut out, ev).context("write event")?;
            writeln!(out)?;
        }
    }
    let summary = serde_json::json!({
        "final_spread": report.final_spread,
        "final_state": report.final_state,
        "page_changes": report.page_changes(),
        "ended_at_ms": report.ended_at_ms,
    });
    serde_json::to_writer(&mut out, &summary).context("write summary")?;
    writeln!(out)?;

    eprintln!(
        "replayed {} steps over {} pages",
        script.steps.len(),
        script.pages.len()
    );
    Ok(())
}
