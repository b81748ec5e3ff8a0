use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use termcolor::{ColorChoice, StandardStream};
use todos::config::ScanConfig;
use todos::filter::IgnoreRules;
use todos::pattern::Pattern;
use todos::{logging, output, roots, scan};
use tracing::info;

const TAG_LEGEND: &str = "\
Common annotation tags:
  @FIXME - Issue that needs to be fixed.
  @HACK  - A hack that needs to be replaced.
  @TEMP  - Temporary solution that needs to be replaced.
  @TODO  - Action item that needs to be done.
  @XXX   - A note to the reader.";

#[derive(Parser)]
#[command(name = "todos")]
#[command(about = "Look for TODO-style annotation comments in source trees")]
#[command(after_help = TAG_LEGEND)]
struct Cli {
    /// Mirror log output to stdout
    #[arg(short, long)]
    verbose: bool,

    /// Pattern to match: a built-in name (alpha, todo, common) or a
    /// literal regex with two capture groups (tag, text)
    #[arg(short, long, default_value = "alpha")]
    pattern: String,

    /// Directories to scan (default: enclosing git root, else TODO_PATH)
    roots: Vec<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let home = dirs::home_dir().context("could not determine home directory")?;
    logging::init(&home, cli.verbose)?;

    let pattern = Pattern::resolve(&cli.pattern)?;
    let filters = IgnoreRules::standard()?;

    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let env_path = std::env::var(roots::TODO_PATH_VAR).ok();
    let targets = roots::resolve(&cli.roots, &cwd, env_path.as_deref())?;
    info!(?targets, "target directories");

    let config = Arc::new(ScanConfig::new(pattern, filters));
    let results = scan::scan(config, targets);

    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    for outcome in results {
        let result = outcome?;
        output::write_result(&mut stdout, &result, Some(&home))?;
    }

    Ok(())
}
