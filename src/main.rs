//! Mancala-Sow: enumerate every sowing sequence from a starting layout.
//!
//! ## Usage
//!
//! - `mancala-sow` - Search from the default layout
//! - `mancala-sow --layout "0 3 4 4 4 4 0 4 4 4 4 4 4"` - Search from a custom layout
//! - `mancala-sow --summary` - Also report the best sequences on stderr
//!
//! Each closed sequence prints one line of thirteen pit counts on stdout.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use mancala_sow::board::Layout;
use mancala_sow::constants::MAX_HOPS;
use mancala_sow::report::{Listing, Summary};
use mancala_sow::search::{Search, SearchLimits};

/// Mancala-Sow: exhaustive sowing-sequence enumerator
#[derive(Parser)]
#[command(name = "mancala-sow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Starting layout: 13 stone counts, pit 0 first, store at index 6
    #[arg(short, long)]
    layout: Option<String>,

    /// Stop after this many sequences have closed
    #[arg(long)]
    max_sequences: Option<usize>,

    /// Deepest decision stack to explore
    #[arg(long)]
    max_depth: Option<usize>,

    /// Relay hops allowed in a single turn
    #[arg(long, default_value_t = MAX_HOPS)]
    max_hops: usize,

    /// Print the highest pot and its sequences to stderr when done
    #[arg(short, long)]
    summary: bool,

    /// Print every closed sequence as `turns. total` to stderr when done
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(&cli) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn run(cli: &Cli) -> Result<()> {
    let start: Layout = match &cli.layout {
        Some(text) => text
            .parse()
            .with_context(|| format!("cannot use starting layout '{text}'"))?,
        None => Layout::default(),
    };
    let limits = SearchLimits {
        max_sequences: cli.max_sequences,
        max_depth: cli.max_depth,
        max_hops: cli.max_hops,
    };

    let mut search = Search::with_limits(start, limits);
    let mut out = BufWriter::new(io::stdout().lock());
    let mut write_result = Ok(());
    let outcome = search
        .run(|layout| {
            if write_result.is_ok() {
                write_result = writeln!(out, "{layout}");
            }
        })
        .context("search aborted")?;
    write_result.context("failed to write output")?;
    out.flush().context("failed to write output")?;

    if cli.list {
        eprint!("{}", Listing(search.log()));
    }
    if cli.summary {
        let summary = Summary {
            log: search.log(),
            outcome,
            stats: search.stats(),
        };
        eprint!("{summary}");
    }
    Ok(())
}
