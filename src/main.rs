use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use qdict::{interactive, lookup, Overrides, TableRenderer};
use qdict_core::config::Config;
use qdict_core::EmptyQueryPolicy;
use qdict_source::VocabularySource;

#[derive(Parser)]
#[command(name = "qdict", about = "Quick dictionary lookup")]
struct Cli {
    /// Dictionary file (JSON array of objects). Overrides the config file.
    #[arg(long, value_name = "PATH")]
    dict: Option<PathBuf>,

    /// Read configuration from PATH instead of ~/.config/qdict/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show at most N results (0 = unlimited).
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// What an empty query returns.
    #[arg(long, value_enum)]
    empty_query: Option<EmptyQueryArg>,

    /// Append a rank column: `=` for exact hits, `~N` for edit distance N.
    #[arg(long)]
    rank: bool,

    /// Log at debug level to stderr (RUST_LOG overrides).
    #[arg(long)]
    debug: bool,

    /// Query words. Without them, queries are read from stdin, one per line.
    query: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum EmptyQueryArg {
    MatchAll,
    MatchNone,
}

impl From<EmptyQueryArg> for EmptyQueryPolicy {
    fn from(arg: EmptyQueryArg) -> Self {
        match arg {
            EmptyQueryArg::MatchAll => EmptyQueryPolicy::MatchAll,
            EmptyQueryArg::MatchNone => EmptyQueryPolicy::MatchNone,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unavailable, using defaults");
            Config::defaults()
        }),
    };

    let overrides = Overrides {
        dict: cli.dict.clone(),
        limit: cli.limit,
        empty_query: cli.empty_query.map(Into::into),
    };
    let options = overrides.search_options(&config.search);
    let source = overrides.source(&config.dictionary, &executable_dir());
    let vocabulary = source
        .load()
        .with_context(|| format!("loading dictionary {}", source.path().display()))?;
    tracing::info!(path = %source.path().display(), terms = vocabulary.len(), "dictionary ready");

    let mut renderer = TableRenderer::new(io::stdout().lock()).show_rank(cli.rank);

    if !cli.query.is_empty() {
        let query = cli.query.join(" ");
        lookup(&vocabulary, &query, options, &mut renderer)?;
        return Ok(());
    }

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    interactive(&vocabulary, options, stdin.lock(), prompt, &mut renderer)?;
    Ok(())
}

/// Relative dictionary paths resolve against the directory holding the binary.
fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
