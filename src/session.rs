//! Query sessions.
//!
//! [`Overrides`] folds command-line flags over the loaded [`Config`] and
//! produces the [`SearchOptions`] and [`JsonSource`] for a run. [`lookup`]
//! answers one query; [`interactive`] answers one query per input line until
//! EOF or `:q` / `:quit`.
//!
//! [`Config`]: qdict_core::config::Config

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use qdict_core::config::{DictionaryConfig, SearchConfig};
use qdict_core::{search_with, EmptyQueryPolicy, ResultAssembler, SearchOptions, Vocabulary};
use qdict_source::{DictRecord, JsonSource};

use crate::TableRenderer;

const PROMPT: &str = "qdict> ";

/// Command-line settings that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Dictionary file used instead of `[dictionary].path`. The configured
    /// key and value fields still apply.
    pub dict: Option<PathBuf>,
    /// Result cap. `Some(0)` lifts any configured cap.
    pub limit: Option<usize>,
    pub empty_query: Option<EmptyQueryPolicy>,
}

impl Overrides {
    pub fn search_options(&self, config: &SearchConfig) -> SearchOptions {
        let mut options = config.options();
        if let Some(limit) = self.limit {
            options.limit = (limit > 0).then_some(limit);
        }
        if let Some(policy) = self.empty_query {
            options.empty_query = policy;
        }
        options
    }

    /// The dictionary source; relative configured paths resolve against `base`.
    pub fn source(&self, config: &DictionaryConfig, base: &Path) -> JsonSource {
        match &self.dict {
            Some(path) => JsonSource::new(path)
                .key_field(config.key_field.clone())
                .value_field(config.value_field.clone()),
            None => JsonSource::from_config(config, base),
        }
    }
}

/// Search once and render the result block. Returns the number of rows.
pub fn lookup<W: Write>(
    vocabulary: &Vocabulary<DictRecord>,
    query: &str,
    options: SearchOptions,
    renderer: &mut TableRenderer<W>,
) -> anyhow::Result<usize> {
    let results = search_with(vocabulary, query, options);
    renderer.assemble(query, results).context("writing results")
}

/// One query per line of `input` until EOF or `:q` / `:quit`. With `prompt`
/// set, a prompt is written to stderr before each read.
///
/// Returns the number of queries answered.
pub fn interactive<B: BufRead, W: Write>(
    vocabulary: &Vocabulary<DictRecord>,
    options: SearchOptions,
    input: B,
    prompt: bool,
    renderer: &mut TableRenderer<W>,
) -> anyhow::Result<usize> {
    let mut lines = input.lines();
    let mut answered = 0;

    loop {
        if prompt {
            let mut stderr = io::stderr().lock();
            stderr.write_all(PROMPT.as_bytes())?;
            stderr.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line.context("reading query")?;
        if matches!(line.trim(), ":q" | ":quit") {
            break;
        }
        lookup(vocabulary, &line, options, renderer)?;
        answered += 1;
    }

    tracing::debug!(answered, "session finished");
    Ok(answered)
}
