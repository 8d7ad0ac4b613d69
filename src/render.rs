//! Plain-text result table.
//!
//! One line per hit, `term<TAB>translation`, exact hits first. With
//! [`TableRenderer::show_rank`] each line gains a third column: `=` for an
//! exact hit, `~N` for a partial hit at edit distance N.

use std::io::{self, Write};

use qdict_core::{MatchKind, ResultAssembler, SearchResults};
use qdict_source::DictRecord;

const NO_MATCHES: &str = "(no matches)";

/// Writes search results as tab-separated lines.
pub struct TableRenderer<W> {
    out: W,
    show_rank: bool,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_rank: false,
        }
    }

    pub fn show_rank(mut self, show: bool) -> Self {
        self.show_rank = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultAssembler<DictRecord> for TableRenderer<W> {
    /// Number of rows written.
    type Output = io::Result<usize>;

    fn assemble(&mut self, query: &str, results: SearchResults<'_, DictRecord>) -> Self::Output {
        if results.is_empty() {
            tracing::debug!(query, "no matches");
            writeln!(self.out, "{NO_MATCHES}")?;
            self.out.flush()?;
            return Ok(0);
        }

        let rows = results.len();
        for hit in results {
            write!(self.out, "{}\t{}", hit.term, hit.record.translation)?;
            if self.show_rank {
                match hit.kind {
                    MatchKind::Exact => write!(self.out, "\t=")?,
                    MatchKind::Partial { distance } => write!(self.out, "\t~{distance}")?,
                }
            }
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(rows)
    }
}
