//! Interactive `add` / `search` / `quit` shell over a [`SearchEngine`].

pub mod command;

use command::{parse_line, Command};
use ngram_core::config::NGRAM_SIZE;
use ngram_core::tokenizer::validate_query;
use ngram_core::{Fetcher, IndexError, ScoredDoc, SearchEngine};
use std::io::{self, BufRead, Write};

pub const USAGE: &str = r#"Expected "add [medium article link]", "search [search term]", or "quit""#;

pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<F> {
    engine: SearchEngine,
    fetcher: F,
}

impl<F: Fetcher> Shell<F> {
    pub fn new(engine: SearchEngine, fetcher: F) -> Self {
        Self { engine, fetcher }
    }

    pub fn engine(&self) -> &SearchEngine { &self.engine }

    /// Index `urls` before the first prompt. Failures are logged and skipped.
    pub fn preload(&mut self, urls: &[String]) {
        for url in urls {
            match self.engine.add_document(url, &self.fetcher) {
                Ok(ngrams) => tracing::info!(%url, ngrams, "preloaded article"),
                Err(e) => tracing::warn!(%url, error = %e, "skipping preload"),
            }
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            if self.handle_line(&line, out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let cmd = match parse_line(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                tracing::debug!(error = %e, "unparseable input");
                writeln!(out, "{USAGE}")?;
                return Ok(Flow::Continue);
            }
        };
        match cmd {
            Command::Add(url) => self.add(&url, out)?,
            Command::Search(query) => self.search(&query, out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn add<W: Write>(&mut self, url: &str, out: &mut W) -> io::Result<()> {
        match self.engine.add_document(url, &self.fetcher) {
            Ok(ngrams) => writeln!(out, "indexed {url} ({ngrams} n-grams)"),
            Err(e @ IndexError::AlreadyIndexed(_)) => writeln!(out, "{e}"),
            Err(e) => {
                tracing::warn!(%url, error = %e, "add failed");
                writeln!(out, "could not index {url}: {e}")?;
                writeln!(out, "{USAGE}")
            }
        }
    }

    fn search<W: Write>(&self, query: &str, out: &mut W) -> io::Result<()> {
        if validate_query(query).is_err() {
            return writeln!(out, "expected at least {NGRAM_SIZE} search characters!");
        }
        let results = self.engine.search(query);
        tracing::debug!(query, hits = results.len(), "search");
        write_results(&results, out)
    }
}

pub fn write_results<W: Write>(results: &[ScoredDoc], out: &mut W) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "no matching articles")?;
    }
    for (idx, result) in results.iter().enumerate() {
        writeln!(out, "{}: {} ({:.2}% match)", idx + 1, result.id, result.percent_match)?;
    }
    writeln!(out)
}
