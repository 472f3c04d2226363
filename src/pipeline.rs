use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;

use crate::aggregate::FlatTranslations;
use crate::config::Config;
use crate::extract::{self, ExtractOutcome};
use crate::patterns::{self, PatternDefinition};

/// File content as handed over by the file-supply collaborator.
#[derive(Debug)]
pub enum SourceContent {
    Buffered(String),
    /// Zero-length placeholder: forwarded through the run without
    /// participating in extraction.
    Empty,
    /// Declared by a collaborator that cannot buffer. Always rejected; the
    /// core never consumes streams.
    Streamed,
}

#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: SourceContent,
}

/// A recoverable anomaly observed while extracting one file.
#[derive(Debug)]
pub struct FileWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Final state of a run that processed at least one file.
#[derive(Debug)]
pub struct ExtractionReport {
    pub flat: FlatTranslations,
    pub files_processed: usize,
    pub files_forwarded: usize,
    pub warnings: Vec<FileWarning>,
}

/// The single-pass extraction session.
///
/// Files are consumed strictly sequentially; the flat mapping is owned
/// exclusively by the pipeline until `finish` freezes it. The pipeline
/// performs no I/O of its own.
pub struct ExtractionPipeline {
    table: Vec<PatternDefinition>,
    flat: FlatTranslations,
    files_processed: usize,
    files_forwarded: usize,
    warnings: Vec<FileWarning>,
    verbose: bool,
}

impl ExtractionPipeline {
    /// Build the pattern table and an empty accumulator. Fails on an
    /// invalid custom pattern, before any file is processed.
    pub fn new(config: &Config, verbose: bool) -> Result<Self> {
        let table = patterns::build_pattern_table(&config.interpolation, &config.custom_regex)?;
        Ok(Self {
            table,
            flat: FlatTranslations::new(),
            files_processed: 0,
            files_forwarded: 0,
            warnings: Vec::new(),
            verbose,
        })
    }

    /// Feed the next file into the run.
    pub fn process(&mut self, file: SourceFile) -> Result<()> {
        match file.content {
            SourceContent::Streamed => {
                bail!(
                    "Streaming content is not supported: {}",
                    file.path.display()
                );
            }
            SourceContent::Empty => {
                if self.verbose {
                    eprintln!("{} forwarding empty file: {}", "trace:".dimmed(), file.path.display());
                }
                self.files_forwarded += 1;
            }
            SourceContent::Buffered(text) => {
                if self.verbose {
                    eprintln!("{} extracting: {}", "trace:".dimmed(), file.path.display());
                }
                let mut outcome = ExtractOutcome::default();
                for def in &self.table {
                    if self.verbose {
                        eprintln!("{}   pattern '{}'", "trace:".dimmed(), def.name);
                    }
                    extract::apply(def, &text, &mut outcome);
                }
                self.flat.merge(outcome.pairs);
                self.warnings.extend(outcome.warnings.into_iter().map(|message| FileWarning {
                    path: file.path.clone(),
                    message,
                }));
                self.files_processed += 1;
            }
        }
        Ok(())
    }

    /// End of input. Returns `None` when no file was actually processed:
    /// a zero-file run suppresses output entirely instead of emitting
    /// empty artifacts.
    pub fn finish(self) -> Option<ExtractionReport> {
        if self.files_processed == 0 {
            return None;
        }
        Some(ExtractionReport {
            flat: self.flat,
            files_processed: self.files_processed,
            files_forwarded: self.files_forwarded,
            warnings: self.warnings,
        })
    }
}
