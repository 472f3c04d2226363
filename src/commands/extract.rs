use std::env;
use std::fs;

use anyhow::{Context, Result};

use crate::cli::{ExitStatus, ExtractArgs};
use crate::config::{self, Config};
use crate::emit;
use crate::pipeline::{ExtractionPipeline, SourceContent, SourceFile};
use crate::reporter;
use crate::scanner;

/// Run one extraction: load and validate configuration, scan the sources,
/// feed them sequentially through the pipeline, then flush the catalogs.
pub fn run(args: ExtractArgs) -> Result<ExitStatus> {
    let verbose = args.common.verbose;

    let loaded = config::load_config(&env::current_dir()?)?;
    let mut config = loaded.config;
    apply_overrides(&mut config, &args);
    config.validate()?;

    if verbose && !loaded.from_file {
        eprintln!(
            "No {} found, using defaults and command-line flags",
            config::CONFIG_FILE_NAME
        );
    }

    // The pipeline compiles the pattern table up front, so a bad custom
    // pattern aborts before any file is read.
    let mut pipeline = ExtractionPipeline::new(&config, verbose)?;

    let scan = scanner::scan_files(&config.source_root, &config.includes, &config.ignores, verbose);
    for path in &scan.files {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;
        let content = if bytes.is_empty() {
            SourceContent::Empty
        } else {
            SourceContent::Buffered(String::from_utf8_lossy(&bytes).into_owned())
        };
        pipeline.process(SourceFile {
            path: path.clone(),
            content,
        })?;
    }

    let Some(report) = pipeline.finish() else {
        reporter::print_nothing_extracted(scan.files.len());
        return Ok(ExitStatus::Failure);
    };

    for warning in &report.warnings {
        reporter::print_file_warning(warning);
    }

    let plan = emit::plan(&report.flat, &config)?;
    for warning in &plan.warnings {
        reporter::print_warning(warning);
    }
    emit::write(&plan.artifacts)?;

    reporter::print_summary(&report, &plan.artifacts);

    Ok(ExitStatus::Success)
}

fn apply_overrides(config: &mut Config, args: &ExtractArgs) {
    if !args.lang.is_empty() {
        config.lang = args.lang.clone();
    }
    if let Some(destination) = &args.destination {
        config.destination = destination.display().to_string();
    }
    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }
    if let Some(suffix) = &args.suffix {
        config.suffix = suffix.clone();
    }
    if let Some(default_lang) = &args.default_lang {
        config.default_lang = Some(default_lang.clone());
    }
    if let Some(source_root) = &args.common.source_root {
        config.source_root = source_root.display().to_string();
    }
    if args.namespace {
        config.namespace = true;
    }
    if args.null_empty {
        config.null_empty = true;
    }
    if args.safe_mode {
        config.safe_mode = true;
    }
}
