use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::aggregate::FlatTranslations;
use crate::config::Config;
use crate::serialize::{self, SerializeOptions};
use crate::tree;

/// One planned output file.
#[derive(Debug)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug)]
pub struct EmitPlan {
    pub artifacts: Vec<Artifact>,
    pub warnings: Vec<String>,
}

/// Lay out one artifact per configured language.
///
/// Every artifact carries the identical key set. When `nullEmpty` is on,
/// empty leaves are replaced by their dotted path; with `defaultLang` set,
/// only that language's artifact receives the fill.
///
/// Serialization happens here, before any file is touched, so a
/// serialization failure can never leave partial output behind.
pub fn plan(flat: &FlatTranslations, config: &Config) -> Result<EmitPlan> {
    let options = SerializeOptions::from_config(config.stringify_options.as_ref());
    let outcome = tree::build(flat, config.namespace);

    let plain = serialize::serialize(&outcome.tree, &options)?;
    let filled = if config.null_empty {
        let mut filled_tree = outcome.tree.clone();
        tree::fill_empty_leaves(&mut filled_tree);
        Some(serialize::serialize(&filled_tree, &options)?)
    } else {
        None
    };

    let destination = PathBuf::from(&config.destination);
    let mut artifacts = Vec::with_capacity(config.lang.len());
    for lang in &config.lang {
        let content = match (&filled, &config.default_lang) {
            (Some(filled), Some(default)) if lang == default => filled.clone(),
            (Some(filled), None) => filled.clone(),
            _ => plain.clone(),
        };
        let file_name = format!("{}{}{}", config.prefix, lang, config.suffix);
        artifacts.push(Artifact {
            path: destination.join(file_name),
            content,
        });
    }

    Ok(EmitPlan {
        artifacts,
        warnings: outcome.warnings,
    })
}

/// Write every artifact, all-or-nothing: on a mid-write failure the
/// artifacts already written in this run are removed before the error
/// propagates, so either all `lang` artifacts exist or none do.
pub fn write(artifacts: &[Artifact]) -> Result<()> {
    let mut written: Vec<&PathBuf> = Vec::new();

    for artifact in artifacts {
        if let Err(err) = write_one(artifact) {
            for path in written {
                let _ = fs::remove_file(path);
            }
            return Err(err);
        }
        written.push(&artifact.path);
    }

    Ok(())
}

fn write_one(artifact: &Artifact) -> Result<()> {
    if let Some(parent) = artifact.path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&artifact.path, format!("{}\n", artifact.content))
        .with_context(|| format!("Failed to write artifact: {}", artifact.path.display()))
}
