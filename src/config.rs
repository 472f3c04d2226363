use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".gleanrc.json";

/// Source file extensions that participate in extraction.
pub const SOURCE_EXTENSIONS: &[&str] = &["html", "htm", "js"];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Target language codes. One catalog artifact is written per entry.
    #[serde(default)]
    pub lang: Vec<String>,
    /// Output directory for the emitted catalogs.
    #[serde(default = "default_destination")]
    pub destination: String,
    /// Filename decoration before the language code.
    #[serde(default)]
    pub prefix: String,
    /// Filename decoration after the language code.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Language whose catalog receives empty-leaf path filling when
    /// `nullEmpty` is on. Unset means the fill applies to every catalog.
    #[serde(default)]
    pub default_lang: Option<String>,
    #[serde(default)]
    pub interpolation: Interpolation,
    /// Reshape dotted keys into a nested namespace tree.
    #[serde(default)]
    pub namespace: bool,
    /// Replace empty leaf values with their fully-qualified dotted path.
    #[serde(default)]
    pub null_empty: bool,
    /// Reserved tolerance toggle. Recoverable extraction anomalies never
    /// abort a run regardless of this flag.
    #[serde(default)]
    pub safe_mode: bool,
    /// Extra extraction patterns, registered under the `others_` namespace.
    #[serde(default)]
    pub custom_regex: Vec<CustomPattern>,
    #[serde(default)]
    pub stringify_options: Option<StringifyOptions>,
    /// Root directory the scanner walks for source files.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Directories or glob patterns to scan. Empty means the whole source root.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

/// Interpolation delimiters substituted into the filter-usage patterns.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpolation {
    #[serde(default = "default_start_delimiter")]
    pub start_delimiter: String,
    #[serde(default = "default_end_delimiter")]
    pub end_delimiter: String,
}

impl Default for Interpolation {
    fn default() -> Self {
        Self {
            start_delimiter: default_start_delimiter(),
            end_delimiter: default_end_delimiter(),
        }
    }
}

/// A caller-supplied extraction pattern. The key is expected in capture
/// group 1; no quote or plural handling is applied.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPattern {
    pub name: String,
    pub pattern: String,
}

/// Serializer overrides. Absent fields keep the defaults (4-space indent,
/// case-insensitive key ordering).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringifyOptions {
    #[serde(default)]
    pub indent: Option<usize>,
    #[serde(default)]
    pub key_order: Option<KeyOrderName>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyOrderName {
    CaseInsensitive,
    CaseSensitive,
    Insertion,
}

fn default_destination() -> String {
    ".".to_string()
}

fn default_suffix() -> String {
    ".json".to_string()
}

fn default_start_delimiter() -> String {
    "{{".to_string()
}

fn default_end_delimiter() -> String {
    "}}".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignores() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/bower_components/**",
        "**/dist/**",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: Vec::new(),
            destination: default_destination(),
            prefix: String::new(),
            suffix: default_suffix(),
            default_lang: None,
            interpolation: Interpolation::default(),
            namespace: false,
            null_empty: false,
            safe_mode: false,
            custom_regex: Vec::new(),
            stringify_options: None,
            source_root: default_source_root(),
            includes: Vec::new(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Fails fast, before any file is processed: an empty `lang` list, a
    /// blank language code, an unnamed custom pattern, or an invalid glob
    /// is a fatal configuration error.
    pub fn validate(&self) -> Result<()> {
        if self.lang.is_empty() {
            bail!("Param 'lang' required: provide at least one target language");
        }
        for code in &self.lang {
            if code.trim().is_empty() {
                bail!("Param 'lang' contains an empty language code");
            }
        }

        for custom in &self.custom_regex {
            if custom.name.trim().is_empty() {
                bail!("Param 'customRegex' contains a pattern without a name");
            }
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Include patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

/// Starter configuration written by `glean init`.
pub fn default_config_json() -> Result<String> {
    let config = Config {
        lang: vec!["en".to_string()],
        ..Config::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
