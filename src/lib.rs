//! Glean - translation key extractor for angular-translate
//!
//! Glean is a CLI tool and library for extracting translation keys from
//! AngularJS projects using angular-translate. It scans HTML templates and
//! JavaScript sources for every recognized usage form (directive attributes,
//! interpolation filters, `$translate` service calls, comment-marked literals,
//! plural-form hints) and writes one JSON catalog per target language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `commands`: Command implementations (`extract`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `patterns`: The table of recognized extraction patterns
//! - `extract`: Per-file key/value recovery
//! - `aggregate`: Cross-file key accumulation
//! - `tree`: Namespace tree construction
//! - `serialize`: Deterministic catalog serialization
//! - `emit`: Per-language artifact output
//! - `pipeline`: The sequential extraction session
//! - `scanner`: Source file discovery
//! - `reporter`: Terminal output formatting

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod emit;
pub mod extract;
pub mod patterns;
pub mod pipeline;
pub mod reporter;
pub mod scanner;
pub mod serialize;
pub mod tree;
