use anyhow::{Context, Result, bail};
use regex::{Regex, RegexBuilder};

use crate::config::{CustomPattern, Interpolation};

/// Namespace prefix for caller-supplied patterns.
pub const CUSTOM_PATTERN_PREFIX: &str = "others_";

/// Which quote character wraps a pattern's key capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Single,
    Double,
    /// Unquoted capture (element content, custom patterns). The key passes
    /// through unmodified aside from trimming.
    None,
}

/// What the capture groups of a pattern hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    /// Group 1 holds the key.
    Key,
    /// Group 1 holds the key, group 2 a literal array of plural forms.
    PluralKeyFirst,
    /// Group 1 holds the literal array, group 2 the key.
    PluralHintFirst,
    /// Group 1 holds a literal array of keys.
    Batch,
}

/// One recognized usage pattern. Definitions are built once per run and
/// immutable afterwards; `regex::Regex` holds no match cursor, so a
/// definition can be reused across files without reset.
#[derive(Debug)]
pub struct PatternDefinition {
    pub name: String,
    pub regex: Regex,
    pub capture: CaptureKind,
    pub quote: QuoteStyle,
    /// The matched region can itself contain another pattern's delimiters.
    /// Capture groups are recovered by re-matching each region individually
    /// instead of trusting groups from the full-text scan.
    pub rescan: bool,
}

struct BuiltinDef {
    name: &'static str,
    /// Regex source; `%start%` / `%end%` are replaced with the escaped
    /// interpolation delimiters before compilation.
    template: &'static str,
    capture: CaptureKind,
    quote: QuoteStyle,
    rescan: bool,
}

// The built-in table, in application order. Quoted captures accept escaped
// characters inside the literal: `(?:\\.|[^'\\])*`.
const BUILTINS: &[BuiltinDef] = &[
    BuiltinDef {
        name: "comment_single",
        template: r#"/\*\s*i18nextract\s*\*/'((?:\\.|[^'\\])*)'"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Single,
        rescan: false,
    },
    BuiltinDef {
        name: "comment_double",
        template: r#"/\*\s*i18nextract\s*\*/"((?:\\.|[^"\\])*)""#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Double,
        rescan: false,
    },
    BuiltinDef {
        name: "filter_single",
        template: r#"%start%\s*'((?:\\.|[^'\\])*)'\s*\|\s*translate(:.*?)?\s*%end%"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Single,
        rescan: false,
    },
    BuiltinDef {
        name: "filter_double",
        template: r#"%start%\s*"((?:\\.|[^"\\])*)"\s*\|\s*translate(:.*?)?\s*%end%"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Double,
        rescan: false,
    },
    BuiltinDef {
        name: "directive_content",
        template: r#"<[^>]*translate[^{>]*>([^<]*)</[^>]*>"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::None,
        rescan: true,
    },
    BuiltinDef {
        name: "directive_standalone",
        template: r#"translate="((?:\\.|[^"\\])*)""#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Double,
        rescan: false,
    },
    BuiltinDef {
        name: "directive_plural_key_first",
        template: r#"translate="((?:\\.|[^"\\])*)".*angular-plural-extract="((?:\\.|[^"\\])*)""#,
        capture: CaptureKind::PluralKeyFirst,
        quote: QuoteStyle::Double,
        rescan: true,
    },
    BuiltinDef {
        name: "directive_plural_hint_first",
        template: r#"angular-plural-extract="((?:\\.|[^"\\])*)".*translate="((?:\\.|[^"\\])*)""#,
        capture: CaptureKind::PluralHintFirst,
        quote: QuoteStyle::Double,
        rescan: true,
    },
    BuiltinDef {
        name: "bind_html",
        template: r#"ng-bind-html="\s*'((?:\\.|[^'\\])*)'\s*\|\s*translate(:.*?)?\s*""#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Single,
        rescan: false,
    },
    BuiltinDef {
        name: "service_single",
        template: r#"\$translate\(\s*'((?:\\.|[^'\\])*)'[^)]*\)"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Single,
        rescan: false,
    },
    BuiltinDef {
        name: "service_double",
        template: r#"\$translate\(\s*"((?:\\.|[^"\\])*)"[^)]*\)"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Double,
        rescan: false,
    },
    BuiltinDef {
        name: "service_array_single",
        template: r#"\$translate\(\s*(\[\s*(?:'(?:\\.|[^'\\])*'\s*,?\s*)+\])\s*\)"#,
        capture: CaptureKind::Batch,
        quote: QuoteStyle::Single,
        rescan: false,
    },
    BuiltinDef {
        name: "service_array_double",
        template: r#"\$translate\(\s*(\[\s*(?:"(?:\\.|[^"\\])*"\s*,?\s*)+\])\s*\)"#,
        capture: CaptureKind::Batch,
        quote: QuoteStyle::Double,
        rescan: false,
    },
    BuiltinDef {
        name: "service_instant_single",
        template: r#"\$translate\.instant\(\s*'((?:\\.|[^'\\])*)'[^)]*\)"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Single,
        rescan: false,
    },
    BuiltinDef {
        name: "service_instant_double",
        template: r#"\$translate\.instant\(\s*"((?:\\.|[^"\\])*)"[^)]*\)"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Double,
        rescan: false,
    },
    BuiltinDef {
        name: "filter_call_single",
        template: r#"\$filter\(\s*'translate'\s*\)\s*\(\s*'((?:\\.|[^'\\])*)'[^)]*\)"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Single,
        rescan: true,
    },
    BuiltinDef {
        name: "filter_call_double",
        template: r#"\$filter\(\s*"translate"\s*\)\s*\(\s*"((?:\\.|[^"\\])*)"[^)]*\)"#,
        capture: CaptureKind::Key,
        quote: QuoteStyle::Double,
        rescan: true,
    },
];

/// Build the ordered pattern table for a run: the built-ins with the
/// configured delimiters substituted in, followed by every custom pattern
/// under the `others_` namespace.
pub fn build_pattern_table(
    interpolation: &Interpolation,
    custom: &[CustomPattern],
) -> Result<Vec<PatternDefinition>> {
    let start = regex::escape(&interpolation.start_delimiter);
    let end = regex::escape(&interpolation.end_delimiter);

    let mut table = Vec::with_capacity(BUILTINS.len() + custom.len());

    for builtin in BUILTINS {
        let source = builtin
            .template
            .replace("%start%", &start)
            .replace("%end%", &end);
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Failed to compile built-in pattern '{}'", builtin.name))?;
        table.push(PatternDefinition {
            name: builtin.name.to_string(),
            regex,
            capture: builtin.capture,
            quote: builtin.quote,
            rescan: builtin.rescan,
        });
    }

    for pattern in custom {
        let name = format!("{}{}", CUSTOM_PATTERN_PREFIX, pattern.name);
        if table.iter().any(|def| def.name == name) {
            bail!("Duplicate pattern name '{}' in 'customRegex'", pattern.name);
        }
        let regex = RegexBuilder::new(&pattern.pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| {
                format!(
                    "Invalid pattern '{}' in 'customRegex': \"{}\"",
                    pattern.name, pattern.pattern
                )
            })?;
        table.push(PatternDefinition {
            name,
            regex,
            capture: CaptureKind::Key,
            quote: QuoteStyle::None,
            rescan: false,
        });
    }

    Ok(table)
}
