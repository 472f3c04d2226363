use crate::patterns::{CaptureKind, PatternDefinition, QuoteStyle};

/// Result of extracting one file.
///
/// `pairs` holds every recovered (key, default value) pair in pattern-table
/// order. Warnings are recoverable anomalies (malformed plural hints); they
/// never abort extraction.
#[derive(Debug, Default)]
pub struct ExtractOutcome {
    pub pairs: Vec<(String, String)>,
    pub warnings: Vec<String>,
}

/// Run every pattern in the table against one file's text and recover the
/// candidate keys and default values.
///
/// The result is the union of everything any pattern recognizes; overlapping
/// matches from different patterns are deliberately not deduplicated here.
pub fn extract(table: &[PatternDefinition], content: &str) -> ExtractOutcome {
    let mut out = ExtractOutcome::default();
    for def in table {
        apply(def, content, &mut out);
    }
    out
}

/// Apply one pattern to the text, appending recovered pairs to `out`.
pub fn apply(def: &PatternDefinition, content: &str, out: &mut ExtractOutcome) {
    if def.rescan {
        // Collect top-level regions first, then re-match each region on
        // its own, so one match's groups never bleed into a neighbor's.
        let regions: Vec<&str> = def.regex.find_iter(content).map(|m| m.as_str()).collect();
        for region in regions {
            if let Some(caps) = def.regex.captures(region) {
                handle_match(def, &caps, out);
            }
        }
    } else {
        for caps in def.regex.captures_iter(content) {
            handle_match(def, &caps, out);
        }
    }
}

fn handle_match(def: &PatternDefinition, caps: &regex::Captures<'_>, out: &mut ExtractOutcome) {
    // Normalize group order so the key is always first and the plural hint
    // second, whichever attribute appeared first in the source.
    let (raw_key, raw_hint) = match def.capture {
        CaptureKind::Key => (caps.get(1), None),
        CaptureKind::PluralKeyFirst => (caps.get(1), caps.get(2)),
        CaptureKind::PluralHintFirst => (caps.get(2), caps.get(1)),
        CaptureKind::Batch => {
            if let Some(array) = caps.get(1) {
                extract_batch(def, array.as_str(), out);
            }
            return;
        }
    };

    let Some(raw_key) = raw_key else {
        return;
    };
    let key = unescape_quotes(raw_key.as_str(), def.quote);
    let key = key.trim();
    // Empty candidate: drop this match only, keep scanning the rest.
    if key.is_empty() {
        return;
    }

    let value = match raw_hint {
        Some(hint) => plural_template(hint.as_str(), key, out),
        None => String::new(),
    };
    out.pairs.push((key.to_string(), value));
}

/// One batch call carries a literal array of keys; each non-empty element
/// becomes an independent key with an empty default. The array text itself
/// never becomes a key.
fn extract_batch(def: &PatternDefinition, array_text: &str, out: &mut ExtractOutcome) {
    match parse_string_array(array_text) {
        Ok(items) => {
            for item in items {
                let item = item.trim();
                if item.is_empty() {
                    continue;
                }
                out.pairs.push((item.to_string(), String::new()));
            }
        }
        Err(err) => out.warnings.push(format!(
            "Ignoring malformed key array matched by '{}': {}",
            def.name, err
        )),
    }
}

/// Synthesize an ICU-style plural template from a 2-3 element hint array.
/// Anything else keeps the key with an empty default and records a warning.
fn plural_template(hint_text: &str, key: &str, out: &mut ExtractOutcome) -> String {
    match parse_string_array(hint_text) {
        Ok(items) if items.len() == 2 || items.len() == 3 => {
            let mut template = format!("{{NB, plural, one{{{}}} other{{{}}}", items[0], items[1]);
            if let Some(third) = items.get(2) {
                template.push(' ');
                template.push_str(third);
            }
            template.push('}');
            template
        }
        Ok(items) => {
            out.warnings.push(format!(
                "Plural hint for key '{}' has {} element(s), expected 2 or 3",
                key,
                items.len()
            ));
            String::new()
        }
        Err(err) => {
            out.warnings
                .push(format!("Malformed plural hint for key '{}': {}", key, err));
            String::new()
        }
    }
}

fn unescape_quotes(raw: &str, quote: QuoteStyle) -> String {
    match quote {
        QuoteStyle::Single => raw.replace("\\'", "'"),
        QuoteStyle::Double => raw.replace("\\\"", "\""),
        QuoteStyle::None => raw.to_string(),
    }
}

/// Parse a literal array of quoted strings: `['a', "b, c"]`.
///
/// Only quoted elements separated by commas inside brackets are accepted.
/// Backslash escapes inside a literal are unescaped. The text is never
/// evaluated as code.
pub fn parse_string_array(text: &str) -> Result<Vec<String>, String> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| "expected a bracketed array".to_string())?;

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(&quote) = chars.peek() else { break };
        if quote != '\'' && quote != '"' {
            return Err(format!("expected a quoted element, found '{}'", quote));
        }
        chars.next();

        let mut item = String::new();
        loop {
            match chars.next() {
                Some('\\') => match chars.next() {
                    Some(escaped) => item.push(escaped),
                    None => return Err("unterminated escape sequence".to_string()),
                },
                Some(c) if c == quote => break,
                Some(c) => item.push(c),
                None => return Err("unterminated string literal".to_string()),
            }
        }
        items.push(item);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            Some(',') => continue,
            None => break,
            Some(c) => return Err(format!("expected ',' between elements, found '{}'", c)),
        }
    }

    Ok(items)
}
