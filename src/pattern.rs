//! Annotation pattern registry and line matching.
//!
//! A pattern is a regular expression with exactly two capture groups:
//! group 1 is the annotation tag (e.g. `@TODO`, `FIXME`), group 2 the
//! free text after it. Users select one by registry name or supply a
//! literal regex with the same contract.

use anyhow::{bail, Context, Result};
use regex::Regex;

/// Built-in pattern registry: name -> regex source.
const BUILTINS: &[(&str, &str)] = &[
    ("alpha", r"^\s*(?://|#|/?\*|--)\s+(@[A-Z]+)\s(.*)"),
    ("todo", r"^\s*(?://|#|/?\*|--)\s+(TODO):?\s?(\S.*)"),
    (
        "common",
        r"^\s*(?://|#|/?\*|--)\s+(TODO|FIXME|XXX|BUG|HACK|NOTE|REVIEW|NB|IDEA|QUESTION|COMBAK|TEMP|DEBUG|OPTIMIZE|WARNING|ERROR|DEPRECATED|SECURITY):?\s?(\S.*)",
    ),
];

/// A compiled annotation matcher with the two-group contract verified.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Resolve a selector into a compiled pattern.
    ///
    /// A selector naming a registry entry (`alpha`, `todo`, `common`) uses
    /// that entry's expression; anything else is compiled literally.
    /// Rejects expressions whose capture-group count is not exactly two.
    pub fn resolve(selector: &str) -> Result<Pattern> {
        let source = BUILTINS
            .iter()
            .find(|(name, _)| *name == selector)
            .map(|(_, source)| *source)
            .unwrap_or(selector);

        let regex = Regex::new(source)
            .with_context(|| format!("invalid pattern {selector:?}"))?;

        // captures_len counts the implicit whole-match group.
        let groups = regex.captures_len() - 1;
        if groups != 2 {
            bail!("pattern {selector:?} has {groups} capture groups, expected 2 (tag, text)");
        }

        Ok(Pattern { regex })
    }

    /// Match one line, extracting `(tag, text)` on success.
    ///
    /// A match where either group did not participate breaks the
    /// two-group contract and is an error, not a silent skip.
    pub fn match_line(&self, line: &str) -> Result<Option<(String, String)>> {
        let Some(caps) = self.regex.captures(line) else {
            return Ok(None);
        };

        match (caps.get(1), caps.get(2)) {
            (Some(tag), Some(text)) => Ok(Some((tag.as_str().to_string(), text.as_str().to_string()))),
            _ => bail!(
                "pattern matched {line:?} without both capture groups; \
                 the (tag, text) contract requires two participating groups"
            ),
        }
    }
}
