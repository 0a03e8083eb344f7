//! Label/value extraction over free-text model output.
//!
//! The grammar is a small ordered list of [`FieldRule`]s. Each rule owns the
//! label aliases for one [`FieldKey`]; every alias compiles to the same shape
//! of pattern:
//!
//! ```text
//! <label> [^:\n]* [:\- \t]+ ( [A-Za-z0-9 \t,./()\-]+ )
//! ```
//!
//! The label is matched case-insensitively anywhere in the text. Separator
//! and value classes are limited to horizontal whitespace so a value never
//! runs across a line break into the next field's label.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::fields::{ExtractedFields, FieldKey, NOT_FOUND};

/// Characters allowed between the label and the separator run.
const INTERVENING: &str = r"[^:\n]*";
/// Separator run between label and value.
const SEPARATOR: &str = r"[:\- \t]+";
/// Characters a captured value may contain.
const VALUE: &str = r"[A-Za-z0-9 \t,./()\-]+";

/// Markdown emphasis that vision models like to wrap labels in
/// (`**Name:** Paracetamol`). Only runs touching a line edge, whitespace or
/// a colon are removed, so a `*` inside a value still ends the value.
static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^|[\s:])[*`]+|[*`]+([\s:]|$)").expect("valid regex")
});

static DEFAULT_GRAMMAR: LazyLock<ExtractionGrammar> = LazyLock::new(|| {
    let rules = FieldKey::ALL
        .iter()
        .map(|key| {
            FieldRule::new(*key, [key.default_label()]).expect("default labels are valid patterns")
        })
        .collect();
    ExtractionGrammar { rules }
});

/// Extracts `key` from `text` using the default grammar.
///
/// Returns the trimmed value of the first match, or [`NOT_FOUND`].
#[must_use]
pub fn extract(key: FieldKey, text: &str) -> String {
    ExtractionGrammar::default_grammar().extract(key, text)
}

/// Label aliases for one field, compiled to patterns.
#[derive(Debug, Clone)]
pub struct FieldRule {
    key: FieldKey,
    patterns: Vec<(String, Regex)>,
}

impl FieldRule {
    /// Builds a rule for `key` from one or more label aliases, tried in the
    /// given order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyRule`] if `aliases` is empty or contains only
    /// blank labels, and [`CoreError::InvalidLabel`] if a pattern fails to
    /// compile.
    pub fn new<I, S>(key: FieldKey, aliases: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rule = Self {
            key,
            patterns: Vec::new(),
        };
        for alias in aliases {
            rule.push_alias(alias.as_ref())?;
        }
        if rule.patterns.is_empty() {
            return Err(CoreError::EmptyRule(key.to_string()));
        }
        Ok(rule)
    }

    #[must_use]
    pub fn key(&self) -> FieldKey {
        self.key
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(alias, _)| alias.as_str())
    }

    fn push_alias(&mut self, alias: &str) -> Result<(), CoreError> {
        let alias = alias.trim();
        if alias.is_empty() {
            return Ok(());
        }
        let pattern = format!(
            "(?i:{label}){INTERVENING}{SEPARATOR}({VALUE})",
            label = regex::escape(alias)
        );
        let regex = Regex::new(&pattern).map_err(|source| CoreError::InvalidLabel {
            label: alias.to_string(),
            source,
        })?;
        self.patterns.push((alias.to_string(), regex));
        Ok(())
    }

    /// First capture of the first alias that matches anywhere in `text`.
    fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.patterns.iter().find_map(|(_, regex)| {
            regex
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })
    }
}

/// An ordered set of [`FieldRule`]s, at most one per [`FieldKey`].
#[derive(Debug, Clone)]
pub struct ExtractionGrammar {
    rules: Vec<FieldRule>,
}

impl Default for ExtractionGrammar {
    fn default() -> Self {
        Self::default_grammar().clone()
    }
}

impl ExtractionGrammar {
    /// The shared grammar with one English label per field.
    #[must_use]
    pub fn default_grammar() -> &'static ExtractionGrammar {
        &DEFAULT_GRAMMAR
    }

    /// Builds a grammar from explicit rules. A later rule for the same key
    /// replaces an earlier one.
    #[must_use]
    pub fn new(rules: Vec<FieldRule>) -> Self {
        let mut grammar = Self { rules: Vec::new() };
        for rule in rules {
            grammar.rules.retain(|r| r.key != rule.key);
            grammar.rules.push(rule);
        }
        grammar
    }

    /// Appends aliases to the rule for `key`, creating the rule if missing.
    /// Existing aliases keep priority.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLabel`] if an alias fails to compile, or
    /// [`CoreError::EmptyRule`] if a new rule would end up without aliases.
    pub fn with_aliases<I, S>(mut self, key: FieldKey, aliases: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.key == key) {
            for alias in aliases {
                rule.push_alias(alias.as_ref())?;
            }
        } else {
            self.rules.push(FieldRule::new(key, aliases)?);
        }
        Ok(self)
    }

    #[must_use]
    pub fn rule(&self, key: FieldKey) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.key == key)
    }

    /// Extracts one field. Never fails: no rule, no match, or a blank capture
    /// all produce [`NOT_FOUND`].
    #[must_use]
    pub fn extract(&self, key: FieldKey, text: &str) -> String {
        let Some(rule) = self.rule(key) else {
            return NOT_FOUND.to_string();
        };
        let normalized = strip_markup(text);
        match rule.capture(&normalized).map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => NOT_FOUND.to_string(),
        }
    }

    /// Extracts every field in [`FieldKey::ALL`].
    #[must_use]
    pub fn extract_all(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            name: self.extract(FieldKey::Name, text),
            expiry: self.extract(FieldKey::Expiry, text),
            batch_number: self.extract(FieldKey::BatchNumber, text),
            manufacturer: self.extract(FieldKey::Manufacturer, text),
        }
    }
}

fn strip_markup(text: &str) -> Cow<'_, str> {
    EMPHASIS_RE.replace_all(text, "${1}${2}")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
