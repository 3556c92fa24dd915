/*!
 * Glossary substitution.
 *
 * A glossary is an ordered list of literal find/replace rules applied to the
 * whole source text before segmentation. The file format is a list of
 * `find:replace` entries separated by `,\r\n`.
 */

use log::{debug, warn};
use std::path::Path;

use crate::errors::TranslationError;

/// Separator between glossary entries
pub const ENTRY_SEPARATOR: &str = ",\r\n";

/// One literal substitution rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryRule {
    /// Text to look for
    pub find: String,
    /// Replacement text
    pub replace: String,
}

/// Ordered substitution rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    rules: Vec<GlossaryRule>,
}

impl Glossary {
    /// Create an empty glossary
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a glossary file. A missing file yields an empty glossary.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TranslationError> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!("No glossary at {:?}, skipping substitution", path);
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path).map_err(|e| TranslationError::Glossary {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let glossary = Self::parse(&content);
        debug!("Loaded {} glossary rules from {:?}", glossary.len(), path);
        Ok(glossary)
    }

    /// Parse glossary rules from file content
    pub fn parse(content: &str) -> Self {
        let mut rules = Vec::new();

        // Only the file-end terminator is dropped; values stay byte-exact
        let body = content
            .strip_suffix(ENTRY_SEPARATOR)
            .or_else(|| content.strip_suffix("\r\n"))
            .or_else(|| content.strip_suffix('\n'))
            .unwrap_or(content);

        for entry in body.split(ENTRY_SEPARATOR) {
            if entry.is_empty() {
                continue;
            }

            match entry.split_once(':') {
                Some((find, replace)) if !find.is_empty() => rules.push(GlossaryRule {
                    find: find.to_string(),
                    replace: replace.to_string(),
                }),
                _ => warn!("Skipping malformed glossary entry: {:?}", entry),
            }
        }

        Self { rules }
    }

    /// Add a rule at the end of the list
    pub fn add_rule(&mut self, find: impl Into<String>, replace: impl Into<String>) {
        self.rules.push(GlossaryRule {
            find: find.into(),
            replace: replace.into(),
        });
    }

    /// Apply every rule in order; later rules see the output of earlier ones
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| acc.replace(&rule.find, &rule.replace))
    }

    /// Rules in file order
    pub fn rules(&self) -> &[GlossaryRule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the glossary has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
