//! Localized string tables injected with every world.
//!
//! The dictionary is a two-level map: category (`commands`, `shortcuts`, `directions`,
//! `strings`, `errors`, `helptext`) to token to text. Templates use positional `%s`
//! placeholders.

use crate::models::types::{CommandKey, names_match};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const COMMANDS: &str = "commands";
pub const SHORTCUTS: &str = "shortcuts";
pub const DIRECTIONS: &str = "directions";
pub const STRINGS: &str = "strings";
pub const ERRORS: &str = "errors";
pub const HELPTEXT: &str = "helptext";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    inner: HashMap<String, HashMap<String, String>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &str, key: impl Into<String>, value: impl Into<String>) {
        self.inner
            .entry(category.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Exact key lookup.
    pub fn get(&self, category: &str, key: &str) -> Option<&str> {
        self.inner.get(category)?.get(key).map(String::as_str)
    }

    /// Key lookup that ignores case. Exact matches win over folded ones.
    pub fn lookup(&self, category: &str, key: &str) -> Option<&str> {
        let table = self.inner.get(category)?;
        if let Some(v) = table.get(key) {
            return Some(v.as_str());
        }
        table
            .iter()
            .find(|(k, _)| names_match(k, key))
            .map(|(_, v)| v.as_str())
    }

    /// Text from a category, or `fallback` when the world does not define it.
    pub fn text<'a>(&'a self, category: &str, key: &str, fallback: &'a str) -> &'a str {
        self.get(category, key).unwrap_or(fallback)
    }

    /// Fills a `strings`/`errors` template with positional arguments.
    pub fn format(&self, category: &str, key: &str, fallback: &str, args: &[&str]) -> String {
        fill_placeholders(self.text(category, key, fallback), args)
    }

    /// Expands a shortcut token to its command word, lower-cased.
    pub fn expand_shortcut(&self, token: &str) -> Option<String> {
        self.lookup(SHORTCUTS, token)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Expands a direction alias (e.g. `n`) to its full direction, lower-cased.
    pub fn expand_direction(&self, token: &str) -> Option<String> {
        self.lookup(DIRECTIONS, token)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// The localized word the player types for a command.
    pub fn command_word(&self, key: &CommandKey) -> &str {
        self.text(COMMANDS, key.as_str(), key.as_str())
    }

    /// Maps a typed command word back to its canonical key.
    pub fn command_key(&self, word: &str) -> Option<CommandKey> {
        CommandKey::ALL
            .into_iter()
            .find(|key| names_match(self.command_word(key), word))
    }

    /// Shortcut table sorted by shortcut token, so listings never depend on map order.
    pub fn sorted_shortcuts(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .inner
            .get(SHORTCUTS)
            .map(|t| t.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect())
            .unwrap_or_default();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }
}

/// Replaces each `%s` in `template` with the next argument. Missing arguments render
/// as empty strings and `%%` renders a single `%`.
pub fn fill_placeholders(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                if let Some(arg) = args.next() {
                    out.push_str(arg);
                }
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        let mut d = Dictionary::new();
        d.insert(COMMANDS, "go", "Go");
        d.insert(COMMANDS, "examine", "examine");
        d.insert(SHORTCUTS, "n", "go");
        d.insert(SHORTCUTS, "x", "examine");
        d.insert(SHORTCUTS, "go", "go");
        d.insert(DIRECTIONS, "n", "North");
        d.insert(ERRORS, "noItem", "There is no %s in %s.");
        d
    }

    #[test]
    fn placeholders_are_positional() {
        assert_eq!(fill_placeholders("a %s b %s", &["1", "2"]), "a 1 b 2");
        assert_eq!(fill_placeholders("a %s b %s", &["1"]), "a 1 b ");
        assert_eq!(fill_placeholders("100%% sure", &[]), "100% sure");
        assert_eq!(fill_placeholders("50% off", &[]), "50% off");
    }

    #[test]
    fn lookups_ignore_case() {
        let d = dict();
        assert_eq!(d.expand_shortcut("X").as_deref(), Some("examine"));
        assert_eq!(d.expand_direction("N").as_deref(), Some("north"));
        assert_eq!(d.expand_shortcut("zz"), None);
        assert_eq!(d.command_key("GO"), Some(CommandKey::Go));
        assert_eq!(d.command_key("frobnicate"), None);
    }

    #[test]
    fn missing_command_words_default_to_keys() {
        let d = dict();
        assert_eq!(d.command_word(&CommandKey::Quit), "quit");
        assert_eq!(d.command_key("quit"), Some(CommandKey::Quit));
    }

    #[test]
    fn format_uses_fallback_when_missing() {
        let d = dict();
        assert_eq!(d.format(ERRORS, "noItem", "-", &["key", "Hall"]), "There is no key in Hall.");
        assert_eq!(d.format(ERRORS, "noExit", "No exit %s.", &["up"]), "No exit up.");
    }

    #[test]
    fn shortcuts_are_sorted() {
        let d = dict();
        let keys: Vec<&str> = d.sorted_shortcuts().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["go", "n", "x"]);
    }
}
