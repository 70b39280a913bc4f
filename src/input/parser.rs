//! Command parser for `<command> <object> [on <object>]` input.
//!
//! Examples (with an English dictionary):
//!   "x fridge"                   -> Verb::Examine, object="fridge"
//!   "go n"                       -> Verb::Go, object="north"
//!   "use key on oak door"        -> Verb::Use, object="key", target="oak door"
//!   "i"                          -> Verb::Inventory
//!
//! The first word goes through the dictionary's shortcut table and is then matched against
//! the localized command words. Everything after it is lower-cased and joined back with
//! single spaces. No other normalization happens: double spaces survive as empty words.

use crate::error::{AppResult, GameError};
use crate::models::dictionary::Dictionary;
use crate::models::types::CommandKey;

/// Separates the acting item from its target in `use` commands.
pub const USE_SEPARATOR: &str = " on ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Go,
    Examine,
    Open,
    Take,
    Use,
    Inventory,
    Help,
    Refresh,
    Save,
    Load,
    Quit,
    /// Word not in the dictionary's command table
    Custom(String),
}

impl From<CommandKey> for Verb {
    fn from(key: CommandKey) -> Self {
        match key {
            CommandKey::Go => Verb::Go,
            CommandKey::Examine => Verb::Examine,
            CommandKey::Open => Verb::Open,
            CommandKey::Take => Verb::Take,
            CommandKey::Use => Verb::Use,
            CommandKey::Inventory => Verb::Inventory,
            CommandKey::Help => Verb::Help,
            CommandKey::Refresh => Verb::Refresh,
            CommandKey::Save => Verb::Save,
            CommandKey::Load => Verb::Load,
            CommandKey::Quit => Verb::Quit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Intent {
    pub verb: Verb,
    /// The input line as typed
    pub original: String,
    /// Command word after shortcut expansion
    pub command: String,
    /// Everything after the command, lower-cased (may be empty)
    pub object: String,
    /// Target of `use <object> on <target>`
    pub target: Option<String>,
}

pub fn parse_command(input: &str, dict: &Dictionary) -> AppResult<Intent> {
    if input.is_empty() {
        return Err(GameError::InvalidCommand(input.to_string()));
    }

    let words: Vec<&str> = input.split(' ').collect();
    let command = dict
        .expand_shortcut(words[0])
        .unwrap_or_else(|| words[0].to_string());
    let verb = dict
        .command_key(&command)
        .map(Verb::from)
        .unwrap_or_else(|| Verb::Custom(command.clone()));

    let mut object = String::new();
    let mut target = None;

    if words.len() > 1 {
        object = words[1..].join(" ").to_lowercase();

        if verb == Verb::Use && words.len() >= 4 {
            let parts: Vec<&str> = object.split(USE_SEPARATOR).collect();
            let [item, on] = parts.as_slice() else {
                return Err(GameError::InvalidCommand(input.to_string()));
            };
            target = Some(on.to_string());
            object = item.to_string();
        }

        if matches!(verb, Verb::Go | Verb::Examine) {
            if let Some(direction) = dict.expand_direction(&object) {
                object = direction;
            }
        }
    }

    Ok(Intent {
        verb,
        original: input.to_string(),
        command,
        object,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dictionary::{COMMANDS, DIRECTIONS, SHORTCUTS};

    fn english() -> Dictionary {
        let mut d = Dictionary::new();
        for key in CommandKey::ALL {
            d.insert(COMMANDS, key.as_str(), key.as_str());
        }
        d.insert(SHORTCUTS, "n", "go");
        d.insert(SHORTCUTS, "g", "go");
        d.insert(SHORTCUTS, "x", "examine");
        d.insert(SHORTCUTS, "i", "inventory");
        d.insert(SHORTCUTS, "u", "use");
        d.insert(DIRECTIONS, "n", "north");
        d.insert(DIRECTIONS, "e", "east");
        d
    }

    fn spanish() -> Dictionary {
        let mut d = Dictionary::new();
        d.insert(COMMANDS, "go", "ir");
        d.insert(COMMANDS, "use", "usar");
        d.insert(SHORTCUTS, "i", "ir");
        d.insert(DIRECTIONS, "n", "norte");
        d
    }

    #[test]
    fn t_examine_shortcut() {
        let i = parse_command("x Fridge", &english()).unwrap();
        assert_eq!(i.verb, Verb::Examine);
        assert_eq!(i.object, "fridge");
        assert!(i.target.is_none());
    }

    #[test]
    fn t_go_expands_direction() {
        let i = parse_command("go n", &english()).unwrap();
        assert_eq!(i.verb, Verb::Go);
        assert_eq!(i.object, "north");

        let i = parse_command("g E", &english()).unwrap();
        assert_eq!(i.object, "east");
    }

    #[test]
    fn t_go_unknown_direction_passes_through() {
        let i = parse_command("go oak door", &english()).unwrap();
        assert_eq!(i.object, "oak door");
    }

    #[test]
    fn t_directions_only_for_go_and_examine() {
        let i = parse_command("open n", &english()).unwrap();
        assert_eq!(i.verb, Verb::Open);
        assert_eq!(i.object, "n");

        let i = parse_command("x e", &english()).unwrap();
        assert_eq!(i.object, "east");
    }

    #[test]
    fn t_use_on_target() {
        let i = parse_command("use rusty key on Oak Door", &english()).unwrap();
        assert_eq!(i.verb, Verb::Use);
        assert_eq!(i.object, "rusty key");
        assert_eq!(i.target.as_deref(), Some("oak door"));
    }

    #[test]
    fn t_use_short_forms_keep_whole_object() {
        let i = parse_command("u lamp", &english()).unwrap();
        assert_eq!(i.verb, Verb::Use);
        assert_eq!(i.object, "lamp");
        assert!(i.target.is_none());

        // three words never split
        let i = parse_command("use key on", &english()).unwrap();
        assert_eq!(i.object, "key on");
        assert!(i.target.is_none());
    }

    #[test]
    fn t_use_without_single_separator_is_invalid() {
        let err = parse_command("use big rusty key", &english()).unwrap_err();
        assert!(matches!(err, GameError::InvalidCommand(ref s) if s == "use big rusty key"));

        let err = parse_command("use a on b on c", &english()).unwrap_err();
        assert!(matches!(err, GameError::InvalidCommand(_)));
    }

    #[test]
    fn t_empty_input_is_invalid() {
        assert!(matches!(parse_command("", &english()), Err(GameError::InvalidCommand(_))));
    }

    #[test]
    fn t_unknown_command_is_custom() {
        let i = parse_command("frobnicate", &english()).unwrap();
        assert_eq!(i.verb, Verb::Custom("frobnicate".into()));
        assert_eq!(i.original, "frobnicate");
        assert_eq!(i.object, "");
    }

    #[test]
    fn t_double_spaces_are_not_collapsed() {
        let i = parse_command("x  fridge", &english()).unwrap();
        assert_eq!(i.object, " fridge");
    }

    #[test]
    fn t_command_words_ignore_case() {
        let i = parse_command("INVENTORY", &english()).unwrap();
        assert_eq!(i.verb, Verb::Inventory);
        let i = parse_command("I", &english()).unwrap();
        assert_eq!(i.verb, Verb::Inventory);
    }

    #[test]
    fn t_localized_dictionary() {
        let i = parse_command("i n", &spanish()).unwrap();
        assert_eq!(i.verb, Verb::Go);
        assert_eq!(i.command, "ir");
        assert_eq!(i.object, "norte");

        // English words mean nothing once the dictionary renames them
        let i = parse_command("go n", &spanish()).unwrap();
        assert_eq!(i.verb, Verb::Custom("go".into()));
    }
}
