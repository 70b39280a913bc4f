use serde::{Deserialize, Serialize};

/// Numeric room identifier as stored in world definitions and save slots.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub i64);

impl core::fmt::Display for RoomId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RoomId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

/// Case-insensitive name comparison used for items, exits and directions.
///
/// World content may be localized, so this folds full Unicode case rather than ASCII only.
#[inline]
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Canonical command keys as used in the `commands` table of the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommandKey {
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
}

impl CommandKey {
    pub const ALL: [CommandKey; 11] = [
        CommandKey::Go,
        CommandKey::Examine,
        CommandKey::Open,
        CommandKey::Take,
        CommandKey::Use,
        CommandKey::Inventory,
        CommandKey::Help,
        CommandKey::Refresh,
        CommandKey::Save,
        CommandKey::Load,
        CommandKey::Quit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKey::Go => "go",
            CommandKey::Examine => "examine",
            CommandKey::Open => "open",
            CommandKey::Take => "take",
            CommandKey::Use => "use",
            CommandKey::Inventory => "inventory",
            CommandKey::Help => "help",
            CommandKey::Refresh => "refresh",
            CommandKey::Save => "save",
            CommandKey::Load => "load",
            CommandKey::Quit => "quit",
        }
    }
}

impl core::fmt::Display for CommandKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_folds_case() {
        assert!(names_match("Fridge", "fridge"));
        assert!(names_match("PUERTA", "puerta"));
        assert!(names_match("Ñandú", "ñandú"));
        assert!(!names_match("fridge", "fridges"));
    }

    #[test]
    fn room_id_is_transparent_in_yaml() {
        let id: RoomId = serde_yaml::from_str("7").unwrap();
        assert_eq!(id, RoomId(7));
        assert_eq!(serde_yaml::to_string(&id).unwrap().trim(), "7");
    }
}
