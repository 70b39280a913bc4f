use crate::models::container::ItemContainer;
use crate::models::unlock::Unlockable;
use serde::{Deserialize, Serialize};

/// An examinable object. Items may be locked, openable, takeable, useable, and may hold
/// other items; nested items are only visible while the item is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub name: String,
    pub description: String,

    pub locked: bool,
    /// Shown when opening is refused because the item is locked
    pub locked_string: String,
    /// Name of the item that unlocks this one
    pub unlocked_with: String,
    pub unlock_string: String,
    /// Name the item takes once unlocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_description: Option<String>,

    pub openable: bool,
    pub open: bool,
    pub open_string: String,

    pub takeable: bool,
    /// Name of the item that makes this one takeable
    pub takeable_with: String,
    pub takeable_string: String,
    pub not_takeable_string: String,

    pub useable: bool,
    pub use_string: String,

    pub items: Vec<Item>,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Nested items the player can currently see.
    pub fn visible_items(&self) -> &[Item] {
        if self.open { &self.items } else { &[] }
    }
}

impl ItemContainer for Item {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }
}

impl Unlockable for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn unlock_key(&self) -> &str {
        &self.unlocked_with
    }

    fn unlock_message(&self) -> &str {
        &self.unlock_string
    }

    fn unlock(&mut self) {
        self.locked = false;
        if let Some(name) = self.unlock_name.take().filter(|n| !n.is_empty()) {
            self.name = name;
            if let Some(description) = self.unlock_description.take() {
                self.description = description;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_applies_replacement() {
        let mut chest = Item {
            locked: true,
            unlocked_with: "Key".into(),
            unlock_name: Some("open chest".into()),
            unlock_description: Some("The lid hangs loose.".into()),
            ..Item::new("chest", "A locked chest.")
        };
        assert!(chest.unlocks_with("key"));
        assert!(!chest.unlocks_with("crowbar"));

        chest.unlock();
        assert!(!chest.locked);
        assert_eq!(chest.name, "open chest");
        assert_eq!(chest.description, "The lid hangs loose.");
        assert!(!chest.unlocks_with("key"));
    }

    #[test]
    fn unlock_without_replacement_keeps_name() {
        let mut box_ = Item {
            locked: true,
            unlocked_with: "key".into(),
            ..Item::new("box", "A box.")
        };
        box_.unlock();
        assert_eq!(box_.name, "box");
        assert_eq!(box_.description, "A box.");
    }

    #[test]
    fn closed_items_hide_contents() {
        let mut fridge = Item::new("fridge", "A humming fridge.");
        fridge.items.push(Item::new("bottle", "A bottle of milk."));
        assert!(fridge.visible_items().is_empty());
        fridge.open = true;
        assert_eq!(fridge.visible_items().len(), 1);
    }
}
