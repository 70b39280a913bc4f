use crate::models::container::ItemContainer;
use crate::models::exit::Exit;
use crate::models::item::Item;
use crate::models::types::{RoomId, names_match};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub exits: Vec<Exit>,
    pub items: Vec<Item>,
    /// Has the player been here before?
    pub entered: bool,
    /// Told once, the first time the player walks in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_string: Option<String>,
}

impl Room {
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn exit_index_by_name(&self, name: &str) -> Option<usize> {
        self.exits.iter().position(|e| names_match(&e.name, name))
    }

    /// First exit in the given direction; rooms with two exits the same way are ambiguous.
    pub fn exit_index_by_direction(&self, direction: &str) -> Option<usize> {
        self.exits.iter().position(|e| names_match(&e.direction, direction))
    }

    pub fn exit_by_name(&self, name: &str) -> Option<&Exit> {
        self.exit_index_by_name(name).map(|i| &self.exits[i])
    }

    pub fn exit_by_direction(&self, direction: &str) -> Option<&Exit> {
        self.exit_index_by_direction(direction).map(|i| &self.exits[i])
    }

    pub fn story(&self) -> Option<&str> {
        self.story_string.as_deref().filter(|s| !s.is_empty())
    }
}

impl ItemContainer for Room {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exits_resolve_by_name_and_direction() {
        let mut room = Room::new(1, "Hall");
        room.exits.push(Exit::new("Oak Door", "east", RoomId(2)));
        room.exits.push(Exit::new("stairs", "up", RoomId(3)));
        room.exits.push(Exit::new("trapdoor", "up", RoomId(4)));

        assert_eq!(room.exit_by_name("oak door").map(|e| e.room_id), Some(RoomId(2)));
        assert_eq!(room.exit_by_direction("EAST").map(|e| e.room_id), Some(RoomId(2)));
        // first match wins when two exits share a direction
        assert_eq!(room.exit_by_direction("up").map(|e| e.room_id), Some(RoomId(3)));
        assert!(room.exit_by_name("east").is_none());
        assert!(room.exit_by_direction("west").is_none());
    }
}
