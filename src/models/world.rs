use crate::error::SnapshotError;
use crate::models::dictionary::Dictionary;
use crate::models::player::Player;
use crate::models::room::Room;
use crate::models::types::RoomId;
use serde::{Deserialize, Serialize};

/// The complete game state. A world is decoded wholesale from a snapshot, relinked, and
/// then mutated in place by every successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct World {
    pub name: String,
    pub description: String,
    pub dictionary: Dictionary,
    pub player: Player,
    pub rooms: Vec<Room>,
    pub current_room_id: RoomId,
    /// Set once the world has been written to a save slot
    pub saved_game: bool,
    /// Room info must be shown again before the next prompt
    pub display_room_info: bool,

    /// Index of the current room in `rooms`, resolved by `relink`
    #[serde(skip)]
    pub(crate) current: usize,
}

impl World {
    pub fn room_index(&self, id: RoomId) -> Option<usize> {
        self.rooms.iter().position(|r| r.id == id)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.room_index(id).map(|i| &self.rooms[i])
    }

    /// The room the player stands in. Only valid after `relink`.
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current]
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.current]
    }

    pub fn current_room_index(&self) -> usize {
        self.current
    }

    /// Moves the player into the room at `index`, marking it entered.
    pub fn set_current_room(&mut self, index: usize) {
        self.display_room_info = true;
        self.current = index;
        self.current_room_id = self.rooms[index].id;
        self.rooms[index].entered = true;
    }

    /// Resolves the stored current-room id into a live room after decoding.
    pub fn relink(&mut self) -> Result<(), SnapshotError> {
        let index = self.room_index(self.current_room_id).ok_or_else(|| {
            let id = self.current_room_id;
            SnapshotError::WorldInvalid(format!("current room {id} does not exist"))
        })?;
        self.set_current_room(index);
        Ok(())
    }
}
