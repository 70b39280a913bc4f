use crate::models::types::RoomId;
use crate::models::unlock::Unlockable;
use serde::{Deserialize, Serialize};

/// A one-way passage out of a room. The matching way back, if any, is a separate exit
/// declared in the target room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exit {
    pub name: String,
    pub direction: String,
    pub description: String,

    pub locked: bool,
    /// Shown when the player tries to pass while locked
    pub locked_string: String,
    pub unlocked_with: String,
    pub unlock_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_description: Option<String>,

    /// Shown when the player goes through
    pub go_string: String,
    /// Target room
    pub room_id: RoomId,
}

impl Exit {
    pub fn new(name: impl Into<String>, direction: impl Into<String>, room_id: RoomId) -> Self {
        Self {
            name: name.into(),
            direction: direction.into(),
            room_id,
            ..Default::default()
        }
    }
}

impl Unlockable for Exit {
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
