use crate::error::SnapshotError;
use crate::models::types::names_match;
use crate::models::world::World;
use std::collections::HashSet;

/// Structural checks run on every decoded world before it is used.
///
/// Duplicate room ids and exits into rooms that do not exist are fatal. Ambiguous content
/// (two exits the same way, two exits with the same name) is allowed but logged, since
/// lookups then resolve to the first declared exit.
pub fn validate_world(world: &World) -> Result<(), SnapshotError> {
    let mut ids = HashSet::new();
    for room in &world.rooms {
        if !ids.insert(room.id) {
            return Err(SnapshotError::WorldInvalid(format!("duplicate room id {}", room.id)));
        }
    }

    for room in &world.rooms {
        for (idx, exit) in room.exits.iter().enumerate() {
            if !ids.contains(&exit.room_id) {
                return Err(SnapshotError::WorldInvalid(format!(
                    "exit '{}' in room {} leads to unknown room {}",
                    exit.name, room.id, exit.room_id
                )));
            }

            let earlier = &room.exits[..idx];
            if earlier.iter().any(|e| names_match(&e.direction, &exit.direction)) {
                tracing::warn!(
                    room = %room.id,
                    direction = %exit.direction,
                    "multiple exits share a direction; the first one wins"
                );
            }
            if earlier.iter().any(|e| names_match(&e.name, &exit.name)) {
                tracing::warn!(
                    room = %room.id,
                    exit = %exit.name,
                    "multiple exits share a name; the first one wins"
                );
            }
        }
    }

    Ok(())
}
