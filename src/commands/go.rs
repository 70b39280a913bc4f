use crate::commands::{CmdCtx, CommandResult};
use crate::error::GameError;

/// Moves through an exit of the current room, matched by direction first and name second.
pub fn go(ctx: &mut CmdCtx<'_>, where_to: &str) -> CommandResult {
    let room = ctx.world.current_room();
    let Some(exit) = room
        .exit_by_direction(where_to)
        .or_else(|| room.exit_by_name(where_to))
    else {
        return Err(GameError::NoExit {
            room: room.name.clone(),
            exit: where_to.to_string(),
        });
    };

    if exit.locked {
        return Err(GameError::LockedExit(exit.locked_string.clone()));
    }

    let go_string = exit.go_string.clone();
    let Some(next) = ctx.world.room_index(exit.room_id) else {
        // validated at load; only reachable with a hand-built world
        return Err(GameError::NoExit {
            room: room.name.clone(),
            exit: where_to.to_string(),
        });
    };

    let first_visit = !ctx.world.rooms[next].entered;
    ctx.world.set_current_room(next);
    tracing::debug!(room = %ctx.world.current_room_id, first_visit, "entered room");

    if first_visit {
        if let Some(story) = ctx.world.current_room().story() {
            ctx.output.line(story);
        }
    }
    ctx.narrate(go_string);
    Ok(())
}
