use crate::commands::{CmdCtx, CommandResult};
use crate::error::GameError;

/// Describes a visible item, or an exit of the current room by name or direction.
pub fn examine(ctx: &mut CmdCtx<'_>, name: &str) -> CommandResult {
    if let Some(item) = ctx.world.find_item(name).and_then(|at| ctx.world.item(&at)) {
        let text = item.description.clone();
        ctx.output.line(text);
        return Ok(());
    }

    let room = ctx.world.current_room();
    if let Some(exit) = room.exit_by_name(name) {
        let text = format!("({}): {}", exit.direction, exit.description);
        ctx.output.line(text);
        return Ok(());
    }
    if let Some(exit) = room.exit_by_direction(name) {
        let text = format!("({}): {}", exit.name, exit.description);
        ctx.output.line(text);
        return Ok(());
    }

    Err(GameError::NoObject {
        name: name.to_string(),
        room: room.name.clone(),
    })
}
