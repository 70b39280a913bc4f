use crate::commands::{CmdCtx, CommandResult};
use crate::error::GameError;
use crate::models::dictionary::STRINGS;
use crate::services::resolver::{Take, take_item};

/// Moves an item from the current room (or an open container in it) into the inventory.
pub fn take(ctx: &mut CmdCtx<'_>, name: &str) -> CommandResult {
    let no_item = ctx.no_item(name);
    let outcome = match take_item(ctx.world.current_room_mut(), name) {
        None => Err(no_item),
        Some(Take::Refused(item)) if !item.not_takeable_string.is_empty() => {
            Err(GameError::ItemRefused(item.not_takeable_string.clone()))
        }
        Some(Take::Refused(_)) => Err(GameError::ItemNotTakeable),
        Some(Take::Taken(item)) => Ok(item),
    };
    let item = outcome?;

    let text = ctx
        .world
        .dictionary
        .format(STRINGS, "itemAdded", "%s added to your inventory.", &[item.name.as_str()]);
    tracing::debug!(item = %item.name, "taken");
    ctx.world.player.inventory.push(item);
    ctx.output.line(text);
    Ok(())
}
