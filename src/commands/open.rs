use crate::commands::{CmdCtx, CommandResult};
use crate::error::GameError;

pub fn open(ctx: &mut CmdCtx<'_>, name: &str) -> CommandResult {
    let no_item = ctx.no_item(name);
    let Some(at) = ctx.world.find_item(name) else {
        return Err(no_item);
    };
    let Some(item) = ctx.world.item_mut(&at) else {
        return Err(no_item);
    };

    if item.open {
        return Err(GameError::ItemAlreadyOpen(item.name.clone()));
    }
    if !item.openable {
        return Err(GameError::ItemNotOpenable(item.name.clone()));
    }
    if item.locked {
        return Err(GameError::LockedItem(item.locked_string.clone()));
    }

    item.open = true;
    let text = item.open_string.clone();
    ctx.narrate(text);
    Ok(())
}
