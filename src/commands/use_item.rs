use crate::commands::{CmdCtx, CommandResult, follow_on, go, open, take};
use crate::error::GameError;
use crate::models::types::names_match;
use crate::models::unlock::Unlockable;
use crate::services::resolver::ItemRef;

/// `use <name>` on its own, or `use <name> on <target>` where the target is an item or an
/// exit of the current room, matched by name.
pub fn use_item(ctx: &mut CmdCtx<'_>, name: &str, target: Option<&str>) -> CommandResult {
    let Some(item) = ctx.world.find_item(name).and_then(|at| ctx.world.item(&at)) else {
        return Err(ctx.no_item(name));
    };
    let item_name = item.name.clone();

    let Some(target) = target else {
        if !item.useable {
            return Err(GameError::ItemNotUseable);
        }
        let text = item.use_string.clone();
        ctx.narrate(text);
        return Ok(());
    };

    if let Some(at) = ctx.world.find_item(target) {
        return use_on_item(ctx, &item_name, target, &at);
    }
    if let Some(index) = ctx.world.current_room().exit_index_by_name(target) {
        return use_on_exit(ctx, &item_name, index);
    }
    Err(ctx.no_item(target))
}

enum ItemOutcome {
    MadeTakeable { text: String, name: String },
    Unlocked { text: String, name: String },
}

fn use_on_item(
    ctx: &mut CmdCtx<'_>,
    item_name: &str,
    target_name: &str,
    at: &ItemRef,
) -> CommandResult {
    let no_item = ctx.no_item(target_name);
    let Some(target) = ctx.world.item_mut(at) else {
        return Err(no_item);
    };

    let outcome = if !target.takeable && names_match(&target.takeable_with, item_name) {
        target.takeable = true;
        ItemOutcome::MadeTakeable {
            text: target.takeable_string.clone(),
            name: target.name.clone(),
        }
    } else if target.unlocks_with(item_name) {
        target.unlock();
        ItemOutcome::Unlocked {
            text: target.unlock_message().to_string(),
            name: target.name.clone(),
        }
    } else if !target.takeable && !target.not_takeable_string.is_empty() {
        return Err(GameError::ItemRefused(target.not_takeable_string.clone()));
    } else {
        return Err(GameError::CannotUseItem {
            item: item_name.to_string(),
            target: target.name.clone(),
        });
    };

    match outcome {
        ItemOutcome::MadeTakeable { text, name } => {
            tracing::debug!(item = item_name, target = %name, "target made takeable");
            ctx.narrate(text);
            follow_on("take", take(ctx, &name));
        }
        ItemOutcome::Unlocked { text, name } => {
            tracing::debug!(item = item_name, target = %name, "item unlocked");
            ctx.narrate(text);
            follow_on("open", open(ctx, &name));
        }
    }
    Ok(())
}

fn use_on_exit(ctx: &mut CmdCtx<'_>, item_name: &str, index: usize) -> CommandResult {
    let exit = &mut ctx.world.current_room_mut().exits[index];
    if !exit.unlocks_with(item_name) {
        return Err(GameError::CannotUseItem {
            item: item_name.to_string(),
            target: exit.name.clone(),
        });
    }

    // the far side is found by the name both exits shared before unlocking
    let old_name = exit.name.clone();
    let far_room = exit.room_id;
    let direction = exit.direction.clone();
    exit.unlock();
    let text = exit.unlock_message().to_string();

    if let Some(far) = ctx.world.room_index(far_room) {
        let room = &mut ctx.world.rooms[far];
        if let Some(i) = room.exit_index_by_name(&old_name) {
            let back = &mut room.exits[i];
            if back.is_locked() {
                back.unlock();
            }
        }
    }

    tracing::debug!(item = item_name, exit = %old_name, "exit unlocked");
    ctx.narrate(text);
    follow_on("go", go(ctx, &direction));
    Ok(())
}
