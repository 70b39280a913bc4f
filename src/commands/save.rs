use crate::commands::{CmdCtx, CommandResult};
use crate::error::GameError;

/// Writes the world to a save slot, flagged as a resumed game.
pub fn save(ctx: &mut CmdCtx<'_>, slot: &str) -> CommandResult {
    let was_saved = ctx.world.saved_game;
    ctx.world.saved_game = true;

    if let Err(source) = ctx.store.save_slot(&*ctx.world, slot) {
        ctx.world.saved_game = was_saved;
        tracing::warn!(slot, error = %source, "save failed");
        return Err(GameError::SaveFailed {
            slot: slot.to_string(),
            source,
        });
    }

    let text = ctx.string("saveSuccessful", "Game saved.");
    ctx.output.system(text);
    Ok(())
}
