use crate::commands::{CmdCtx, CommandResult};
use crate::error::GameError;

/// Replaces the whole world with the one stored in a save slot. The current world is only
/// touched once the slot has been decoded and validated.
pub fn load(ctx: &mut CmdCtx<'_>, slot: &str) -> CommandResult {
    let world = ctx.store.load_slot(slot).map_err(|source| {
        tracing::warn!(slot, error = %source, "load failed");
        GameError::LoadFailed {
            slot: slot.to_string(),
            source,
        }
    })?;

    *ctx.world = world;
    let text = ctx.string("loadSuccessful", "Game loaded.");
    ctx.output.system(text);
    Ok(())
}
