use crate::commands::{CmdCtx, CommandResult};
use crate::renderer;

pub fn inventory(ctx: &mut CmdCtx<'_>) -> CommandResult {
    let text = renderer::inventory(ctx.world);
    ctx.output.line(text);
    Ok(())
}
