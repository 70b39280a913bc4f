use crate::error::{AppResult, GameError};
use crate::input::parser::{Verb, parse_command};
use crate::models::dictionary::STRINGS;
use crate::models::world::World;
use crate::output::Output;
use crate::renderer;
use crate::services::snapshot::SnapshotStore;

mod examine;
mod go;
mod inventory;
mod load;
mod open;
mod save;
mod take;
mod use_item;

pub use examine::examine;
pub use go::go;
pub use inventory::inventory;
pub use load::load;
pub use open::open;
pub use save::save;
pub use take::take;
pub use use_item::use_item;

pub type CommandResult = Result<(), GameError>;

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Command context passed to command handlers
pub struct CmdCtx<'a> {
    /// The one live world; `load` swaps it wholesale
    pub world: &'a mut World,
    /// Where save slots are read and written
    pub store: &'a SnapshotStore,
    /// Output frames for this turn
    pub output: &'a mut Output,
}

impl CmdCtx<'_> {
    /// Emits a line of author text, skipping empty strings.
    pub fn narrate(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.output.line(text);
        }
    }

    pub fn no_item(&self, name: &str) -> GameError {
        GameError::NoItem {
            name: name.to_string(),
            room: self.world.current_room().name.clone(),
        }
    }

    fn string(&self, key: &str, fallback: &str) -> String {
        self.world.dictionary.text(STRINGS, key, fallback).to_string()
    }
}

/// Parses one line and runs it against the world.
///
/// Failing commands leave the world as it was, apart from effects their contract allows.
pub fn process_command(raw: &str, ctx: &mut CmdCtx<'_>) -> AppResult<Flow> {
    let intent = parse_command(raw, &ctx.world.dictionary)?;
    ctx.world.display_room_info = false;
    tracing::debug!(
        command = %intent.command,
        verb = ?intent.verb,
        object = %intent.object,
        target = ?intent.target,
        "dispatch"
    );

    match intent.verb {
        Verb::Go => go(ctx, &intent.object)?,
        Verb::Examine => examine(ctx, &intent.object)?,
        Verb::Open => open(ctx, &intent.object)?,
        Verb::Take => take(ctx, &intent.object)?,
        Verb::Use => use_item(ctx, &intent.object, intent.target.as_deref())?,
        Verb::Inventory => inventory(ctx)?,
        Verb::Help => {
            let text = renderer::help(&ctx.world.dictionary);
            ctx.output.system(text);
        }
        Verb::Refresh => {
            let text = ctx.string("refreshing", "Refreshing...");
            ctx.output.system(text);
            ctx.world.display_room_info = true;
        }
        Verb::Save => save(ctx, &intent.object)?,
        Verb::Load => load(ctx, &intent.object)?,
        Verb::Quit => return Ok(Flow::Quit),
        Verb::Custom(_) => return Err(GameError::InvalidCommand(intent.original)),
    }

    Ok(Flow::Continue)
}

/// Follow-on effects (take after making takeable, open after unlock, go after unlocking an
/// exit) speak for themselves; their failures never fail the command that triggered them.
fn follow_on(what: &'static str, result: CommandResult) {
    if let Err(e) = result {
        tracing::debug!(follow_on = what, error = %e, "follow-on effect did not apply");
    }
}
