use crate::commands::{CmdCtx, Flow, process_command};
use crate::models::world::World;
use crate::output::{OutFrame, Output};
use crate::renderer;
use crate::services::snapshot::SnapshotStore;

/// One player's game: the live world, where it is saved, and the frames produced since the
/// last drain.
#[derive(Debug)]
pub struct Session {
    // When the session was started
    pub session_started: std::time::Instant,

    world: World,
    store: SnapshotStore,
    output: Output,
}

impl Session {
    pub fn new(world: World, store: SnapshotStore) -> Self {
        Self {
            session_started: std::time::Instant::now(),
            world,
            store,
            output: Output::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Welcome text for a new game, followed by the room view. A resumed game skips the
    /// welcome.
    pub fn intro(&mut self) {
        if !self.world.saved_game {
            for line in renderer::welcome(&self.world) {
                self.output.line(line);
            }
        }
        self.show_room();
    }

    /// Runs one line of input. Failures become error frames; the session keeps going.
    pub fn handle_line(&mut self, raw: &str) -> Flow {
        let raw = raw.trim();
        let mut ctx = CmdCtx {
            world: &mut self.world,
            store: &self.store,
            output: &mut self.output,
        };

        let flow = match process_command(raw, &mut ctx) {
            Ok(flow) => flow,
            Err(e) => {
                tracing::debug!(input = raw, error = %e, "command failed");
                let text = renderer::error_text(&e, &self.world.dictionary);
                self.output.error(text);
                Flow::Continue
            }
        };

        if flow == Flow::Continue {
            self.show_room();
        }
        flow
    }

    /// Emits the room view if a command asked for it.
    pub fn show_room(&mut self) {
        if self.world.display_room_info {
            let view = renderer::room_view(self.world.current_room(), &self.world.dictionary);
            self.output.room_view(view);
            self.world.display_room_info = false;
        }
    }

    pub fn prompt(&mut self) {
        let text = renderer::prompt(&self.world.dictionary);
        self.output.prompt(text);
    }

    pub fn drain(&mut self) -> Vec<OutFrame> {
        self.output.drain()
    }
}
