/// One unit of rendered output produced while handling a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutFrame {
    /// Regular in-game text line
    Line(String),
    /// Message from the engine itself (save/load confirmations, help)
    System(String),
    /// Room header, description, directions and visible items
    RoomView { content: String },
    /// A command failed; localized error text
    Error(String),
    /// Input prompt
    Prompt(String),
}

/// Collects frames in the order commands emit them. The console drains it after every turn.
#[derive(Debug, Default)]
pub struct Output {
    frames: Vec<OutFrame>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::Line(s.into()));
    }

    pub fn system(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::System(s.into()));
    }

    pub fn room_view(&mut self, content: impl Into<String>) {
        self.frames.push(OutFrame::RoomView { content: content.into() });
    }

    pub fn error(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::Error(s.into()));
    }

    pub fn prompt(&mut self, s: impl Into<String>) {
        self.frames.push(OutFrame::Prompt(s.into()));
    }

    pub fn drain(&mut self) -> Vec<OutFrame> {
        std::mem::take(&mut self.frames)
    }
}
