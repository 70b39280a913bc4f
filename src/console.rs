//! Line-oriented terminal front end: reads one command per line and writes frames back.

use crate::commands::Flow;
use crate::output::OutFrame;
use crate::state::session::Session;
use std::io::{self, BufRead, Write};

pub struct ConsoleSink<W> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn send_frame(&mut self, frame: &OutFrame) -> io::Result<()> {
        match frame {
            OutFrame::Line(s) | OutFrame::System(s) | OutFrame::Error(s) => {
                for line in s.lines() {
                    self.writer.write_all(line.as_bytes())?;
                    self.writer.write_all(b"\n")?;
                }
            }
            OutFrame::RoomView { content } => {
                self.writer.write_all(b"\n")?;
                self.writer.write_all(content.as_bytes())?;
                self.writer.write_all(b"\n\n")?;
            }
            OutFrame::Prompt(p) => {
                // no newline; input follows on the same line
                self.writer.write_all(p.as_bytes())?;
                self.writer.flush()?;
            }
        }
        Ok(())
    }

    pub fn send_all(&mut self, frames: Vec<OutFrame>) -> io::Result<()> {
        for frame in &frames {
            self.send_frame(frame)?;
        }
        self.writer.flush()
    }
}

/// Plays until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: W) -> io::Result<()> {
    let mut sink = ConsoleSink::new(out);

    session.intro();
    session.prompt();
    sink.send_all(session.drain())?;

    for line in input.lines() {
        let line = line?;
        let flow = session.handle_line(&line);
        if flow == Flow::Quit {
            sink.send_all(session.drain())?;
            tracing::info!(elapsed = ?session.session_started.elapsed(), "player quit");
            return Ok(());
        }
        session.prompt();
        sink.send_all(session.drain())?;
    }

    tracing::info!("end of input");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_has_no_newline() {
        let mut buf = Vec::new();
        let mut sink = ConsoleSink::new(&mut buf);
        sink.send_all(vec![OutFrame::Line("a\nb".into()), OutFrame::Prompt("> ".into())])
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\nb\n> ");
    }
}
