//! Raw-mode terminal host.
//!
//! Owns the alternate screen for the lifetime of the gallery and restores
//! the terminal on drop, including on panics unwinding past the run loop.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use joist::keys::KeyCombo;
use joist::node::Node;
use joist::theme::Theme;

use crate::render;

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for a key press.
    ///
    /// Returns `None` when the timeout elapses or the event was not a key
    /// press (releases and resizes are absorbed; the caller redraws every
    /// iteration anyway).
    pub fn poll(&self, timeout: Duration) -> io::Result<Option<KeyCombo>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key.into())),
            _ => Ok(None),
        }
    }

    /// Paint a node tree to the screen, resolving colors through `theme`.
    pub fn draw(&mut self, root: &Node, theme: &dyn Theme) -> io::Result<()> {
        let (width, height) = self.size()?;
        let lines = render::layout_lines(root, theme);
        render::paint(&mut self.stdout, &lines, width, height)?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
