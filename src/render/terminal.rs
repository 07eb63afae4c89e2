use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use tracing::{debug, warn};

use super::renderer::Renderer;
use super::sink::RenderSink;
use crate::game::Snapshot;

/// Terminal in raw mode on the alternate screen.
///
/// Raw mode is held for the lifetime of the value and released on drop, so
/// every exit path (quit, `?`, unwinding panic) hands back a usable shell.
pub struct TerminalSink {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    renderer: Renderer,
    restored: bool,
}

impl TerminalSink {
    pub fn open() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        match Self::setup() {
            Ok(terminal) => {
                debug!("terminal acquired");
                Ok(Self {
                    terminal,
                    renderer: Renderer::new(),
                    restored: false,
                })
            }
            Err(err) => {
                let _ = execute!(stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    fn setup() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(terminal)
    }

    /// Leave raw mode and the alternate screen. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        debug!("terminal restored");
        Ok(())
    }
}

impl RenderSink for TerminalSink {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.terminal
            .draw(|frame| self.renderer.render(frame, snapshot))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}
