use anyhow::Result;

use crate::game::Snapshot;

/// Destination for game snapshots.
///
/// The game loop calls `render` once at start, after every tick while the
/// game runs, and after a restart.
pub trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}
