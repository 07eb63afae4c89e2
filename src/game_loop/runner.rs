use anyhow::Result;
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::io;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{Command, InputHandler};
use crate::render::RenderSink;

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player asked to quit (key or interrupt signal)
    Quit,
    /// The input stream ended or failed
    InputClosed,
}

/// Drives a game from timer ticks and key events.
///
/// The state is owned here and only touched from `run`, one event at a time.
pub struct GameLoop<K, R = ThreadRng> {
    engine: GameEngine<R>,
    state: GameState,
    sink: K,
    input_handler: InputHandler,
}

impl<K: RenderSink> GameLoop<K, ThreadRng> {
    pub fn new(config: GameConfig, sink: K) -> Self {
        Self::with_engine(GameEngine::new(config), sink)
    }
}

impl<K: RenderSink, R: Rng> GameLoop<K, R> {
    pub fn with_engine(mut engine: GameEngine<R>, sink: K) -> Self {
        let state = engine.reset();

        Self {
            engine,
            state,
            sink,
            input_handler: InputHandler::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Run until the player quits or `events` dries up.
    ///
    /// Only render failures are reported as errors.
    pub async fn run<S>(&mut self, mut events: S) -> Result<ExitReason>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        let period = self.engine.config().tick_interval;
        let mut tick_timer = interval_at(Instant::now() + period, period);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        let mut watch_signal = true;

        self.emit()?;

        loop {
            tokio::select! {
                _ = tick_timer.tick() => {
                    self.on_tick()?;
                }

                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(reason) = self.on_event(event)? {
                            return Ok(reason);
                        }
                    }
                    Some(Err(err)) => {
                        warn!(error = %err, "input stream failed");
                        return Ok(ExitReason::InputClosed);
                    }
                    None => {
                        warn!("input stream closed");
                        return Ok(ExitReason::InputClosed);
                    }
                },

                signal = &mut ctrl_c, if watch_signal => match signal {
                    Ok(()) => {
                        info!(score = self.state.score, "interrupted");
                        return Ok(ExitReason::Quit);
                    }
                    Err(err) => {
                        warn!(error = %err, "cannot listen for ctrl-c");
                        watch_signal = false;
                    }
                },
            }
        }
    }

    fn on_tick(&mut self) -> Result<()> {
        if self.state.is_game_over() {
            return Ok(());
        }
        self.engine.advance(&mut self.state);
        self.emit()
    }

    fn on_event(&mut self, event: Event) -> Result<Option<ExitReason>> {
        let Event::Key(key) = event else {
            return Ok(None);
        };

        match self.input_handler.handle_key_event(key) {
            Command::Turn(direction) => {
                if !self.state.change_direction(direction) {
                    debug!(?direction, "ignored reverse turn");
                }
            }
            Command::Restart => self.restart()?,
            Command::Quit => {
                info!(score = self.state.score, "quit");
                return Ok(Some(ExitReason::Quit));
            }
            Command::None => {}
        }

        Ok(None)
    }

    fn restart(&mut self) -> Result<()> {
        if !self.state.is_game_over() {
            debug!("restart ignored while running");
            return Ok(());
        }
        self.state = self.engine.reset();
        self.emit()
    }

    fn emit(&mut self) -> Result<()> {
        self.sink.render(&self.state.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EndReason, Point, Snapshot};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::channel::mpsc::{self, UnboundedSender};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Snapshot>,
    }

    impl RenderSink for RecordingSink {
        fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
            self.frames.push(snapshot.clone());
            Ok(())
        }
    }

    fn game_loop() -> GameLoop<RecordingSink, StdRng> {
        let engine = GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(3));
        let mut game_loop = GameLoop::with_engine(engine, RecordingSink::default());
        // Keep food off the starting row
        game_loop.state.food = Point::new(5, 5);
        game_loop
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn send(tx: &UnboundedSender<io::Result<Event>>, code: KeyCode) {
        tx.unbounded_send(key(code)).unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_before_first_tick() {
        let mut game_loop = game_loop();
        let (tx, rx) = mpsc::unbounded();
        send(&tx, KeyCode::Char('q'));

        let reason = game_loop.run(rx).await.unwrap();

        assert_eq!(reason, ExitReason::Quit);
        // Only the initial frame
        assert_eq!(game_loop.sink().frames.len(), 1);
        assert_eq!(game_loop.sink().frames[0].head(), Some(Point::new(20, 10)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_advance_and_render() {
        let mut game_loop = game_loop();
        let (tx, rx) = mpsc::unbounded();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(400)).await;
            send(&tx, KeyCode::Char('Q'));
        });

        let reason = game_loop.run(rx).await.unwrap();

        assert_eq!(reason, ExitReason::Quit);
        let heads: Vec<_> = game_loop
            .sink()
            .frames
            .iter()
            .map(|frame| frame.head())
            .collect();
        assert_eq!(
            heads,
            vec![
                Some(Point::new(20, 10)),
                Some(Point::new(21, 10)),
                Some(Point::new(22, 10)),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_applies_on_next_tick() {
        let mut game_loop = game_loop();
        let (tx, rx) = mpsc::unbounded();
        send(&tx, KeyCode::Down);
        // Reversing straight after is rejected against the new heading
        send(&tx, KeyCode::Up);

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            send(&tx, KeyCode::Char('q'));
        });

        game_loop.run(rx).await.unwrap();

        let frames = &game_loop.sink().frames;
        // Turning does not render on its own
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].head(), Some(Point::new(20, 11)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_ignored_while_running() {
        let mut game_loop = game_loop();
        game_loop.state.score = 30;
        let (tx, rx) = mpsc::unbounded();
        send(&tx, KeyCode::Char('r'));
        send(&tx, KeyCode::Char('q'));

        game_loop.run(rx).await.unwrap();

        assert_eq!(game_loop.sink().frames.len(), 1);
        assert_eq!(game_loop.state().score, 30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_game_over() {
        let mut game_loop = game_loop();
        game_loop.state.score = 40;
        game_loop.state.end = Some(EndReason::Wall);
        let (tx, rx) = mpsc::unbounded();
        send(&tx, KeyCode::Char('R'));
        send(&tx, KeyCode::Char('q'));

        game_loop.run(rx).await.unwrap();

        let frames = &game_loop.sink().frames;
        assert_eq!(frames.len(), 2);
        assert!(frames[0].game_over);
        assert!(!frames[1].game_over);
        assert_eq!(frames[1].score, 0);
        assert_eq!(frames[1].snake, vec![Point::new(20, 10)]);
        assert!(!frames[1].snake.contains(&frames[1].food));
        assert!(!game_loop.state().is_game_over());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_are_silent_after_game_over() {
        let mut game_loop = game_loop();
        game_loop.state.end = Some(EndReason::SelfCollision);
        let before = game_loop.state().clone();
        let (tx, rx) = mpsc::unbounded();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            send(&tx, KeyCode::Char('q'));
        });

        game_loop.run(rx).await.unwrap();

        assert_eq!(game_loop.sink().frames.len(), 1);
        assert_eq!(game_loop.state(), &before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_input_ends_loop() {
        let mut game_loop = game_loop();
        let (tx, rx) = mpsc::unbounded::<io::Result<Event>>();
        drop(tx);

        let reason = game_loop.run(rx).await.unwrap();

        assert_eq!(reason, ExitReason::InputClosed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_error_ends_loop() {
        let mut game_loop = game_loop();
        let (tx, rx) = mpsc::unbounded();
        tx.unbounded_send(Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone")))
            .unwrap();

        let reason = game_loop.run(rx).await.unwrap();

        assert_eq!(reason, ExitReason::InputClosed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_keys_and_events_are_ignored() {
        let mut game_loop = game_loop();
        let (tx, rx) = mpsc::unbounded();
        send(&tx, KeyCode::Char('x'));
        tx.unbounded_send(Ok(Event::FocusLost)).unwrap();
        tx.unbounded_send(Ok(Event::Resize(80, 24))).unwrap();
        send(&tx, KeyCode::Char('q'));

        let reason = game_loop.run(rx).await.unwrap();

        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(game_loop.sink().frames.len(), 1);
        assert_eq!(game_loop.state().direction, crate::game::Direction::Right);
    }
}
