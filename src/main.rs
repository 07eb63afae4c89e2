use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::EventStream;
use tty_snake::game::GameConfig;
use tty_snake::game_loop::{ExitReason, GameLoop};
use tty_snake::logging;
use tty_snake::render::TerminalSink;

#[derive(Parser)]
#[command(name = "tty_snake")]
#[command(
    version,
    about = "Snake in your terminal",
    long_about = "Snake in your terminal.\n\nArrow keys steer, R restarts after a game over, Q quits.\nSet TTY_SNAKE_LOG=<file> to write a log."
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init()?;

    let config = GameConfig::default();
    config.validate()?;

    // The terminal is restored when the loop and its sink drop at the end of this block
    let (reason, score) = {
        let sink = TerminalSink::open().context("Failed to initialize keyboard input")?;
        let mut game_loop = GameLoop::new(config, sink);
        let reason = game_loop.run(EventStream::new()).await?;
        (reason, game_loop.state().score)
    };

    match reason {
        ExitReason::Quit => println!("\nGame exited. Final score: {score}"),
        ExitReason::InputClosed => {
            println!("\nKeyboard input closed, game exited. Final score: {score}")
        }
    }

    Ok(())
}
