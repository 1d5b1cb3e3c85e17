//! Rally Pong entry point
//!
//! Brings up the terminal surface and the input thread, then drives the
//! match at a fixed cadence until game over. Each iteration renders the
//! previous tick's resolved state before advancing, so the screen trails
//! the simulation by one tick.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rally_pong::Settings;
use rally_pong::consts::{RIGHT_PADDLE_START_Y, TICK_INTERVAL_MS};
use rally_pong::input::{InputSlot, spawn_event_thread};
use rally_pong::renderer::term::TermRenderer;
use rally_pong::renderer::{DrawCommand, Renderer, compose_frame};
use rally_pong::sim::{Arena, MatchState, tick};

fn main() -> io::Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let mut renderer = TermRenderer::new(settings)?;
    let (width, height) = renderer.surface_size();
    log::info!("starting match in a {width}x{height} arena");

    let mut state = MatchState::new(Arena::new(width, height));
    let slot = InputSlot::new();
    let _input_thread = spawn_event_thread(Arc::clone(&slot), RIGHT_PADDLE_START_Y);

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    loop {
        renderer.submit(&compose_frame(&state))?;

        if slot.quit_requested() {
            log::info!("view closed, abandoning match");
            break;
        }

        let events = tick(&mut state, &slot.tick_input());
        if let Some(side) = events.paddle_hit {
            log::debug!("ball off the {side:?} paddle");
        }
        if let Some(side) = events.point_to {
            log::info!(
                "point to {side:?} ({} - {})",
                state.scores.left,
                state.scores.right
            );
        }

        if events.game_over {
            // Final render plus the overlay, then keep the frame on screen
            // until the player closes the view
            let mut frame = compose_frame(&state);
            frame.push(DrawCommand::GameOver);
            renderer.submit(&frame)?;

            log::info!(
                "game over: {} - {}",
                state.scores.left,
                state.scores.right
            );
            wait_for_quit(&slot);
            break;
        }

        thread::sleep(tick_interval);
    }

    Ok(())
}

fn wait_for_quit(slot: &InputSlot) {
    while !slot.quit_requested() {
        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }
}
