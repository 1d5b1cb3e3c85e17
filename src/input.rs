//! Input adapter
//!
//! Pointer and key events arrive on their own thread and land in a shared
//! slot; the match loop snapshots the slot once per tick. Single writer,
//! single field, reads at tick boundaries: the last write before a tick
//! wins, and no further synchronization is needed.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread::{self, JoinHandle};

use termion::event::{Event, Key, MouseButton, MouseEvent};
use termion::input::TermRead;

use crate::sim::TickInput;

/// Keyboard fallback step per keypress, in surface units
const KEY_STEP: f32 = 4.0;

/// Shared slot the event thread writes and the match loop reads
///
/// The pointer target is stored as f32 bits; a separate flag marks whether
/// any input has arrived yet.
#[derive(Debug, Default)]
pub struct InputSlot {
    paddle_y: AtomicU32,
    has_target: AtomicBool,
    quit: AtomicBool,
}

impl InputSlot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Pointer write: vertical coordinate in surface units, unclamped
    pub fn set_paddle_y(&self, y: f32) {
        self.paddle_y.store(y.to_bits(), Ordering::Relaxed);
        self.has_target.store(true, Ordering::Relaxed);
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Relaxed);
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Relaxed)
    }

    /// Snapshot for one tick
    pub fn tick_input(&self) -> TickInput {
        let paddle_y = self
            .has_target
            .load(Ordering::Relaxed)
            .then(|| f32::from_bits(self.paddle_y.load(Ordering::Relaxed)));
        TickInput { paddle_y }
    }
}

/// Terminal rows are 1-based and each carries two surface rows
pub fn cell_row_to_surface_y(row: u16) -> f32 {
    f32::from(row.saturating_sub(1)) * 2.0
}

/// Read stdin events until the view closes
///
/// Terminals report the pointer row on press and drag; arrow keys nudge a
/// locally tracked target as a fallback. `q`, `Esc` and `Ctrl-C` close
/// the view.
pub fn spawn_event_thread(slot: Arc<InputSlot>, initial_y: f32) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut target_y = initial_y;
        for event in io::stdin().events() {
            let event = match event {
                Ok(event) => event,
                Err(err) => {
                    log::warn!("input stream error: {err}");
                    slot.request_quit();
                    break;
                }
            };
            match event {
                Event::Key(Key::Char('q')) | Event::Key(Key::Esc) | Event::Key(Key::Ctrl('c')) => {
                    slot.request_quit();
                    break;
                }
                Event::Key(Key::Up) => {
                    target_y -= KEY_STEP;
                    slot.set_paddle_y(target_y);
                }
                Event::Key(Key::Down) => {
                    target_y += KEY_STEP;
                    slot.set_paddle_y(target_y);
                }
                Event::Mouse(MouseEvent::Press(MouseButton::Left, _, row))
                | Event::Mouse(MouseEvent::Hold(_, row)) => {
                    target_y = cell_row_to_surface_y(row);
                    slot.set_paddle_y(target_y);
                }
                _ => {}
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_yields_no_target() {
        let slot = InputSlot::new();
        assert_eq!(slot.tick_input().paddle_y, None);
    }

    #[test]
    fn slot_returns_the_last_write() {
        let slot = InputSlot::new();
        slot.set_paddle_y(12.0);
        slot.set_paddle_y(-3.5);
        assert_eq!(slot.tick_input().paddle_y, Some(-3.5));
    }

    #[test]
    fn target_latches_across_ticks() {
        let slot = InputSlot::new();
        slot.set_paddle_y(20.0);
        assert_eq!(slot.tick_input().paddle_y, Some(20.0));
        assert_eq!(slot.tick_input().paddle_y, Some(20.0));
    }

    #[test]
    fn quit_is_sticky() {
        let slot = InputSlot::new();
        assert!(!slot.quit_requested());
        slot.request_quit();
        assert!(slot.quit_requested());
        assert!(slot.quit_requested());
    }

    #[test]
    fn pointer_rows_map_to_doubled_surface_rows() {
        assert_eq!(cell_row_to_surface_y(1), 0.0);
        assert_eq!(cell_row_to_surface_y(12), 22.0);
        // Rows are 1-based; zero maps to the surface top
        assert_eq!(cell_row_to_surface_y(0), 0.0);
    }
}
