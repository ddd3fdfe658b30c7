use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;

use crate::config::ControlsConfig;
use crate::sim::ARENA_HEIGHT;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputAction {
    Quit,
    StartOrReset,
    /// Raw terminal row from a mouse-move event; still needs translation
    /// into arena coordinates against the current playfield layout.
    PointerRow(u16),
    NudgeUp,
    NudgeDown,
}

/// Poll for input events and return actions.
/// Each event generates an immediate action - no state tracking needed.
pub fn poll_input(controls: &ControlsConfig) -> Result<Vec<InputAction>, io::Error> {
    let mut actions = Vec::new();

    // Process all pending events without blocking the frame
    while event::poll(Duration::from_millis(0))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
                    actions.push(InputAction::Quit);
                } else if matches_key(key.code, &controls.start_reset) {
                    actions.push(InputAction::StartOrReset);
                } else if matches_key(key.code, &controls.pointer_up) {
                    actions.push(InputAction::NudgeUp);
                } else if matches_key(key.code, &controls.pointer_down) {
                    actions.push(InputAction::NudgeDown);
                }
            }
            Event::Mouse(mouse) => {
                if matches!(
                    mouse.kind,
                    MouseEventKind::Moved | MouseEventKind::Drag(_)
                ) {
                    actions.push(InputAction::PointerRow(mouse.row));
                }
            }
            _ => {}
        }
    }

    Ok(actions)
}

/// Match a pressed key against a configured key name ("Up", "Space",
/// "Enter", or a single character, case-insensitive).
fn matches_key(code: KeyCode, name: &str) -> bool {
    match code {
        KeyCode::Up => name.eq_ignore_ascii_case("Up"),
        KeyCode::Down => name.eq_ignore_ascii_case("Down"),
        KeyCode::Left => name.eq_ignore_ascii_case("Left"),
        KeyCode::Right => name.eq_ignore_ascii_case("Right"),
        KeyCode::Enter => name.eq_ignore_ascii_case("Enter"),
        KeyCode::Esc => name.eq_ignore_ascii_case("Esc"),
        KeyCode::Char(' ') => name.eq_ignore_ascii_case("Space"),
        KeyCode::Char(c) => {
            let mut chars = name.chars();
            matches!((chars.next(), chars.next()), (Some(k), None) if k.eq_ignore_ascii_case(&c))
        }
        _ => false,
    }
}

/// Translate a terminal row into an arena-local pointer y, clamped to the
/// arena. Coordinate translation is the input host's job; the simulation
/// only ever sees arena units.
pub fn pointer_to_arena(row: u16, playfield: Rect) -> f32 {
    if playfield.height == 0 {
        return ARENA_HEIGHT / 2.0;
    }
    let local = row.saturating_sub(playfield.y) as f32 + 0.5;
    let y = local / playfield.height as f32 * ARENA_HEIGHT;
    y.clamp(0.0, ARENA_HEIGHT)
}
