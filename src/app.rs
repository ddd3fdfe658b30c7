use std::io;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::audio::{CueSink, TerminalBell};
use crate::config::Config;
use crate::debug;
use crate::input::{self, InputAction};
use crate::sim::{Simulation, ARENA_HEIGHT};
use crate::ui;

/// The frame loop. Polls the input host, advances the simulation while
/// running, paints the returned snapshot, forwards cues to the audio
/// host. The simulation is never stepped while stopped.
pub fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    debug::log("APP_START", "frame loop started");

    let mut sim = Simulation::new();
    let mut bell = TerminalBell::new(config.controls.bell);

    // Last-known pointer position in arena coordinates. A single slot,
    // latest wins; intermediate positions within a frame are discardable.
    let mut pointer: Option<f32> = None;

    let frame_duration = Duration::from_millis(1000 / config.display.target_fps.max(1));

    loop {
        let frame_start = Instant::now();

        let size = terminal.size()?;
        let field = ui::playfield(Rect::new(0, 0, size.width, size.height));

        for action in input::poll_input(&config.controls)? {
            match action {
                InputAction::Quit => {
                    debug::log("APP_EXIT", "quit requested");
                    return Ok(());
                }
                InputAction::StartOrReset => {
                    if sim.is_running() {
                        let score = sim.score();
                        debug::log(
                            "CONTROL",
                            &format!(
                                "stopped at player={} ai={}, score reset",
                                score.player, score.ai
                            ),
                        );
                    } else {
                        debug::log("CONTROL", "started fresh round");
                    }
                    sim.start_or_reset();
                }
                InputAction::PointerRow(row) => {
                    pointer = Some(input::pointer_to_arena(row, field));
                }
                InputAction::NudgeUp => nudge(&mut pointer, -config.controls.pointer_nudge),
                InputAction::NudgeDown => nudge(&mut pointer, config.controls.pointer_nudge),
            }
        }

        let view = if sim.is_running() {
            let frame = sim.step(pointer);
            for cue in &frame.cues {
                bell.play(*cue);
            }
            if frame.cues.contains(&crate::sim::Cue::Score) {
                debug::log(
                    "SCORE",
                    &format!(
                        "player={} ai={} serve=({:+.0},{:+.0})",
                        frame.score.player, frame.score.ai, frame.ball_vx, frame.ball_vy
                    ),
                );
            }
            frame
        } else {
            sim.snapshot()
        };

        terminal.draw(|f| ui::render(f, &view, sim.is_running(), &config.display))?;

        limit_frame_rate(frame_start, frame_duration);
    }
}

/// Keyboard fallback for terminals without mouse reporting: move a
/// virtual pointer a fixed number of arena units.
fn nudge(pointer: &mut Option<f32>, delta: f32) {
    let current = pointer.unwrap_or(ARENA_HEIGHT / 2.0);
    *pointer = Some((current + delta).clamp(0.0, ARENA_HEIGHT));
}

/// Sleep out the remainder of the frame to hold the target frame rate.
fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudge_clamps_to_arena_and_starts_from_center() {
        let mut pointer = None;
        nudge(&mut pointer, -30.0);
        assert_eq!(pointer, Some(ARENA_HEIGHT / 2.0 - 30.0));

        let mut pointer = Some(10.0);
        nudge(&mut pointer, -50.0);
        assert_eq!(pointer, Some(0.0));

        let mut pointer = Some(ARENA_HEIGHT - 5.0);
        nudge(&mut pointer, 50.0);
        assert_eq!(pointer, Some(ARENA_HEIGHT));
    }
}
