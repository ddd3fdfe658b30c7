pub mod state;
pub mod step;

pub use state::{GameState, Score, ARENA_HEIGHT, ARENA_WIDTH, BALL_SIZE, PADDLE_HEIGHT, PADDLE_WIDTH};
pub use step::{Cue, FrameResult};

use rand::rngs::ThreadRng;
use rand::Rng;

/// The simulation plus its run-state gate. Owns the game state and the
/// RNG used for serve randomization; the RNG is injected so tests can
/// run on a seeded generator.
pub struct Simulation<R: Rng = ThreadRng> {
    state: GameState,
    rng: R,
    running: bool,
}

impl Simulation<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for Simulation<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let state = GameState::new(&mut rng);
        Self {
            state,
            rng,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    /// The single control toggle: starting from Stopped begins a fresh
    /// round (zeroed score, centered paddles, random serve); toggling
    /// while Running stops the game and zeroes the score.
    pub fn start_or_reset(&mut self) {
        if self.running {
            self.running = false;
            self.state.score = Score::default();
        } else {
            self.state.reset(&mut self.rng);
            self.running = true;
        }
    }

    /// Advance one frame. Valid only while running; the render host is
    /// responsible for not calling this while stopped.
    pub fn step(&mut self, pointer_y: Option<f32>) -> FrameResult {
        debug_assert!(self.running, "step() called while stopped");
        step::step(&mut self.state, pointer_y, &mut self.rng)
    }

    /// Cue-free snapshot for painting while the game is stopped.
    pub fn snapshot(&self) -> FrameResult {
        FrameResult::snapshot(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sim(seed: u64) -> Simulation<StdRng> {
        Simulation::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn toggle_cycles_stopped_running_stopped() {
        let mut sim = sim(1);
        assert!(!sim.is_running());
        assert_eq!(sim.score(), Score::default());

        sim.start_or_reset();
        assert!(sim.is_running());
        assert_eq!(sim.score(), Score::default());

        sim.start_or_reset();
        assert!(!sim.is_running());
        assert_eq!(sim.score(), Score::default());
    }

    #[test]
    fn start_serves_from_center_at_unit_speed() {
        let mut sim = sim(2);
        sim.start_or_reset();

        let frame = sim.snapshot();
        assert_eq!(frame.ball_x, ARENA_WIDTH / 2.0 - BALL_SIZE / 2.0);
        assert_eq!(frame.ball_y, ARENA_HEIGHT / 2.0 - BALL_SIZE / 2.0);
        assert_eq!(frame.ball_vx.abs(), 4.0);
        assert_eq!(frame.ball_vy.abs(), 4.0);
    }

    #[test]
    fn stopping_zeroes_a_nonzero_score() {
        let mut sim = sim(3);
        sim.start_or_reset();

        // Dodge the ball: keep the player paddle at the far end of the
        // arena from it, so the AI is guaranteed to score.
        let mut frame = sim.snapshot();
        let mut steps = 0;
        while sim.score() == Score::default() {
            let pointer = if frame.ball_y < ARENA_HEIGHT / 2.0 {
                ARENA_HEIGHT
            } else {
                0.0
            };
            frame = sim.step(Some(pointer));
            steps += 1;
            assert!(steps < 2_000, "no point scored in 2k frames");
        }
        assert_ne!(sim.score(), Score::default());

        sim.start_or_reset();
        assert!(!sim.is_running());
        assert_eq!(sim.score(), Score::default());
    }

    #[test]
    fn snapshot_carries_no_cues() {
        let sim = sim(4);
        assert!(sim.snapshot().cues.is_empty());
    }
}
