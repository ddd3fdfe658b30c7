use rand::Rng;

use super::state::{
    GameState, Paddle, Score, AI_PADDLE_SPEED, AI_X, ARENA_HEIGHT, ARENA_WIDTH, BALL_SIZE,
    PADDLE_HEIGHT, PADDLE_WIDTH, PLAYER_X,
};

/// Audio cues emitted by the simulation. The frequency/duration payload is
/// purely advisory - the sink decides what (if anything) to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Ball reflected off the top or bottom wall.
    Bounce,
    /// Ball reflected off either paddle.
    PaddleHit,
    /// A point was scored and the ball was re-served.
    Score,
}

impl Cue {
    pub fn frequency_hz(&self) -> f32 {
        match self {
            Cue::Bounce => 300.0,
            Cue::PaddleHit => 400.0,
            Cue::Score => 220.0,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            Cue::Bounce | Cue::PaddleHit => 50,
            Cue::Score => 100,
        }
    }
}

/// Immutable per-frame snapshot handed to the render host. The renderer
/// reads this once per frame and never touches live simulation fields.
#[derive(Debug, Clone)]
pub struct FrameResult {
    pub player_y: f32,
    pub ai_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub score: Score,
    /// Cues in emission order. At most one bounce/hit plus one score cue;
    /// the two are not mutually exclusive within a frame.
    pub cues: Vec<Cue>,
}

impl FrameResult {
    pub fn snapshot(state: &GameState) -> Self {
        Self {
            player_y: state.player.y,
            ai_y: state.ai.y,
            ball_x: state.ball.x,
            ball_y: state.ball.y,
            ball_vx: state.ball.vx,
            ball_vy: state.ball.vy,
            score: state.score,
            cues: Vec::new(),
        }
    }
}

/// Advance the world by exactly one frame.
///
/// `pointer_y` is the last-known pointer position in arena coordinates, or
/// `None` if the input host has nothing yet (the player paddle then holds
/// still this frame). The update order is fixed: player paddle, ball
/// translation, wall bounce, paddle bounce, scoring, AI paddle.
pub fn step<R: Rng>(state: &mut GameState, pointer_y: Option<f32>, rng: &mut R) -> FrameResult {
    let mut cues = Vec::new();

    // 1. Player paddle follows the pointer, centered on it.
    if let Some(pointer) = pointer_y {
        state.player.y = Paddle::clamp_y(pointer - PADDLE_HEIGHT / 2.0);
    }

    // 2. Ball translation.
    state.ball.x += state.ball.vx;
    state.ball.y += state.ball.vy;

    // 3. Top/bottom wall reflection.
    if state.ball.y <= 0.0 || state.ball.y + BALL_SIZE >= ARENA_HEIGHT {
        state.ball.vy = -state.ball.vy;
        cues.push(Cue::Bounce);
    }

    // 4. Paddle reflection. This is deliberately the loose proximity test
    // from the reference game: it only checks the near x side of each
    // paddle plus vertical overlap, so a fast enough ball can tunnel.
    // Keeping it verbatim keeps the game feel identical.
    if hits_player_paddle(state) || hits_ai_paddle(state) {
        state.ball.vx = -state.ball.vx;
        cues.push(Cue::PaddleHit);
    }

    // 5. Out of bounds: score and re-serve. The two edges are mutually
    // exclusive at sane speeds, hence the else-if.
    if state.ball.x <= 0.0 {
        state.score.ai += 1;
        state.ball.reset(rng);
        cues.push(Cue::Score);
    } else if state.ball.x + BALL_SIZE >= ARENA_WIDTH {
        state.score.player += 1;
        state.ball.reset(rng);
        cues.push(Cue::Score);
    }

    // 6. AI paddle chases the ball's y at fixed speed, no dead zone.
    if state.ai.center_y() < state.ball.y {
        state.ai.y = (state.ai.y + AI_PADDLE_SPEED).min(ARENA_HEIGHT - PADDLE_HEIGHT);
    } else {
        state.ai.y = (state.ai.y - AI_PADDLE_SPEED).max(0.0);
    }

    let mut frame = FrameResult::snapshot(state);
    frame.cues = cues;
    frame
}

fn hits_player_paddle(state: &GameState) -> bool {
    state.ball.x <= PLAYER_X + PADDLE_WIDTH
        && state.ball.y + BALL_SIZE >= state.player.y
        && state.ball.y <= state.player.y + PADDLE_HEIGHT
}

fn hits_ai_paddle(state: &GameState) -> bool {
    state.ball.x + BALL_SIZE >= AI_X
        && state.ball.y + BALL_SIZE >= state.ai.y
        && state.ball.y <= state.ai.y + PADDLE_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BALL_SPEED_ABS: f32 = 4.0;

    fn world(seed: u64) -> (GameState, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::new(&mut rng);
        (state, rng)
    }

    #[test]
    fn player_paddle_clamps_to_arena() {
        let (mut state, mut rng) = world(1);

        // Way past the bottom edge.
        step(&mut state, Some(10_000.0), &mut rng);
        assert_eq!(state.player.y, ARENA_HEIGHT - PADDLE_HEIGHT);

        // Way past the top edge.
        step(&mut state, Some(-10_000.0), &mut rng);
        assert_eq!(state.player.y, 0.0);
    }

    #[test]
    fn no_pointer_means_paddle_holds_still() {
        let (mut state, mut rng) = world(2);
        let before = state.player.y;
        step(&mut state, None, &mut rng);
        assert_eq!(state.player.y, before);
    }

    #[test]
    fn top_wall_reflects_and_emits_bounce() {
        let (mut state, mut rng) = world(3);
        state.ball.y = -1.0;
        state.ball.vy = -4.0;
        // Keep the ball away from paddles and goals.
        state.ball.x = ARENA_WIDTH / 2.0;
        state.ball.vx = 4.0;

        let frame = step(&mut state, None, &mut rng);
        assert_eq!(state.ball.vy, 4.0);
        assert_eq!(frame.cues, vec![Cue::Bounce]);
    }

    #[test]
    fn bottom_wall_reflects() {
        let (mut state, mut rng) = world(4);
        state.ball.y = ARENA_HEIGHT - BALL_SIZE + 1.0;
        state.ball.vy = 4.0;
        state.ball.x = ARENA_WIDTH / 2.0;
        state.ball.vx = 4.0;

        let frame = step(&mut state, None, &mut rng);
        assert_eq!(state.ball.vy, -4.0);
        assert_eq!(frame.cues, vec![Cue::Bounce]);
    }

    #[test]
    fn left_goal_scores_for_ai_and_reserves() {
        let (mut state, mut rng) = world(5);
        state.ball.x = -1.0;
        state.ball.vx = -4.0;
        state.ball.vy = 4.0;
        // Keep the player paddle out of the ball's row so the loose
        // paddle test can't fire on the way out.
        state.player.y = 0.0;
        state.ball.y = ARENA_HEIGHT - PADDLE_HEIGHT - 50.0;

        let frame = step(&mut state, None, &mut rng);
        assert_eq!(state.score.ai, 1);
        assert_eq!(state.score.player, 0);
        assert_eq!(state.ball.x, ARENA_WIDTH / 2.0 - BALL_SIZE / 2.0);
        assert_eq!(state.ball.y, ARENA_HEIGHT / 2.0 - BALL_SIZE / 2.0);
        assert_eq!(state.ball.vx.abs(), BALL_SPEED_ABS);
        assert_eq!(state.ball.vy.abs(), BALL_SPEED_ABS);
        assert!(frame.cues.contains(&Cue::Score));
    }

    #[test]
    fn right_goal_scores_for_player() {
        let (mut state, mut rng) = world(6);
        state.ball.x = ARENA_WIDTH - BALL_SIZE + 1.0;
        state.ball.vx = 4.0;
        state.ball.y = 30.0;
        state.ball.vy = 4.0;
        // Keep the AI paddle clear of the ball's row.
        state.ai.y = ARENA_HEIGHT - PADDLE_HEIGHT;

        let frame = step(&mut state, None, &mut rng);
        assert_eq!(state.score.player, 1);
        assert_eq!(state.score.ai, 0);
        assert!(frame.cues.contains(&Cue::Score));
    }

    #[test]
    fn ai_paddle_tracks_downward_at_fixed_speed() {
        let (mut state, mut rng) = world(7);
        state.ai.y = 0.0;
        state.ball.y = ARENA_HEIGHT - BALL_SIZE - 40.0;
        state.ball.x = ARENA_WIDTH / 2.0;
        state.ball.vx = -4.0;
        state.ball.vy = 0.0;

        step(&mut state, None, &mut rng);
        assert_eq!(state.ai.y, AI_PADDLE_SPEED);
    }

    #[test]
    fn ai_paddle_tracks_upward_and_never_leaves_arena() {
        let (mut state, mut rng) = world(8);
        state.ai.y = 3.0;
        state.ball.y = 0.0;
        state.ball.x = ARENA_WIDTH / 2.0;
        state.ball.vx = -4.0;
        state.ball.vy = 0.0;

        step(&mut state, None, &mut rng);
        assert_eq!(state.ai.y, 0.0);

        // Still pinned at 0 on the next frame, not negative.
        state.ball.y = 0.0;
        state.ball.x = ARENA_WIDTH / 2.0;
        step(&mut state, None, &mut rng);
        assert_eq!(state.ai.y, 0.0);
    }

    #[test]
    fn player_paddle_reflects_ball_and_emits_hit() {
        let (mut state, mut rng) = world(9);
        state.player.y = 100.0;
        // After translation the ball sits at x=18, inside the loose
        // left-side window, overlapping the paddle vertically.
        state.ball.x = 22.0;
        state.ball.y = 120.0;
        state.ball.vx = -4.0;
        state.ball.vy = 0.0;

        let frame = step(&mut state, None, &mut rng);
        assert_eq!(state.ball.vx, 4.0);
        assert_eq!(state.ball.x, 18.0);
        assert_eq!(frame.cues, vec![Cue::PaddleHit]);
    }

    #[test]
    fn ai_paddle_reflects_ball() {
        let (mut state, mut rng) = world(10);
        state.ai.y = 100.0;
        // After translation: x = 766, so ball right edge 786 >= 780.
        state.ball.x = 762.0;
        state.ball.y = 150.0;
        state.ball.vx = 4.0;
        state.ball.vy = 0.0;

        let frame = step(&mut state, None, &mut rng);
        assert_eq!(state.ball.vx, -4.0);
        assert_eq!(frame.cues, vec![Cue::PaddleHit]);
    }

    #[test]
    fn miss_above_player_paddle_does_not_reflect() {
        let (mut state, mut rng) = world(11);
        state.player.y = 300.0;
        state.ball.x = 22.0;
        state.ball.y = 100.0;
        state.ball.vx = -4.0;
        state.ball.vy = 0.0;

        step(&mut state, None, &mut rng);
        assert_eq!(state.ball.vx, -4.0);
    }

    #[test]
    fn bounce_and_score_can_share_a_frame() {
        let (mut state, mut rng) = world(12);
        // Ball leaves through the left edge while also clipping the top
        // wall; both cues must come out, bounce first.
        state.ball.x = -1.0;
        state.ball.vx = -4.0;
        state.ball.y = 2.0;
        state.ball.vy = -4.0;
        state.player.y = 200.0;

        let frame = step(&mut state, None, &mut rng);
        assert_eq!(frame.cues, vec![Cue::Bounce, Cue::Score]);
        assert_eq!(state.score.ai, 1);
    }

    #[test]
    fn perfect_tracking_never_concedes() {
        // Drive a long run with the pointer glued to the ball's row. The
        // player paddle must intercept every approach, so the AI never
        // scores. Exercises the whole collision geometry end to end.
        let (mut state, mut rng) = world(0xB00);

        for _ in 0..1000 {
            let pointer = state.ball.y + PADDLE_HEIGHT / 2.0;
            step(&mut state, Some(pointer), &mut rng);
            assert_eq!(state.score.ai, 0);
        }
    }
}
