use rand::Rng;

// Arena coordinate system - the "true" field the physics runs in.
// The renderer scales this to whatever terminal size it gets; the
// collision math never sees terminal cells.
pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 400.0;

pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
pub const PLAYER_X: f32 = 10.0;
pub const AI_X: f32 = ARENA_WIDTH - PADDLE_WIDTH - 10.0;

// Ball is a square with a top-left anchor. The renderer draws the ghost
// at twice this size; collisions always use the base size.
pub const BALL_SIZE: f32 = 20.0;
pub const BALL_SPEED: f32 = 4.0;

// AI paddle movement per frame. No dead zone, so a centered paddle
// oscillates by +-5 units around the ball.
pub const AI_PADDLE_SPEED: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    /// Recenter the ball and draw fresh velocity signs, both axes
    /// independently, from the supplied RNG.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.x = ARENA_WIDTH / 2.0 - BALL_SIZE / 2.0;
        self.y = ARENA_HEIGHT / 2.0 - BALL_SIZE / 2.0;
        self.vx = BALL_SPEED * sign(rng);
        self.vy = BALL_SPEED * sign(rng);
    }
}

fn sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.gen::<bool>() {
        1.0
    } else {
        -1.0
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub y: f32,
}

impl Paddle {
    pub fn centered() -> Self {
        Self {
            y: ARENA_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Clamp a candidate top edge into the arena.
    pub fn clamp_y(y: f32) -> f32 {
        y.clamp(0.0, ARENA_HEIGHT - PADDLE_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

/// The whole mutable world: both paddles, the ball, and the score.
/// Owned exclusively by the Simulation - nothing else mutates it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut ball = Ball {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
        };
        ball.reset(rng);

        Self {
            player: Paddle::centered(),
            ai: Paddle::centered(),
            ball,
            score: Score::default(),
        }
    }

    /// Fresh round: zero the score, recenter both paddles, re-serve the ball.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.score = Score::default();
        self.player = Paddle::centered();
        self.ai = Paddle::centered();
        self.ball.reset(rng);
    }
}
