/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 70.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 8.0;
    pub const BALL_SPEED_BASE: f32 = 4.0;
    pub const BALL_SPEED_MAX: f32 = 8.0; // Cap on the perpendicular component
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const BALL_SPIN: f32 = 7.0; // Tangential speed range across the paddle face
    pub const SERVE_JITTER_MIN: f32 = 0.8;
    pub const SERVE_JITTER_RANGE: f32 = 0.4;

    // Score
    pub const WIN_SCORE: u32 = 10;
    pub const WIN_SCORE_VS_OPPONENT: u32 = 11;

    // Opponent
    pub const OPPONENT_DIFFICULTY_MIN: f32 = 0.1;
    pub const OPPONENT_DIFFICULTY_MAX: f32 = 0.7;
    pub const OPPONENT_REACTION_MIN: f32 = 0.02;
    pub const OPPONENT_REACTION_BASE: f32 = 0.05;
    pub const OPPONENT_REACTION_MAX: f32 = 0.2;
    pub const OPPONENT_IDLE_RATE: f32 = 0.02; // Recentering speed while the ball recedes
    pub const OPPONENT_ERROR_SPREAD: f32 = 1.5; // Aim error in paddle widths
    pub const SKILL_STREAK: u32 = 3; // Returns needed before skill starts to climb
    pub const SKILL_GAIN: f32 = 0.2;
    pub const SKILL_LOSS: f32 = 0.5;
    pub const SKILL_DIFFICULTY_SLOPE: f32 = 0.05;
    pub const SKILL_REACTION_SLOPE: f32 = 0.01;
}
