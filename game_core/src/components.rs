use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::params::Params;
use crate::{Config, Field, GameRng};

/// One end of the field. `Top` is player 1, `Bottom` is player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Top, Side::Bottom];

    pub fn opponent(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
        }
    }

    /// Sign of the vertical velocity of a ball travelling toward this side
    pub fn toward(self) -> f32 {
        match self {
            Side::Top => -1.0,
            Side::Bottom => 1.0,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, clamped to the field
}

impl Paddle {
    pub fn new(side: Side, x: f32) -> Self {
        Self { side, x }
    }

    /// Whether a horizontal coordinate lies on the paddle face
    pub fn spans(&self, x: f32, width: f32) -> bool {
        x >= self.x && x <= self.x + width
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner of the square ball
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to center with random direction
    pub fn reset(&mut self, field: &Field, config: &Config, rng: &mut GameRng) {
        self.pos = field.ball_spawn();
        self.vel = Vec2::new(
            serve_component(config.ball_speed_base, rng),
            serve_component(config.ball_speed_base, rng),
        );
    }
}

/// `±base × (0.8 + r × 0.4)`, sign picked independently of magnitude
fn serve_component(base: f32, rng: &mut GameRng) -> f32 {
    let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    let jitter = Params::SERVE_JITTER_MIN + rng.0.gen::<f32>() * Params::SERVE_JITTER_RANGE;
    sign * base * jitter
}

/// Adaptive controller state, attached to the paddle entity it drives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentProfile {
    /// Aim error magnitude
    pub difficulty: f32,
    /// Fraction of the remaining distance covered per tick
    pub reaction_rate: f32,
    pub skill: f32,
    pub consecutive_hits: u32,
}

impl Default for OpponentProfile {
    fn default() -> Self {
        let mut profile = Self {
            difficulty: Params::OPPONENT_DIFFICULTY_MAX,
            reaction_rate: Params::OPPONENT_REACTION_BASE,
            skill: 0.0,
            consecutive_hits: 0,
        };
        profile.recompute();
        profile
    }
}

impl OpponentProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The human side returned the ball
    pub fn record_return(&mut self) {
        self.consecutive_hits += 1;
        if self.consecutive_hits > Params::SKILL_STREAK {
            self.skill += Params::SKILL_GAIN;
            self.recompute();
        }
    }

    /// The human side let a point through
    pub fn record_miss(&mut self) {
        self.consecutive_hits = 0;
        self.skill = (self.skill - Params::SKILL_LOSS).max(0.0);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.difficulty = (Params::OPPONENT_DIFFICULTY_MAX
            - self.skill * Params::SKILL_DIFFICULTY_SLOPE)
            .clamp(Params::OPPONENT_DIFFICULTY_MIN, Params::OPPONENT_DIFFICULTY_MAX);
        self.reaction_rate = (Params::OPPONENT_REACTION_BASE
            + self.skill * Params::SKILL_REACTION_SLOPE)
            .clamp(Params::OPPONENT_REACTION_MIN, Params::OPPONENT_REACTION_MAX);
    }
}
