use serde::{Deserialize, Serialize};

use crate::params::Params;
use crate::Side;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub ball_speed_base: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub ball_spin: f32,
    pub win_score: u32,
    /// Top paddle is driven by the opponent controller
    pub opponent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_size: Params::BALL_SIZE,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_spin: Params::BALL_SPIN,
            win_score: Params::WIN_SCORE,
            opponent: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-player configuration: opponent on the top paddle, first to 11
    pub fn vs_opponent() -> Self {
        Self {
            win_score: Params::WIN_SCORE_VS_OPPONENT,
            opponent: true,
            ..Self::default()
        }
    }

    /// Side a human plays on when the opponent is enabled
    pub fn human_side(&self) -> Side {
        Side::Bottom
    }

    pub fn opponent_side(&self) -> Side {
        self.human_side().opponent()
    }

    /// Clamp tunables into a playable range
    ///
    /// Games end on reaching `win_score`, so it is at least 1. Sizes must be
    /// positive and the field must hold a paddle across and both paddles
    /// plus the ball down its length.
    pub fn validated(mut self) -> Self {
        self.win_score = self.win_score.max(1);
        self.paddle_width = positive_or(self.paddle_width, Params::PADDLE_WIDTH);
        self.paddle_height = positive_or(self.paddle_height, Params::PADDLE_HEIGHT);
        self.ball_size = positive_or(self.ball_size, Params::BALL_SIZE);
        self.field_width = finite_or(self.field_width, Params::FIELD_WIDTH).max(self.paddle_width);
        self.field_height = finite_or(self.field_height, Params::FIELD_HEIGHT)
            .max(self.paddle_height * 2.0 + self.ball_size);
        self
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
