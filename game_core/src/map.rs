use glam::Vec2;

use crate::{Config, Side};

/// Playing field bounds. Paddles guard the top and bottom edges, the side
/// walls reflect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
}

impl Field {
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
            paddle_width: config.paddle_width,
            paddle_height: config.paddle_height,
            ball_size: config.ball_size,
        }
    }

    /// Same field with new outer dimensions
    pub fn resized(&self, width: f32, height: f32) -> Self {
        Self {
            width: width.max(self.paddle_width),
            height: height.max(self.paddle_height * 2.0 + self.ball_size),
            ..*self
        }
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle offset that centres the paddle horizontally
    pub fn paddle_spawn_x(&self) -> f32 {
        self.width / 2.0 - self.paddle_width / 2.0
    }

    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(0.0, (self.width - self.paddle_width).max(0.0))
    }

    /// Right-most x the ball may reach before bouncing off the side wall
    pub fn wall_right(&self) -> f32 {
        self.width - self.ball_size
    }

    /// Ball y at which a side's paddle face is reached
    pub fn paddle_line(&self, side: Side) -> f32 {
        match side {
            Side::Top => self.paddle_height,
            Side::Bottom => self.height - self.paddle_height - self.ball_size,
        }
    }

    /// Whether a ball at `y` has reached the paddle band of `side`
    pub fn in_paddle_band(&self, side: Side, y: f32) -> bool {
        match side {
            Side::Top => y <= self.paddle_line(Side::Top),
            Side::Bottom => y >= self.paddle_line(Side::Bottom),
        }
    }

    /// Side whose goal line the ball has crossed, if any
    pub fn goal_crossed(&self, y: f32) -> Option<Side> {
        if y < 0.0 {
            Some(Side::Top)
        } else if y > self.height {
            Some(Side::Bottom)
        } else {
            None
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
