use game_core::{Match, Side};

/// Scripted stand-in for a human paddle
///
/// Chases the ball's centre while it approaches and drifts back to the middle
/// otherwise. It never aims off target, so only `reaction` limits it.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub side: Side,
    /// Share of the remaining gap closed each tick
    pub reaction: f32,
}

impl Autopilot {
    pub fn new(side: Side, reaction: f32) -> Self {
        Self {
            side,
            reaction: reaction.clamp(0.0, 1.0),
        }
    }

    /// Signed horizontal drag for this tick
    pub fn drag(&self, game: &Match) -> f32 {
        let Some(ball) = game.ball() else {
            return 0.0;
        };
        let field = game.field();
        let current = game.paddle_x(self.side);

        let target = if ball.vel.y * self.side.toward() > 0.0 {
            ball.pos.x + field.ball_size / 2.0 - field.paddle_width / 2.0
        } else {
            field.paddle_spawn_x()
        };

        (field.clamp_paddle_x(target) - current) * self.reaction
    }

    /// Queue this tick's drag on `game`
    pub fn steer(&self, game: &mut Match) {
        let dx = self.drag(game);
        if dx != 0.0 {
            game.push_drag(self.side, dx);
        }
    }
}
