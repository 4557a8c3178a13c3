use crate::{Ball, Config, Events, Field, Paddle};
use hecs::World;

/// Check ball collisions with side walls and paddles
///
/// Collision is evaluated against the current position only (no swept test),
/// so a fast ball can skip past a paddle's horizontal span between ticks.
pub fn check_collisions(world: &mut World, field: &Field, config: &Config, events: &mut Events) {
    // First, collect ball and paddle data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    // Side walls
    if ball_pos.x <= 0.0 || ball_pos.x >= field.wall_right() {
        ball_vel.x = -ball_vel.x;
        // Clamp position to prevent stuck
        ball_pos.x = ball_pos.x.clamp(0.0, field.wall_right());
        events.ball_hit_wall = true;
    }

    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for paddle in paddles {
        let side = paddle.side;
        if !field.in_paddle_band(side, ball_pos.y) || !paddle.spans(ball_pos.x, field.paddle_width) {
            continue;
        }

        // A ball already heading back into the field is not caught twice
        if ball_vel.y * side.toward() <= 0.0 {
            continue;
        }

        ball_vel.y = -ball_vel.y;

        let hit = hit_position(ball_pos.x, paddle.x, field.paddle_width);
        ball_vel.x = deflection(hit, config);
        ball_vel.y = ramp_speed(ball_vel.y, config);

        events.paddle_hit = Some(side);
        break;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = ball_pos;
        ball.vel = ball_vel;
    }
}

/// Where the ball met the paddle face: 0 at the left edge, 1 at the right
pub fn hit_position(ball_x: f32, paddle_x: f32, paddle_width: f32) -> f32 {
    ((ball_x - paddle_x) / paddle_width).clamp(0.0, 1.0)
}

/// Tangential velocity after a hit: zero at the centre, `±spin/2` at the edges
pub fn deflection(hit: f32, config: &Config) -> f32 {
    config.ball_spin * (hit - 0.5)
}

/// Scale the perpendicular speed after a hit, capped at `ball_speed_max`
pub fn ramp_speed(vy: f32, config: &Config) -> f32 {
    if vy.abs() >= config.ball_speed_max {
        return vy;
    }
    let ramped = (vy.abs() * config.ball_speed_increase).min(config.ball_speed_max);
    ramped.copysign(vy)
}
