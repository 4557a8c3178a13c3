use hecs::World;
use rand::Rng;

use crate::params::Params;
use crate::{Ball, Events, Field, GameRng, OpponentProfile, Paddle};

/// Steer every paddle carrying an `OpponentProfile` toward its target.
///
/// Approaching ball: aim under the ball with a random error scaled by
/// difficulty, closing `reaction_rate` of the gap per tick. Receding ball:
/// drift back to the centre at the idle rate.
pub fn drive_opponent(world: &mut World, field: &Field, rng: &mut GameRng) {
    let ball_data = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.pos, ball.vel));

    let Some((ball_pos, ball_vel)) = ball_data else {
        return;
    };

    for (_entity, (paddle, profile)) in world.query_mut::<(&mut Paddle, &OpponentProfile)>() {
        let approaching = ball_vel.y * paddle.side.toward() > 0.0;

        let (target, rate) = if approaching {
            let error = (rng.0.gen::<f32>() * 2.0 - 1.0)
                * profile.difficulty
                * field.paddle_width
                * Params::OPPONENT_ERROR_SPREAD;
            (
                ball_pos.x - field.paddle_width / 2.0 + error,
                profile.reaction_rate,
            )
        } else {
            (field.paddle_spawn_x(), Params::OPPONENT_IDLE_RATE)
        };

        paddle.x = field.clamp_paddle_x(paddle.x + (target - paddle.x) * rate);
    }
}

/// Feed this tick's outcome into each opponent's skill model
pub fn adapt_opponent(world: &mut World, events: &Events) {
    for (_entity, (paddle, profile)) in world.query_mut::<(&Paddle, &mut OpponentProfile)>() {
        let human = paddle.side.opponent();

        if events.paddle_hit == Some(human) {
            profile.record_return();
        }
        if events.point_scored == Some(paddle.side) {
            profile.record_miss();
            tracing::debug!(
                skill = profile.skill,
                difficulty = profile.difficulty,
                "opponent eased off"
            );
        }
    }
}
