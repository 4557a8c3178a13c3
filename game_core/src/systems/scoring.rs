use crate::{Ball, Config, Events, Field, GameRng, Score};
use hecs::World;

/// Check if ball crossed a goal line (scoring)
///
/// Runs after collisions: a ball caught by a paddle this tick never scores.
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if events.paddle_hit.is_some() {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(goal) = field.goal_crossed(ball.pos.y) {
            let scorer = goal.opponent();
            score.increment(scorer);
            events.point_scored = Some(scorer);
            tracing::debug!(?scorer, top = score.top, bottom = score.bottom, "point scored");

            ball.reset(field, config, rng);
        }
    }
}
