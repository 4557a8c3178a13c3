use crate::Ball;
use hecs::World;

/// Move ball by one fixed step
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
