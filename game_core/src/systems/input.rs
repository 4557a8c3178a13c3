use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::Field;

/// Apply queued paddle drags, clamping each paddle to the field
pub fn ingest_inputs(world: &mut World, field: &Field, inputs: &mut InputQueue) {
    for (side, dx) in inputs.pop_inputs() {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.x = field.clamp_paddle_x(paddle.x + dx);
            }
        }
    }
}
