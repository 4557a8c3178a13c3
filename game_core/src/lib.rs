pub mod components;
pub mod config;
pub mod map;
pub mod match_state;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one fixed step
///
/// Physics runs at one update per host frame; there is no wall-clock delta.
pub fn step(
    world: &mut World,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    inputs: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply drags to paddles)
    ingest_inputs(world, field, inputs);

    // 2. Scripted opponent picks its move before the ball does
    drive_opponent(world, field, rng);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, field, config, events);

    // 5. Check scoring (ball crossed a goal line)
    check_scoring(world, field, config, score, events, rng);

    // 6. Opponent learns from the outcome
    adapt_opponent(world, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, x: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, x),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
