pub mod components;
pub mod config;
pub mod game_loop;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game_loop::*;
pub use geometry::*;
pub use params::*;
pub use render::{render, DrawCommand, LineStyle, RecordingSurface, Surface};
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one deterministic Pong tick
pub fn step(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    pointer: &PointerSlot,
    rng: &mut dyn RandomSource,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Commit the latest pointer position to the player paddle
    ingest_pointer(world, pointer, config);

    // 2. Opponent steps toward the ball
    track_ball(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (walls, then left paddle, then right paddle)
    check_collisions(world, config, events);

    // 5. Serve again if the ball left the surface
    check_out_of_bounds(world, config, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
