use hecs::World;

use crate::{Config, Paddle, PointerSlot, Side};

/// Translate a screen-space pointer y into surface coordinates
pub fn surface_local_y(client_y: f32, surface_top: f32) -> f32 {
    client_y - surface_top
}

/// Paddle top edge that centers the paddle on the pointer, kept on the surface
pub fn paddle_y_for_pointer(pointer_y: f32, config: &Config) -> f32 {
    config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0)
}

/// Commit the latest pointer position (if one arrived since the last tick)
/// to the player paddle. Only y changes.
pub fn ingest_pointer(world: &mut World, pointer: &PointerSlot, config: &Config) {
    let Some(pointer_y) = pointer.take() else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.y = paddle_y_for_pointer(pointer_y, config);
        }
    }
}
