use crate::{Ball, Config, Events, RandomSource, Side};
use hecs::World;

/// Side whose paddle let the ball through, if the ball has left the surface
pub fn missed_by(ball: &Ball, config: &Config) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Left)
    } else if ball.pos.x + ball.size > config.surface_width {
        Some(Side::Right)
    } else {
        None
    }
}

/// Check if ball left the surface and serve it again from the center.
/// No score is kept; the miss is only reported through `events`.
pub fn check_out_of_bounds(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = missed_by(ball, config) {
            ball.reset(config, rng);
            log::debug!("{:?} paddle missed, ball served with {:?}", side, ball.vel);
            events.ball_reset = Some(side);
        }
    }
}
