use hecs::World;

use crate::{Ball, Config, Paddle, Side};

/// Direction the opponent should step this tick: -1 = up, 0 = hold, 1 = down
///
/// Compares centers; inside the slack band the paddle holds still, which
/// keeps the tracking deliberately laggy.
pub fn opponent_dir(paddle: &Paddle, ball: &Ball, config: &Config) -> i8 {
    let paddle_center = paddle.center_y();
    let ball_center = ball.center_y();

    if paddle_center < ball_center - config.opponent_slack {
        1
    } else if paddle_center > ball_center + config.opponent_slack {
        -1
    } else {
        0
    }
}

/// Move the right paddle one step toward the ball
pub fn track_ball(world: &mut World, config: &Config) {
    let ball = world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball);
    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }
        let dir = opponent_dir(paddle, &ball, config);
        paddle.y += dir as f32 * config.paddle_speed;
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
