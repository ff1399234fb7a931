use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Normalized offset of the ball's center from the paddle's center:
/// -1 at the top edge, 0 at the center, 1 at the bottom edge.
pub fn impact_ratio(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center_y() - paddle.center_y()) / (paddle.height / 2.0)
}

/// Whether the ball's leading edge is inside the paddle's face this tick
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let ball_box = ball.bounds();
    let paddle_box = paddle.bounds();
    let leading_x = match paddle.side {
        Side::Left => ball_box.min.x,
        Side::Right => ball_box.max.x,
    };
    paddle_box.spans_x(leading_x) && ball_box.overlaps_y(&paddle_box)
}

/// Reflect off the top and bottom edges of the surface
pub fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    let mut hit = false;
    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    if ball.pos.y + ball.size >= config.surface_height {
        ball.pos.y = config.surface_height - ball.size;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    hit
}

/// Snap the ball onto the paddle's face, send it back the other way and
/// derive the new vertical speed from where it struck. Horizontal speed
/// keeps its magnitude; only its sign flips.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    match paddle.side {
        Side::Left => ball.pos.x = paddle.x + paddle.width,
        Side::Right => ball.pos.x = paddle.x - ball.size,
    }
    ball.vel.x = -ball.vel.x;
    ball.vel.y = config.ball_speed * impact_ratio(ball, paddle);
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    // Left paddle resolves first
    paddles.sort_by_key(|paddle| paddle.side != Side::Left);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config) {
            log::debug!("ball hit wall at y={}", ball.pos.y);
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if touches_paddle(ball, paddle) {
                bounce_off_paddle(ball, paddle, config);
                log::debug!(
                    "ball hit {:?} paddle, new velocity {:?}",
                    paddle.side,
                    ball.vel
                );
                events.ball_hit_paddle = Some(paddle.side);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn the_ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("ball")
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, -3.0), Vec2::new(5.0, -3.0), 16.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.pos.y, 0.0, "Ball should be clamped to the top edge");
        assert_eq!(ball.vel.y, 3.0, "Ball should bounce down");
        assert_eq!(ball.vel.x, 5.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_resting_on_top_edge_reflects() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 0.0), Vec2::new(5.0, -5.0), 16.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel.y, 5.0);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        let y = config.surface_height - config.ball_size + 2.0;
        create_ball(&mut world, Vec2::new(400.0, y), Vec2::new(-5.0, 4.0), 16.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(
            ball.pos.y + ball.size,
            config.surface_height,
            "Bottom edge should sit on the boundary"
        );
        assert_eq!(ball.vel.y, -4.0, "Ball should bounce up");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_hit_in_open_field() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(5.0, 5.0), 16.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(the_ball(&world).vel, Vec2::new(5.0, 5.0));
        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let paddle = Paddle::new(Side::Left, &config);

        // Leading edge 4 units inside the paddle face
        let ball_pos = Vec2::new(
            paddle.x + paddle.width - 4.0,
            paddle.center_y() - config.ball_size / 2.0,
        );
        create_ball(&mut world, ball_pos, Vec2::new(-5.0, 0.0), 16.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.pos.x, paddle.x + paddle.width, "Snapped to the paddle face");
        assert_eq!(ball.vel.x, 5.0, "Ball should bounce right");
        assert!(ball.vel.y.abs() < 1e-5, "Center hit leaves no vertical speed");
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        let paddle = Paddle::new(Side::Right, &config);

        let ball_pos = Vec2::new(
            paddle.x - config.ball_size + 3.0,
            paddle.center_y() - config.ball_size / 2.0 + 25.0,
        );
        create_ball(&mut world, ball_pos, Vec2::new(5.0, -5.0), 16.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.pos.x + ball.size, paddle.x, "Right edge snapped to paddle");
        assert_eq!(ball.vel.x, -5.0, "Ball should bounce left");
        // Struck halfway between center and bottom edge
        assert!((ball.vel.y - 2.5).abs() < 1e-5, "got {}", ball.vel.y);
        assert_eq!(events.ball_hit_paddle, Some(Side::Right));
    }

    #[test]
    fn test_trajectory_affected_by_hit_position() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let paddle = Paddle::new(Side::Left, &config);
        let x = paddle.x + paddle.width - 2.0;

        // Ball center on the paddle's top edge
        create_ball(
            &mut world,
            Vec2::new(x, paddle.y - config.ball_size / 2.0),
            Vec2::new(-5.0, 0.0),
            16.0,
        );
        check_collisions(&mut world, &config, &mut events);
        assert!((the_ball(&world).vel.y + config.ball_speed).abs() < 1e-5);

        // Ball center on the paddle's bottom edge
        world.clear();
        create_paddle(&mut world, Side::Left, &config);
        create_ball(
            &mut world,
            Vec2::new(x, paddle.y + paddle.height - config.ball_size / 2.0),
            Vec2::new(-5.0, 0.0),
            16.0,
        );
        check_collisions(&mut world, &config, &mut events);
        assert!((the_ball(&world).vel.y - config.ball_speed).abs() < 1e-5);
    }

    #[test]
    fn test_horizontal_speed_magnitude_never_scaled() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let paddle = Paddle::new(Side::Left, &config);

        create_ball(
            &mut world,
            Vec2::new(paddle.x + 1.0, paddle.y + 3.0),
            Vec2::new(-5.0, 5.0),
            16.0,
        );
        check_collisions(&mut world, &config, &mut events);

        assert_eq!(the_ball(&world).vel.x, 5.0);
    }

    #[test]
    fn test_grazing_ball_misses_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let paddle = Paddle::new(Side::Left, &config);

        // Bottom edge exactly on the paddle's top edge: no vertical overlap
        create_ball(
            &mut world,
            Vec2::new(paddle.x + 4.0, paddle.y - config.ball_size),
            Vec2::new(-5.0, -5.0),
            16.0,
        );
        check_collisions(&mut world, &config, &mut events);

        assert_eq!(the_ball(&world).vel, Vec2::new(-5.0, -5.0));
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_ball_past_paddle_face_is_not_caught() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let paddle = Paddle::new(Side::Left, &config);

        // Leading edge already behind the paddle's left edge
        create_ball(
            &mut world,
            Vec2::new(paddle.x - 1.0, paddle.center_y()),
            Vec2::new(-5.0, 0.0),
            16.0,
        );
        check_collisions(&mut world, &config, &mut events);

        assert_eq!(the_ball(&world).vel.x, -5.0);
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);

        // Should not panic or error
        check_collisions(&mut world, &config, &mut events);

        assert_eq!(events, Events::default());
    }
}
