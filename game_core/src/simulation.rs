use std::sync::Arc;

use glam::Vec2;
use hecs::World;

use crate::render::{render, Surface};
use crate::systems::surface_local_y;
use crate::{create_ball, create_paddle, step, Ball, Config, ConfigError, Events, GameRng, Paddle};
use crate::{PointerSlot, RandomSource, Side};

/// One self-contained game: both paddles, the ball and everything the
/// per-tick systems need. Independent instances never share state.
pub struct Simulation<R: RandomSource = GameRng> {
    pub world: World,
    pub config: Config,
    pub events: Events,
    pub rng: R,
    pointer: Arc<PointerSlot>,
    tick: u64,
}

impl<R: RandomSource> Simulation<R> {
    /// Build a game from a checked configuration. An unplayable `config` is
    /// rejected here so no tick ever sees it.
    pub fn new(config: Config, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);

        // Create ball
        let ball = Ball::serve(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel, ball.size);

        log::info!(
            "simulation ready on {}x{} surface, serving {:?}",
            config.surface_width,
            config.surface_height,
            ball.vel
        );

        Ok(Self {
            world,
            config,
            events: Events::new(),
            rng,
            pointer: Arc::new(PointerSlot::new()),
            tick: 0,
        })
    }

    /// Handle for the input collaborator to write pointer positions into
    pub fn pointer(&self) -> Arc<PointerSlot> {
        Arc::clone(&self.pointer)
    }

    /// Record a pointer move given in screen coordinates
    pub fn pointer_moved(&self, client_y: f32, surface_top: f32) {
        self.pointer.store(surface_local_y(client_y, surface_top));
    }

    /// Advance one tick: pointer, opponent, ball, collisions, reset
    pub fn step(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.events,
            &self.pointer,
            &mut self.rng,
        );
        self.tick += 1;
        log::trace!("tick {} done, events {:?}", self.tick, self.events);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render(&self.world, &self.config, surface);
    }

    /// Ticks completed so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Move a paddle directly (clamped), bypassing its controller
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }

    /// Place the ball directly, bypassing physics
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedRng;

    #[test]
    fn test_new_simulation_is_centered() {
        let config = Config::new();
        let sim = Simulation::new(config.clone(), ScriptedRng::new([false, true])).unwrap();

        let player = sim.paddle(Side::Left).unwrap();
        let opponent = sim.paddle(Side::Right).unwrap();
        let ball = sim.ball().unwrap();

        assert_eq!(player.y, config.paddle_spawn_y());
        assert_eq!(opponent.y, config.paddle_spawn_y());
        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(ball.vel, Vec2::new(-5.0, 5.0));
        assert_eq!(sim.tick(), 0);
    }

    #[test]
    fn test_pointer_moved_translates_screen_coordinates() {
        let mut sim = Simulation::new(Config::new(), GameRng::new(1)).unwrap();

        // Surface sits 80 units down the page
        sim.pointer_moved(480.0, 80.0);
        sim.step();

        assert_eq!(sim.paddle(Side::Left).unwrap().y, 400.0 - 50.0);
    }

    #[test]
    fn test_pointer_handle_is_shared() {
        let mut sim = Simulation::new(Config::new(), GameRng::new(1)).unwrap();
        let pointer = sim.pointer();

        pointer.store(150.0);
        pointer.store(60.0);
        sim.step();

        assert_eq!(sim.paddle(Side::Left).unwrap().y, 10.0);
        assert!(pointer.is_empty(), "Tick consumed the pending position");
    }

    #[test]
    fn test_set_paddle_y_clamps() {
        let mut sim = Simulation::new(Config::new(), GameRng::new(1)).unwrap();
        sim.set_paddle_y(Side::Right, 9_999.0);
        assert_eq!(sim.paddle(Side::Right).unwrap().y, 500.0);
        assert_eq!(sim.paddle(Side::Left).unwrap().y, 250.0);
    }

    #[test]
    fn test_rejects_unplayable_config() {
        let result = Simulation::new(Config::with_surface(800.0, 80.0), GameRng::new(1));
        match result {
            Err(ConfigError::SurfaceTooShort { height, needed }) => {
                assert_eq!(height, 80.0);
                assert_eq!(needed, 100.0, "A paddle is the tallest object");
            }
            Err(other) => panic!("Wrong error: {other}"),
            Ok(_) => panic!("Short surface accepted"),
        }

        let fast = Config {
            ball_speed: 20.0,
            ..Config::new()
        };
        assert!(matches!(
            Simulation::new(fast, GameRng::new(1)),
            Err(ConfigError::TunnelingRisk { .. })
        ));
    }

    #[test]
    fn test_step_counts_ticks() {
        let mut sim = Simulation::new(Config::new(), GameRng::new(1)).unwrap();
        for _ in 0..3 {
            sim.step();
        }
        assert_eq!(sim.tick(), 3);
    }
}
