use glam::Vec2;

use crate::{Aabb, Config, Params, RandomSource};

/// Which end of the surface a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player, driven by the pointer
    Right, // Scripted opponent
}

/// Paddle component - a vertically moving rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed per side
    pub y: f32, // Top edge, clamped to surface
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        let color = match side {
            Side::Left => Params::PLAYER_COLOR,
            Side::Right => Params::OPPONENT_COLOR,
        };
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_spawn_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            color,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

/// Ball component - a square that moves a fixed amount per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2, // Units per tick
    pub size: f32,
    pub color: &'static str,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            color: Params::BALL_COLOR,
        }
    }

    /// Centered ball with a random diagonal direction
    pub fn serve(config: &Config, rng: &mut dyn RandomSource) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO, config.ball_size);
        ball.reset(config, rng);
        ball
    }

    /// Reset ball to center with random direction.
    ///
    /// Each axis gets `±ball_speed` with its sign picked independently.
    pub fn reset(&mut self, config: &Config, rng: &mut dyn RandomSource) {
        self.pos = config.ball_spawn();
        let sign = |heads: bool| if heads { 1.0 } else { -1.0 };
        let vx = config.ball_speed * sign(rng.coin_flip());
        let vy = config.ball_speed * sign(rng.coin_flip());
        self.vel = Vec2::new(vx, vy);
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(self.size))
    }
}
