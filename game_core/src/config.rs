use crate::{Params, Side};
use glam::Vec2;

/// Startup configuration problems. None of these can occur once the loop runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("surface height {height} cannot hold an object of height {needed}")]
    SurfaceTooShort { height: f32, needed: f32 },

    #[error("surface width {width} cannot hold both paddles and the ball (needs {needed})")]
    SurfaceTooNarrow { width: f32, needed: f32 },

    #[error("ball speed {ball_speed} per tick would tunnel through a paddle {paddle_width} wide")]
    TunnelingRisk { ball_speed: f32, paddle_width: f32 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub opponent_slack: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            opponent_slack: Params::OPPONENT_SLACK,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a surface of the given size
    pub fn with_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.surface_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Initial Y (top edge) that centers a paddle vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.surface_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle Y (top edge) to surface bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.surface_height - self.paddle_height)
    }

    /// Top-left corner of a ball centered on the surface
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.surface_width / 2.0 - self.ball_size / 2.0,
            self.surface_height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Check the tuning is playable before the loop starts.
    ///
    /// Collision is a per-tick overlap test, so a ball that travels at least
    /// a paddle width per tick can skip a paddle entirely. Such tunings are
    /// rejected here rather than handled with swept collision.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("paddle_margin", self.paddle_margin),
            ("opponent_slack", self.opponent_slack),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let tallest = self.paddle_height.max(self.ball_size);
        if self.surface_height < tallest {
            return Err(ConfigError::SurfaceTooShort {
                height: self.surface_height,
                needed: tallest,
            });
        }

        let needed = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        if self.surface_width < needed {
            return Err(ConfigError::SurfaceTooNarrow {
                width: self.surface_width,
                needed,
            });
        }

        if self.ball_speed >= self.paddle_width {
            return Err(ConfigError::TunnelingRisk {
                ball_speed: self.ball_speed,
                paddle_width: self.paddle_width,
            });
        }

        Ok(())
    }
}
