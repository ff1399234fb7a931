//! Drawing the current state onto a 2D surface
//!
//! The renderer only reads the world. Hosts provide a [`Surface`]; the
//! browser client implements it for a canvas 2D context.

use glam::Vec2;
use hecs::World;

use crate::{Aabb, Ball, Config, Paddle, Params, Side};

/// Stroke settings for a dashed line
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: f32,
    pub dash: Vec<f32>, // Alternating on/off lengths
}

impl LineStyle {
    /// The decorative center line
    pub fn net() -> Self {
        Self {
            color: Params::NET_COLOR,
            width: Params::NET_LINE_WIDTH,
            dash: Params::NET_DASH.to_vec(),
        }
    }
}

/// A fixed-size 2D drawing target
pub trait Surface {
    /// Clear the region `(0, 0)..(width, height)`
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, rect: Aabb, color: &str);

    /// Stroke a dashed line. Stroke state changed here must not leak into
    /// later calls.
    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle);
}

/// Draw one frame: clear, net, player paddle, opponent paddle, ball
pub fn render<S: Surface + ?Sized>(world: &World, config: &Config, surface: &mut S) {
    surface.clear(config.surface_width, config.surface_height);

    let net_x = config.surface_width / 2.0;
    surface.stroke_dashed_line(
        Vec2::new(net_x, 0.0),
        Vec2::new(net_x, config.surface_height),
        &LineStyle::net(),
    );

    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side != Side::Left);
    for paddle in &paddles {
        surface.fill_rect(paddle.bounds(), paddle.color);
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        surface.fill_rect(ball.bounds(), ball.color);
    }
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    FillRect {
        rect: Aabb,
        color: String,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        style: LineStyle,
    },
}

/// Surface that records calls instead of drawing, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything drawn since the last call
    pub fn take_frame(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, rect: Aabb, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            style: style.clone(),
        });
    }
}
