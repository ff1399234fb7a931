/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface (the host replaces these with the canvas size)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 24.0; // Gap between side wall and paddle
    pub const PADDLE_SPEED: f32 = 5.0; // Opponent step per tick

    // Opponent
    pub const OPPONENT_SLACK: f32 = 10.0; // Dead-zone around the ball center

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SPEED: f32 = 5.0; // Per-axis speed per tick

    // Colors
    pub const PLAYER_COLOR: &'static str = "#0ff";
    pub const OPPONENT_COLOR: &'static str = "#f0f";
    pub const BALL_COLOR: &'static str = "#fff";

    // Net
    pub const NET_COLOR: &'static str = "#888";
    pub const NET_LINE_WIDTH: f32 = 4.0;
    pub const NET_DASH: [f32; 2] = [8.0, 16.0];
}
