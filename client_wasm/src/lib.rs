//! Canvas 2D browser client for Pong
//!
//! Owns nothing but the host side: canvas lookup, mouse wiring and the
//! animation frame loop. All game rules live in `game_core`.

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod session;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;

#[cfg(target_arch = "wasm32")]
pub use bindings::{start_game, stop_game};
