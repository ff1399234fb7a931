pub mod bounds;
pub mod collision;
pub mod input;
pub mod movement;
pub mod opponent;

pub use bounds::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use opponent::*;
