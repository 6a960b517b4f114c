pub mod renderer;
pub mod scene;

pub use renderer::{CellKind, Renderer};
pub use scene::{Eye, Scene, Sprite, Tint};
