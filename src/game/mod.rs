//! Core simulation for the wrap-around snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A direction change reaches the head on the tick it is issued and travels down
//! the body one segment per tick, so the body retraces the head's path.

pub mod action;
pub mod config;
pub mod grid;
pub mod round;
pub mod segment;
pub mod snake;
pub mod turns;

// Re-export commonly used types
pub use action::{Direction, Velocity};
pub use config::GameConfig;
pub use grid::{GridWorld, Position};
pub use round::{GameRound, TickInfo};
pub use segment::Segment;
pub use snake::Snake;
pub use turns::{TurnId, TurnQueue};
