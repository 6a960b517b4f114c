//! Trail Snake - a snake on a wrap-around grid whose body retraces the head's path
//!
//! This library provides:
//! - Core simulation (game module): grid wrapping, turn propagation, rounds
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - Session metrics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
