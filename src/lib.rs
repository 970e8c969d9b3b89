//! cloud-snake - classic Snake under a drifting cloud layer
//!
//! This library provides:
//! - Core game logic (game module): snake, food, clouds, tick engine
//! - Key event mapping (input module)
//! - Session metrics with highscore tracking (metrics module)
//! - TUI rendering (render module)
//! - The async terminal app loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
