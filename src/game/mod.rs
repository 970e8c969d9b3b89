//! Core game logic module
//!
//! Everything here is pure simulation with no I/O or rendering dependencies,
//! so the whole tick pipeline can be driven from tests.

pub mod action;
pub mod cloud;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use cloud::{Cloud, Edge};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{CollisionType, GameState, Position, Snake};
