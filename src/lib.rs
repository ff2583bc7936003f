//! # Mars Rover
//!
//! Simulates rovers driving on a bounded rectangular plateau. Each rover
//! starts at a position and heading, runs a string of `L`/`R`/`M`
//! instructions, and reports where it ended up. Moves that would leave the
//! plateau are dropped.
//!
//! The [`rover`] module holds the simulation; [`server`] wraps it in a small
//! axum HTTP service configured through [`config`].

pub mod config;
pub mod rover;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use rover::{
    get_rovers_position, parse_mission, Heading, Instruction, InstructionPolicy, Mission,
    Plateau, RoverError, RoverPlan, RoverState,
};

/// Crate version reported by the info endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
