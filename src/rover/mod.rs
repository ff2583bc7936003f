//! Rover simulation on a bounded plateau.
//!
//! # Pipeline
//!
//! ```text
//! raw text
//!   ↓  parse_mission()
//! Mission (plateau + ordered RoverPlans)
//!   ↓  run_mission()
//! Vec<RoverState>
//!   ↓  Display
//! "x y heading" lines
//! ```
//!
//! # Example
//!
//! ```rust
//! use mars_rover::rover::get_rovers_position;
//!
//! let out = get_rovers_position("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM").unwrap();
//! assert_eq!(out, vec!["1 3 N", "5 1 E"]);
//! ```

pub mod error;
pub mod heading;
pub mod instruction;
pub mod parser;
pub mod plateau;
pub mod simulation;
pub mod state;

// Re-exports
pub use error::RoverError;
pub use heading::Heading;
pub use instruction::{parse_instructions, Instruction, InstructionPolicy};
pub use parser::{parse_mission, parse_mission_with, Mission, RoverPlan};
pub use plateau::Plateau;
pub use simulation::{get_rovers_position, get_rovers_position_with, run_mission, simulate_rover};
pub use state::RoverState;
