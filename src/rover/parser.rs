//! Text input parsing.
//!
//! The input block looks like:
//!
//! ```text
//! 5 5
//! 1 2 N
//! LMLMLMLMM
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! The first line holds the plateau's upper-right corner. Every rover then
//! takes two lines: its start position and heading, and its instructions.

use std::str::FromStr;

use super::error::RoverError;
use super::heading::Heading;
use super::instruction::{parse_instructions, Instruction, InstructionPolicy};
use super::plateau::Plateau;
use super::state::RoverState;

/// One rover's start state and the commands it will run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverPlan {
    pub start: RoverState,
    pub instructions: Vec<Instruction>,
}

/// A fully parsed input block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub plateau: Plateau,
    /// Rovers in the order they appear in the input.
    pub rovers: Vec<RoverPlan>,
}

/// Parse an input block, ignoring unknown instruction characters.
pub fn parse_mission(input: &str) -> Result<Mission, RoverError> {
    parse_mission_with(input, InstructionPolicy::Ignore)
}

/// Parse an input block with an explicit policy for unknown instructions.
///
/// # Errors
///
/// Returns `RoverError::InvalidInput` for a malformed plateau or position
/// line, an unknown heading, a position line with no instruction line
/// after it, or (under
/// `InstructionPolicy::Reject`) an unknown instruction character.
pub fn parse_mission_with(input: &str, policy: InstructionPolicy) -> Result<Mission, RoverError> {
    let lines: Vec<&str> = input.trim().split('\n').map(str::trim).collect();

    let plateau = parse_plateau(lines[0])?;

    let mut rovers = Vec::with_capacity(lines.len() / 2);
    for (index, pair) in lines[1..].chunks(2).enumerate() {
        // Header is line 1; rover `index` starts at line 2 + 2 * index.
        let line_no = 2 + 2 * index;
        let [position, commands] = pair else {
            return Err(RoverError::invalid(format!(
                "line {}: rover has no instruction line",
                line_no
            )));
        };

        // A start off the plateau is accepted; only moves are bounds-checked.
        let start = parse_position(position, line_no)?;

        let instructions = parse_instructions(commands, policy).map_err(|e| {
            RoverError::invalid(format!("line {}: {}", line_no + 1, e.reason()))
        })?;

        rovers.push(RoverPlan {
            start,
            instructions,
        });
    }

    Ok(Mission { plateau, rovers })
}

fn parse_plateau(line: &str) -> Result<Plateau, RoverError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [max_x, max_y] = tokens.as_slice() else {
        return Err(RoverError::invalid(format!(
            "line 1: expected 2 plateau values, found {}",
            tokens.len()
        )));
    };
    Ok(Plateau::new(
        parse_number(max_x, 1)?,
        parse_number(max_y, 1)?,
    ))
}

fn parse_position(line: &str, line_no: usize) -> Result<RoverState, RoverError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, heading] = tokens.as_slice() else {
        return Err(RoverError::invalid(format!(
            "line {}: expected 'x y heading', found {} tokens",
            line_no,
            tokens.len()
        )));
    };
    let heading = Heading::from_str(heading)
        .map_err(|e| RoverError::invalid(format!("line {}: {}", line_no, e.reason())))?;
    Ok(RoverState::new(
        parse_number(x, line_no)?,
        parse_number(y, line_no)?,
        heading,
    ))
}

fn parse_number(token: &str, line_no: usize) -> Result<u32, RoverError> {
    token.parse::<u32>().map_err(|e| {
        RoverError::invalid(format!("line {}: bad number '{}': {}", line_no, token, e))
    })
}
