//! Rover instructions and the policy for characters outside `{L, R, M}`.

use std::fmt;

use super::error::RoverError;

/// A single rover command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Rotate 90 degrees counter-clockwise (`L`).
    Left,
    /// Rotate 90 degrees clockwise (`R`).
    Right,
    /// Move one grid unit forward (`M`).
    Move,
}

impl Instruction {
    /// Map a command character to an instruction.
    pub fn from_char(c: char) -> Option<Instruction> {
        match c {
            'L' => Some(Instruction::Left),
            'R' => Some(Instruction::Right),
            'M' => Some(Instruction::Move),
            _ => None,
        }
    }

    /// The command character for this instruction.
    pub fn as_char(self) -> char {
        match self {
            Instruction::Left => 'L',
            Instruction::Right => 'R',
            Instruction::Move => 'M',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// What to do with an instruction character that is not `L`, `R` or `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InstructionPolicy {
    /// Skip the character; the rover does nothing for it.
    #[default]
    Ignore,
    /// Fail the whole input with `InvalidInput`.
    Reject,
}

/// Decode an instruction line under the given policy.
///
/// An empty line yields an empty sequence.
pub fn parse_instructions(
    line: &str,
    policy: InstructionPolicy,
) -> Result<Vec<Instruction>, RoverError> {
    let mut instructions = Vec::with_capacity(line.len());
    for c in line.chars() {
        match (Instruction::from_char(c), policy) {
            (Some(instruction), _) => instructions.push(instruction),
            (None, InstructionPolicy::Ignore) => {}
            (None, InstructionPolicy::Reject) => {
                return Err(RoverError::invalid(format!(
                    "unknown instruction '{}'",
                    c.escape_default()
                )));
            }
        }
    }
    Ok(instructions)
}
