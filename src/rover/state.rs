//! Rover position and heading, and how a single instruction changes them.

use std::fmt;

use super::heading::Heading;
use super::instruction::Instruction;
use super::plateau::Plateau;

/// Position and heading of one rover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoverState {
    pub x: u32,
    pub y: u32,
    pub heading: Heading,
}

impl RoverState {
    pub fn new(x: u32, y: u32, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Apply one instruction.
    ///
    /// A move that would leave the plateau is discarded and the state is
    /// unchanged. Returns `false` only for such a discarded move.
    pub fn apply(&mut self, instruction: Instruction, plateau: &Plateau) -> bool {
        match instruction {
            Instruction::Left => {
                self.heading = self.heading.left();
                true
            }
            Instruction::Right => {
                self.heading = self.heading.right();
                true
            }
            Instruction::Move => match self.forward(plateau) {
                Some((x, y)) => {
                    self.x = x;
                    self.y = y;
                    true
                }
                None => false,
            },
        }
    }

    /// The cell one step ahead, if it is on the plateau.
    fn forward(&self, plateau: &Plateau) -> Option<(u32, u32)> {
        let (dx, dy) = self.heading.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        plateau.contains(x, y).then_some((x, y))
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_inside_changes_one_coordinate() {
        let plateau = Plateau::new(5, 5);
        for heading in Heading::ALL {
            let mut rover = RoverState::new(2, 2, heading);
            assert!(rover.apply(Instruction::Move, &plateau));
            let (dx, dy) = heading.delta();
            assert_eq!(rover.x as i32 - 2, dx);
            assert_eq!(rover.y as i32 - 2, dy);
            assert_eq!(rover.heading, heading);
        }
    }

    #[test]
    fn test_move_off_edge_is_discarded() {
        let plateau = Plateau::new(3, 3);
        let cases = [
            RoverState::new(0, 0, Heading::West),
            RoverState::new(0, 0, Heading::South),
            RoverState::new(3, 3, Heading::East),
            RoverState::new(3, 3, Heading::North),
        ];
        for start in cases {
            let mut rover = start;
            assert!(!rover.apply(Instruction::Move, &plateau));
            assert_eq!(rover, start);
        }
    }

    #[test]
    fn test_turns_keep_position() {
        let plateau = Plateau::new(5, 5);
        let mut rover = RoverState::new(1, 4, Heading::North);
        rover.apply(Instruction::Left, &plateau);
        assert_eq!(rover, RoverState::new(1, 4, Heading::West));
        rover.apply(Instruction::Right, &plateau);
        rover.apply(Instruction::Right, &plateau);
        assert_eq!(rover, RoverState::new(1, 4, Heading::East));
    }

    #[test]
    fn test_blocked_rover_keeps_executing() {
        let plateau = Plateau::new(2, 2);
        let mut rover = RoverState::new(0, 2, Heading::North);
        for instruction in [Instruction::Move, Instruction::Right, Instruction::Move] {
            rover.apply(instruction, &plateau);
        }
        assert_eq!(rover, RoverState::new(1, 2, Heading::East));
    }

    #[test]
    fn test_display_format() {
        let rover = RoverState::new(10, 0, Heading::South);
        assert_eq!(rover.to_string(), "10 0 S");
    }
}
