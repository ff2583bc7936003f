//! Running parsed missions and formatting their results.

use super::error::RoverError;
use super::instruction::InstructionPolicy;
use super::parser::{parse_mission_with, Mission, RoverPlan};
use super::plateau::Plateau;
use super::state::RoverState;

/// Run one rover's instructions to completion and return its final state.
pub fn simulate_rover(plateau: &Plateau, plan: &RoverPlan) -> RoverState {
    let mut rover = plan.start;
    for (step, instruction) in plan.instructions.iter().enumerate() {
        if !rover.apply(*instruction, plateau) {
            tracing::trace!(step, rover = %rover, "move blocked at plateau edge");
        }
    }
    rover
}

/// Run every rover in the mission, in input order.
pub fn run_mission(mission: &Mission) -> Vec<RoverState> {
    mission
        .rovers
        .iter()
        .map(|plan| simulate_rover(&mission.plateau, plan))
        .collect()
}

/// Parse `input` and return each rover's final `"x y heading"` line.
///
/// Unknown instruction characters are skipped.
pub fn get_rovers_position(input: &str) -> Result<Vec<String>, RoverError> {
    get_rovers_position_with(input, InstructionPolicy::Ignore)
}

/// Same as [`get_rovers_position`] with an explicit unknown-instruction policy.
///
/// Nothing is returned for any rover unless every rover parses.
pub fn get_rovers_position_with(
    input: &str,
    policy: InstructionPolicy,
) -> Result<Vec<String>, RoverError> {
    let mission = parse_mission_with(input, policy)?;
    Ok(run_mission(&mission)
        .iter()
        .map(RoverState::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rover::heading::Heading;
    use crate::rover::instruction::Instruction;

    fn positions(input: &str) -> Vec<String> {
        get_rovers_position(input).unwrap()
    }

    #[test]
    fn test_reference_example() {
        let input = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM";
        assert_eq!(positions(input), vec!["1 3 N", "5 1 E"]);
    }

    #[test]
    fn test_single_rover() {
        assert_eq!(positions("5 5\n2 2 N\nM"), vec!["2 3 N"]);
    }

    #[test]
    fn test_multiple_rovers_sequentially() {
        assert_eq!(positions("3 3\n0 0 N\nMMM\n3 3 S\nMMM"), vec!["0 3 N", "3 0 S"]);
    }

    #[test]
    fn test_moves_in_all_directions() {
        let input = "5 5\n2 2 N\nM\n2 2 E\nM\n2 2 S\nM\n2 2 W\nM";
        assert_eq!(positions(input), vec!["2 3 N", "3 2 E", "2 1 S", "1 2 W"]);
    }

    #[test]
    fn test_complex_movement() {
        assert_eq!(positions("5 5\n1 1 N\nMMRMMLM"), vec!["3 4 N"]);
        assert_eq!(positions("5 5\n1 1 N\nLMLMLMLMMLRRLMM"), vec!["1 4 N"]);
        assert_eq!(positions("5 5\n0 0 N\nMRMLM"), vec!["1 2 N"]);
    }

    #[test]
    fn test_rotations_from_all_directions() {
        let left = "5 5\n2 2 N\nL\n2 2 E\nL\n2 2 S\nL\n2 2 W\nL";
        assert_eq!(positions(left), vec!["2 2 W", "2 2 N", "2 2 E", "2 2 S"]);

        let right = "5 5\n2 2 N\nR\n2 2 E\nR\n2 2 S\nR\n2 2 W\nR";
        assert_eq!(positions(right), vec!["2 2 E", "2 2 S", "2 2 W", "2 2 N"]);
    }

    #[test]
    fn test_full_turns() {
        assert_eq!(positions("5 5\n2 2 N\nLLLL\n2 2 N\nRRRR"), vec!["2 2 N", "2 2 N"]);
    }

    #[test]
    fn test_boundaries_are_not_crossed() {
        let input = "3 3\n0 0 W\nM\n0 0 S\nM\n3 3 E\nM\n3 3 N\nM";
        assert_eq!(positions(input), vec!["0 0 W", "0 0 S", "3 3 E", "3 3 N"]);
        assert_eq!(positions("2 2\n0 0 N\nMMM\n2 2 S\nMMM"), vec!["0 2 N", "2 0 S"]);
    }

    #[test]
    fn test_repeated_pushes_against_edge() {
        assert_eq!(positions("1 1\n0 0 W\nMMMM\n1 1 E\nMMMM"), vec!["0 0 W", "1 1 E"]);
    }

    #[test]
    fn test_single_cell_plateau() {
        assert_eq!(positions("0 0\n0 0 N\nL"), vec!["0 0 W"]);
    }

    #[test]
    fn test_large_and_rectangular_plateaus() {
        assert_eq!(positions("100 100\n50 50 N\nMMMMMMMMMM"), vec!["50 60 N"]);
        assert_eq!(positions("10 15\n5 7 E\nMMMMM"), vec!["10 7 E"]);
    }

    #[test]
    fn test_rovers_are_independent() {
        assert_eq!(positions("5 5\n1 1 N\nMMRM\n2 2 E\nLMLM"), vec!["2 3 E", "1 3 W"]);

        let many = "10 10\n1 1 N\nM\n2 2 E\nM\n3 3 S\nM\n4 4 W\nM";
        assert_eq!(positions(many), vec!["1 2 N", "3 2 E", "3 2 S", "3 4 W"]);
    }

    #[test]
    fn test_reordering_rovers_reorders_output_only() {
        let a = "1 2 N\nLMLMLMLMM";
        let b = "3 3 E\nMMRMMRMRRM";
        let ab = positions(&format!("5 5\n{}\n{}", a, b));
        let ba = positions(&format!("5 5\n{}\n{}", b, a));
        assert_eq!(ab, vec![ba[1].clone(), ba[0].clone()]);
    }

    #[test]
    fn test_rover_starting_off_plateau() {
        // Moving back onto the plateau is committed; moving along outside it is not.
        assert_eq!(positions("5 5\n6 3 W\nM"), vec!["5 3 W"]);
        assert_eq!(positions("5 5\n6 3 N\nM"), vec!["6 3 N"]);
        assert_eq!(positions("5 5\n6 3 N\nLM"), vec!["5 3 W"]);
    }

    #[test]
    fn test_missing_instruction_line_fails() {
        let err = get_rovers_position("5 5\n2 2 N\n").unwrap_err();
        assert!(matches!(err, RoverError::InvalidInput { .. }));
        assert_eq!(err.to_string(), "Invalid input format or processing error");
    }

    #[test]
    fn test_failure_is_all_or_nothing() {
        assert!(get_rovers_position("5 5\n1 1 N\nM\n9 x N\nM").is_err());
    }

    #[test]
    fn test_unknown_instruction_policies() {
        assert_eq!(positions("5 5\n1 1 N\nMXM"), vec!["1 3 N"]);
        assert!(get_rovers_position_with("5 5\n1 1 N\nMXM", InstructionPolicy::Reject).is_err());
    }

    #[test]
    fn test_simulate_rover_keeps_going_after_block() {
        let plateau = Plateau::new(1, 1);
        let plan = RoverPlan {
            start: RoverState::new(0, 0, Heading::South),
            instructions: vec![Instruction::Move, Instruction::Left, Instruction::Move],
        };
        assert_eq!(
            simulate_rover(&plateau, &plan),
            RoverState::new(1, 0, Heading::East)
        );
    }

    #[test]
    fn test_run_mission_preserves_order() {
        let mission = parse_mission_with("5 5\n4 4 N\n\n0 0 S\n", InstructionPolicy::Ignore);
        // Trailing empty instruction line is trimmed away.
        assert!(mission.is_err());

        let mission =
            parse_mission_with("5 5\n4 4 N\n\n0 0 S\nL", InstructionPolicy::Ignore).unwrap();
        assert_eq!(
            run_mission(&mission),
            vec![
                RoverState::new(4, 4, Heading::North),
                RoverState::new(0, 0, Heading::East),
            ]
        );
    }
}
