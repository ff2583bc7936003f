//! Compass headings and their rotation order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RoverError;

/// Heading order used for rotation. Right steps forward, left steps back.
const ORDER: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

/// One of the four compass directions a rover can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Heading {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Heading; 4] = ORDER;

    fn index(self) -> i32 {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    fn step(self, offset: i32) -> Heading {
        // rem_euclid keeps the index in 0..4 for negative offsets.
        ORDER[(self.index() + offset).rem_euclid(4) as usize]
    }

    /// Heading after a 90 degree counter-clockwise turn.
    pub fn left(self) -> Heading {
        self.step(-1)
    }

    /// Heading after a 90 degree clockwise turn.
    pub fn right(self) -> Heading {
        self.step(1)
    }

    /// Unit displacement `(dx, dy)` for one move in this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// The single-letter code used in the text format.
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Heading {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Heading::North),
            "E" => Ok(Heading::East),
            "S" => Ok(Heading::South),
            "W" => Ok(Heading::West),
            other => Err(RoverError::invalid(format!("unknown heading '{}'", other))),
        }
    }
}
