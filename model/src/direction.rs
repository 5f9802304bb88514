use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// How far a diagonal step moves along its secondary axis, relative to the
/// primary axis.
pub const DIAGONAL_RATIO: f64 = 0.3;

/// One discrete steering command. The schematic grid's vertical axis grows
/// downwards, so "up" decreases `top`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Multipliers for (top, left), scaled by the step size. Diagonals move
    /// the primary axis a full step and the secondary axis by
    /// `DIAGONAL_RATIO`.
    pub fn deltas(self) -> (f64, f64) {
        match self {
            Direction::Up => (-1.0, 0.0),
            Direction::Down => (1.0, 0.0),
            Direction::Left => (0.0, -1.0),
            Direction::Right => (0.0, 1.0),
            Direction::UpLeft => (-1.0, -DIAGONAL_RATIO),
            Direction::UpRight => (-1.0, DIAGONAL_RATIO),
            Direction::DownLeft => (1.0, -DIAGONAL_RATIO),
            Direction::DownRight => (1.0, DIAGONAL_RATIO),
        }
    }

    /// Reflect across the vertical axis, swapping east and west components.
    pub fn mirror(self) -> Direction {
        match self {
            Direction::Up => Direction::Up,
            Direction::Down => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::UpRight,
            Direction::UpRight => Direction::UpLeft,
            Direction::DownLeft => Direction::DownRight,
            Direction::DownRight => Direction::DownLeft,
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self> {
        Ok(match token {
            "up" => Direction::Up,
            "down" => Direction::Down,
            "left" => Direction::Left,
            "right" => Direction::Right,
            "up-left" => Direction::UpLeft,
            "up-right" => Direction::UpRight,
            "down-left" => Direction::DownLeft,
            "down-right" => Direction::DownRight,
            _ => bail!("unknown direction token {token:?}"),
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpLeft => "up-left",
            Direction::UpRight => "up-right",
            Direction::DownLeft => "down-left",
            Direction::DownRight => "down-right",
        };
        write!(f, "{token}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_tokens() {
        for token in [
            "up",
            "down",
            "left",
            "right",
            "up-left",
            "up-right",
            "down-left",
            "down-right",
        ] {
            let dir: Direction = token.parse().unwrap();
            assert_eq!(dir.to_string(), token);
        }
    }

    #[test]
    fn reject_malformed_tokens() {
        // "-down-right" appears in the raw source data; it must not parse
        for token in ["-down-right", "UP", "north", "", "down right"] {
            assert!(token.parse::<Direction>().is_err(), "parsed {token:?}");
        }
    }

    #[test]
    fn mirror_is_an_involution() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
            Direction::DownRight,
        ] {
            assert_eq!(dir.mirror().mirror(), dir);
        }
        assert_eq!(Direction::Up.mirror(), Direction::Up);
        assert_eq!(Direction::UpLeft.mirror(), Direction::UpRight);
        assert_eq!(Direction::Left.mirror(), Direction::Right);
    }

    #[test]
    fn diagonal_deltas_use_the_ratio() {
        assert_eq!(Direction::Up.deltas(), (-1.0, 0.0));
        assert_eq!(Direction::DownRight.deltas(), (1.0, DIAGONAL_RATIO));
        assert_eq!(Direction::UpLeft.deltas(), (-1.0, -DIAGONAL_RATIO));
    }
}
