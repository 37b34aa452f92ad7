//! Loop directions
//!
//! A looping track travels along one axis. The direction decides both the
//! axis and the sign applied to the configured speed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geometry::Affine2D;

/// Axis a track moves along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Translation by `amount` along this axis only
    pub fn translation(&self, amount: f32) -> Affine2D {
        match self {
            Axis::Horizontal => Affine2D::translation(amount, 0.0),
            Axis::Vertical => Affine2D::translation(0.0, amount),
        }
    }
}

/// Direction the content of a loop travels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// +1 for left/up (offset grows), -1 for right/down
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left | Direction::Up => 1.0,
            Direction::Right | Direction::Down => -1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(CoreError::UnknownDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_axis_and_sign() {
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert_eq!(Direction::Down.axis(), Axis::Vertical);
        assert_eq!(Direction::Left.sign(), 1.0);
        assert_eq!(Direction::Up.sign(), 1.0);
        assert_eq!(Direction::Right.sign(), -1.0);
        assert_eq!(Direction::Down.sign(), -1.0);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(" Up ".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(CoreError::UnknownDirection("sideways".to_string()))
        );
    }

    #[test]
    fn test_axis_translation_is_single_axis() {
        assert_eq!(
            Axis::Horizontal.translation(-5.0),
            Affine2D::translation(-5.0, 0.0)
        );
        assert_eq!(
            Axis::Vertical.translation(-5.0),
            Affine2D::translation(0.0, -5.0)
        );
    }

    #[test]
    fn test_direction_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            direction: Direction,
        }
        let w: Wrapper = toml::from_str("direction = \"right\"").unwrap();
        assert_eq!(w.direction, Direction::Right);
    }
}
