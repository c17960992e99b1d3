//! Compass direction code published to the indicator while scrolling.

use std::fmt;

/// Vertical component of a scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vertical {
    #[default]
    None,
    North,
    South,
}

/// Horizontal component of a scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizontal {
    #[default]
    None,
    West,
    East,
}

/// Scroll direction, rendered as a short code such as `"ne"`, `"s"` or `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Direction {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Direction {
    /// No movement.
    pub const NONE: Direction = Direction {
        vertical: Vertical::None,
        horizontal: Horizontal::None,
    };

    /// Direction of a scroll step (negative y is north, negative x is west).
    pub fn from_step(move_x: f32, move_y: f32) -> Self {
        let vertical = if move_y < 0.0 {
            Vertical::North
        } else if move_y > 0.0 {
            Vertical::South
        } else {
            Vertical::None
        };
        let horizontal = if move_x < 0.0 {
            Horizontal::West
        } else if move_x > 0.0 {
            Horizontal::East
        } else {
            Horizontal::None
        };
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// The direction code: vertical letter first, then horizontal.
    pub fn code(&self) -> &'static str {
        match (self.vertical, self.horizontal) {
            (Vertical::None, Horizontal::None) => "",
            (Vertical::None, Horizontal::West) => "w",
            (Vertical::None, Horizontal::East) => "e",
            (Vertical::North, Horizontal::None) => "n",
            (Vertical::North, Horizontal::West) => "nw",
            (Vertical::North, Horizontal::East) => "ne",
            (Vertical::South, Horizontal::None) => "s",
            (Vertical::South, Horizontal::West) => "sw",
            (Vertical::South, Horizontal::East) => "se",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
