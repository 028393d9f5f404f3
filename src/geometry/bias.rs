//! Directional bias for squaring a crop region.

use std::fmt;
use std::str::FromStr;

use crate::error::QuadcropError;

/// Which horizontal edge survives when a tall rectangle is squared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vertical {
    /// Keep the top edge; crop off the bottom.
    Top,
    /// Keep the bottom edge; crop off the top.
    Bottom,
}

/// Which vertical edge survives when a wide rectangle is squared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Horizontal {
    /// Keep the left edge; crop off the right.
    Left,
    /// Keep the right edge; crop off the left.
    Right,
}

/// A parsed bias specifier: which edges of a non-square region are
/// preserved when cropping it down to a square.
///
/// Both components are always present. Only the one relevant to the
/// longer dimension has any effect for a given region; the other is
/// inert for that call.
///
/// The string form must contain exactly one of `t`/`b` and exactly one
/// of `l`/`r`, case-sensitive, in either order: `"tl"`, `"lt"`, `"br"`
/// and so on. Anything else fails to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bias {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Bias {
    /// Creates a bias from its two components.
    #[inline]
    pub fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl FromStr for Bias {
    type Err = QuadcropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut vertical = None;
        let mut horizontal = None;

        for c in s.chars() {
            let duplicate = match c {
                't' => vertical.replace(Vertical::Top).is_some(),
                'b' => vertical.replace(Vertical::Bottom).is_some(),
                'l' => horizontal.replace(Horizontal::Left).is_some(),
                'r' => horizontal.replace(Horizontal::Right).is_some(),
                _ => return Err(QuadcropError::InvalidBiasSpec(s.to_string())),
            };
            if duplicate {
                return Err(QuadcropError::InvalidBiasSpec(s.to_string()));
            }
        }

        match (vertical, horizontal) {
            (Some(vertical), Some(horizontal)) => Ok(Bias {
                vertical,
                horizontal,
            }),
            _ => Err(QuadcropError::InvalidBiasSpec(s.to_string())),
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self.vertical {
            Vertical::Top => 't',
            Vertical::Bottom => 'b',
        };
        let h = match self.horizontal {
            Horizontal::Left => 'l',
            Horizontal::Right => 'r',
        };
        write!(f, "{v}{h}")
    }
}
