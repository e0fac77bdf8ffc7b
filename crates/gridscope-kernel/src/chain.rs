//! Freeman chain codes on the 2D lattice.
//!
//! A chain is a start point plus a sequence of unit steps encoded as
//! the characters `0..=3` (east, north, west, south). Parsing rejects
//! any other character up front, so a constructed chain always walks a
//! valid 4-connected path.

use serde::{Deserialize, Serialize};

use gridscope_core::{GridscopeError, Result};

use crate::point::Point2;

/// One step of a Freeman chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainCode {
    /// Step `+x` (code `0`).
    East,
    /// Step `+y` (code `1`).
    North,
    /// Step `-x` (code `2`).
    West,
    /// Step `-y` (code `3`).
    South,
}

impl ChainCode {
    /// Parses one code character.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '0' => Ok(ChainCode::East),
            '1' => Ok(ChainCode::North),
            '2' => Ok(ChainCode::West),
            '3' => Ok(ChainCode::South),
            other => Err(GridscopeError::InvalidChainCode(other)),
        }
    }

    /// The code character for this step.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            ChainCode::East => '0',
            ChainCode::North => '1',
            ChainCode::West => '2',
            ChainCode::South => '3',
        }
    }

    /// The lattice displacement of this step.
    #[must_use]
    pub fn step(self) -> Point2 {
        match self {
            ChainCode::East => Point2::new(1, 0),
            ChainCode::North => Point2::new(0, 1),
            ChainCode::West => Point2::new(-1, 0),
            ChainCode::South => Point2::new(0, -1),
        }
    }
}

/// A 4-connected contour encoded as Freeman chain codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreemanChain {
    start: Point2,
    codes: Vec<ChainCode>,
}

impl FreemanChain {
    /// Chain from a start point and explicit steps.
    #[must_use]
    pub fn new(start: Point2, codes: Vec<ChainCode>) -> Self {
        Self { start, codes }
    }

    /// Parses a chain from its code string, e.g. `"000112"`.
    pub fn from_code_string(start: Point2, codes: &str) -> Result<Self> {
        let codes = codes.chars().map(ChainCode::from_char).collect::<Result<Vec<_>>>()?;
        Ok(Self { start, codes })
    }

    /// Start point of the chain.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// The steps of the chain.
    #[must_use]
    pub fn codes(&self) -> &[ChainCode] {
        &self.codes
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the chain has no step.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The code string of the chain.
    #[must_use]
    pub fn code_string(&self) -> String {
        self.codes.iter().map(|c| c.to_char()).collect()
    }

    /// The visited lattice points, start included: `len() + 1` points.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        let mut current = self.start;
        std::iter::once(self.start).chain(self.codes.iter().map(move |c| {
            current += c.step();
            current
        }))
    }

    /// The point reached after the final step.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.codes.iter().fold(self.start, |p, c| p + c.step())
    }

    /// Whether the chain returns to its start point.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.codes.is_empty() && self.end() == self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_codes() {
        let c = FreemanChain::from_code_string(Point2::new(0, 0), "0123").unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c.code_string(), "0123");
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = FreemanChain::from_code_string(Point2::ZERO, "0154").unwrap_err();
        match err {
            GridscopeError::InvalidChainCode(c) => assert_eq!(c, '5'),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_points_walk_the_chain() {
        let c = FreemanChain::from_code_string(Point2::new(2, 1), "001").unwrap();
        let pts: Vec<Point2> = c.points().collect();
        assert_eq!(
            pts,
            vec![
                Point2::new(2, 1),
                Point2::new(3, 1),
                Point2::new(4, 1),
                Point2::new(4, 2),
            ]
        );
    }

    #[test]
    fn test_closed_square() {
        let c = FreemanChain::from_code_string(Point2::ZERO, "0123").unwrap();
        assert!(c.is_closed());
        assert_eq!(c.end(), Point2::ZERO);

        let open = FreemanChain::from_code_string(Point2::ZERO, "00").unwrap();
        assert!(!open.is_closed());
    }

    #[test]
    fn test_empty_chain() {
        let c = FreemanChain::from_code_string(Point2::ZERO, "").unwrap();
        assert!(c.is_empty());
        assert!(!c.is_closed());
        assert_eq!(c.points().count(), 1);
    }
}
