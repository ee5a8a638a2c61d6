//! Terrain kinds and the [`Cell`] type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geom::Point;

/// What a grid cell is made of.
///
/// The discriminants are the row/column indices of the movement cost tables.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Open = 0,
    Difficult = 1,
    Blocked = 2,
    OpenHighway = 3,
    DifficultHighway = 4,
}

impl Terrain {
    /// Every terrain kind, in table order.
    pub const ALL: [Terrain; 5] = [
        Terrain::Open,
        Terrain::Difficult,
        Terrain::Blocked,
        Terrain::OpenHighway,
        Terrain::DifficultHighway,
    ];

    /// Index into the movement cost tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Terrain::Blocked)
    }

    #[inline]
    pub const fn is_highway(self) -> bool {
        matches!(self, Terrain::OpenHighway | Terrain::DifficultHighway)
    }

    /// The character used by the text grid format.
    pub const fn to_char(self) -> char {
        match self {
            Terrain::Blocked => '0',
            Terrain::Open => '1',
            Terrain::Difficult => '2',
            Terrain::OpenHighway => 'a',
            Terrain::DifficultHighway => 'b',
        }
    }

    /// Parse a character of the text grid format.
    pub const fn from_char(ch: char) -> Option<Terrain> {
        match ch {
            '0' => Some(Terrain::Blocked),
            '1' => Some(Terrain::Open),
            '2' => Some(Terrain::Difficult),
            'a' => Some(Terrain::OpenHighway),
            'b' => Some(Terrain::DifficultHighway),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Flow direction of a highway running through a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighwayDir {
    #[default]
    None,
    North,
    East,
    South,
    West,
}

/// One grid location: its coordinate plus what it is made of.
///
/// Identity is the coordinate alone. Two cells compare (and hash) equal iff
/// their coordinates match, whatever their terrain.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub terrain: Terrain,
    pub highway: HighwayDir,
}

impl Cell {
    /// A cell with no highway flow.
    #[inline]
    pub const fn new(pos: Point, terrain: Terrain) -> Self {
        Self {
            pos,
            terrain,
            highway: HighwayDir::None,
        }
    }

    /// Set the highway flow direction (builder).
    #[inline]
    pub const fn with_highway(mut self, dir: HighwayDir) -> Self {
        self.highway = dir;
        self
    }

    #[inline]
    pub const fn is_blocked(&self) -> bool {
        self.terrain.is_blocked()
    }

    /// Whether a highway runs through the cell, either by terrain or by an
    /// explicit flow direction.
    #[inline]
    pub fn has_highway(&self) -> bool {
        self.terrain.is_highway() || self.highway != HighwayDir::None
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}
