use std::fmt::Display;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Side of a transfer a connector plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// data is read from here ("FROM")
    Source,
    /// data is written here ("TO")
    Destination,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Source, Direction::Destination];

    pub fn is_source(&self) -> bool {
        matches!(self, Self::Source)
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Source => Self::Destination,
            Self::Destination => Self::Source,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Self::Source => "source",
            Self::Destination => "destination",
        };
        write!(f, "{str}")
    }
}

/// Fixed record holding one `T` for each [`Direction`].
///
/// Both slots always exist, so a lookup can never miss a direction. Fields
/// that may be unset use `PerDirection<Option<T>>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDirection<T> {
    source: T,
    destination: T,
}

impl<T> PerDirection<T> {
    pub fn new(source: T, destination: T) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Direction) -> T,
    {
        Self {
            source: f(Direction::Source),
            destination: f(Direction::Destination),
        }
    }

    pub fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::Source => &self.source,
            Direction::Destination => &self.destination,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut T {
        match direction {
            Direction::Source => &mut self.source,
            Direction::Destination => &mut self.destination,
        }
    }

    /// replaces the slot for `direction`, returning the previous value
    pub fn replace(&mut self, direction: Direction, value: T) -> T {
        std::mem::replace(self.get_mut(direction), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    pub fn map<U, F>(self, mut f: F) -> PerDirection<U>
    where
        F: FnMut(T) -> U,
    {
        PerDirection {
            source: f(self.source),
            destination: f(self.destination),
        }
    }
}

impl<T> Index<Direction> for PerDirection<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &Self::Output {
        self.get(direction)
    }
}

impl<T> IndexMut<Direction> for PerDirection<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut Self::Output {
        self.get_mut(direction)
    }
}
