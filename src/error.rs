use std::{error::Error, fmt};

/// Input rejected before a sweep is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingError {
    /// The segment's end points coincide.
    InvalidSegment { id: usize },
    /// The segment has a NaN or infinite coordinate.
    NonFiniteCoordinate { id: usize },
    /// More than one segment uses this id.
    DuplicateId { id: usize },
}

impl fmt::Display for CrossingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossingError::InvalidSegment { id } => {
                write!(f, "segment {} has zero length", id)
            }
            CrossingError::NonFiniteCoordinate { id } => {
                write!(f, "segment {} has a non-finite coordinate", id)
            }
            CrossingError::DuplicateId { id } => write!(f, "segment id {} is used twice", id),
        }
    }
}

impl Error for CrossingError {}

/// Name that does not match any [`Strategy`](crate::Strategy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    pub name: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?} (expected avl or two-three)",
            self.name
        )
    }
}

impl Error for ParseStrategyError {}
