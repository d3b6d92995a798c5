//! Direction of an adapter command

use std::fmt;

/// Which side of the transfer a command builder serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Serialize the remote database to a stream
    Dump,
    /// Populate the local database from a stream
    Load,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Dump => write!(f, "dump"),
            Direction::Load => write!(f, "load"),
        }
    }
}
