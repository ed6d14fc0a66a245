use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchError {
    /// A transposition table could not take another entry, either because it
    /// reached its configured limit or because the allocator refused to grow it.
    TableFull { size: usize, capacity: usize },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::TableFull { size, capacity } => write!(
                f,
                "transposition table is full (size={size}, capacity={capacity})"
            ),
        }
    }
}

impl Error for SearchError {}
