use othello::Color;

use crate::{Position, TranspositionTable};

/// Node counters of the last search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Nodes reached (every call, including terminal positions).
    pub generated: u64,
    /// Non-terminal nodes whose children were searched.
    pub expanded: u64,
}

/// Mutable state shared by the searches: node counters and one
/// transposition table per side to move. The same board is a different
/// position depending on who is to move, so the tables are kept apart.
#[derive(Clone, Debug)]
pub struct Context<P> {
    pub generated: u64,
    pub expanded: u64,
    /// Largest number of SSS* nodes alive at once.
    pub peak_nodes: usize,
    tables: [TranspositionTable<P>; 2],
}

impl<P: Position> Default for Context<P> {
    fn default() -> Self {
        Self::with_table_limit(None)
    }
}

impl<P: Position> Context<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each table refuses new positions once it holds `limit` entries.
    pub fn with_table_limit(limit: Option<usize>) -> Self {
        Context {
            generated: 0,
            expanded: 0,
            peak_nodes: 0,
            tables: [
                TranspositionTable::with_limit(limit),
                TranspositionTable::with_limit(limit),
            ],
        }
    }

    /// Forget everything learned by previous searches.
    pub fn reset(&mut self) {
        self.generated = 0;
        self.expanded = 0;
        self.peak_nodes = 0;
        for table in &mut self.tables {
            table.clear();
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            generated: self.generated,
            expanded: self.expanded,
        }
    }

    pub fn table(&self, color: Color) -> &TranspositionTable<P> {
        &self.tables[Self::table_index(color)]
    }

    pub(crate) fn table_mut(&mut self, color: Color) -> &mut TranspositionTable<P> {
        &mut self.tables[Self::table_index(color)]
    }

    fn table_index(color: Color) -> usize {
        match color {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}
