use std::{
    collections::VecDeque,
    ops::{Index, IndexMut},
};

use othello::Color;

use crate::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

/// A node of the explicit SSS* tree.
#[derive(Clone, Debug)]
pub struct Node<P: Position> {
    pub state: P,
    pub color: Color,
    pub parent: Option<NodeId>,
    /// Children not generated yet. `None` stands for the pass of a side
    /// without legal moves.
    pub pending: VecDeque<Option<P::Move>>,
    /// Set once a solved sibling made this subtree irrelevant.
    pub purged: bool,
    // frontier entries naming this node plus children pointing back at it
    refs: u32,
}

/// Owner of every SSS* node. Parents are referred to by index, and a slot
/// is recycled as soon as nothing names its node any more.
#[derive(Clone, Debug)]
pub struct Arena<P: Position> {
    slots: Vec<Option<Node<P>>>,
    free: Vec<NodeId>,
    occupied: usize,
    peak: usize,
}

impl<P: Position> Default for Arena<P> {
    fn default() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            occupied: 0,
            peak: 0,
        }
    }
}

impl<P: Position> Arena<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node for `state` with `color` to move. The caller holds the one
    /// reference the new node starts with.
    pub fn insert(&mut self, state: P, parent: Option<NodeId>, color: Color) -> NodeId {
        let mut pending: VecDeque<_> = state.moves(color).into_iter().map(Some).collect();
        if pending.is_empty() {
            pending.push_back(None);
        }
        let node = Node {
            state,
            color,
            parent,
            pending,
            purged: false,
            refs: 1,
        };
        if let Some(parent) = parent {
            self[parent].refs += 1;
        }

        let id = if let Some(id) = self.free.pop() {
            self.slots[id.0 as usize] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            NodeId((self.slots.len() - 1) as u32)
        };
        self.occupied += 1;
        self.peak = self.peak.max(self.occupied);
        id
    }

    /// Take another reference to a node.
    pub fn retain(&mut self, id: NodeId) {
        self[id].refs += 1;
    }

    /// Drop a reference. A node without references is freed, which in turn
    /// drops the reference it held on its parent.
    pub fn release(&mut self, id: NodeId) {
        let mut next = Some(id);
        while let Some(id) = next {
            let node = &mut self[id];
            node.refs -= 1;
            if node.refs > 0 {
                return;
            }
            next = node.parent;
            self.slots[id.0 as usize] = None;
            self.free.push(id);
            self.occupied -= 1;
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0 as usize), Some(Some(_)))
    }

    /// Nodes currently alive.
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Most nodes alive at any one time.
    pub fn peak(&self) -> usize {
        self.peak
    }
}

impl<P: Position> Index<NodeId> for Arena<P> {
    type Output = Node<P>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.slots[id.0 as usize].as_ref().expect("node was released")
    }
}

impl<P: Position> IndexMut<NodeId> for Arena<P> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.slots[id.0 as usize].as_mut().expect("node was released")
    }
}

#[cfg(test)]
mod tests {
    use othello::{Color, Game};

    use super::Arena;

    #[test]
    fn release_cascades_to_parent() {
        let mut arena = Arena::new();
        let game = Game::<4>::default();
        let root = arena.insert(game, None, Color::Black);
        assert_eq!(arena[root].pending.len(), 4);

        let square = arena[root].pending[0].unwrap();
        let child = arena.insert(game.place(Color::Black, square), Some(root), Color::White);
        assert_eq!(arena.len(), 2);

        // the root stays alive while its child points at it
        arena.release(root);
        assert!(arena.contains(root));
        arena.release(child);
        assert!(arena.is_empty());
        assert_eq!(arena.peak(), 2);
    }

    #[test]
    fn slots_are_recycled() {
        let mut arena = Arena::new();
        let game = Game::<4>::default();
        let first = arena.insert(game, None, Color::Black);
        arena.release(first);
        let second = arena.insert(game, None, Color::White);
        assert_eq!(first, second);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn pass_sentinel() {
        let mut arena = Arena::new();
        let game: Game<4> = "xxxx/xxxx/xxxx/ooo-".parse().unwrap();
        assert!(game.moves(Color::White).is_empty());
        let id = arena.insert(game, None, Color::White);
        assert_eq!(arena[id].pending.len(), 1);
        assert_eq!(arena[id].pending[0], None);
    }
}
