use std::collections::BinaryHeap;

use log::trace;
use othello::Color;

use crate::{Arena, Context, NodeId, Position, Score};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Liveness {
    Live,
    Solved,
}

/// What a traced SSS* run saw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SssTrace {
    pub value: Score,
    /// Every bound popped at the root, in order.
    pub root_bounds: Vec<Score>,
    /// Most nodes alive at once.
    pub peak_nodes: usize,
    /// Nodes still alive after the frontier was dropped. Always zero.
    pub leaked: usize,
}

/// SSS*: best-first search over an explicit tree. Black nodes are expanded
/// all at once, White nodes one child at a time. The result is from Black's
/// point of view and is exact as long as `bound` is above the true value.
pub fn sss_star<P: Position>(ctx: &mut Context<P>, state: &P, color: Color, bound: Score) -> Score {
    sss_star_traced(ctx, state, color, bound).value
}

pub fn sss_star_traced<P: Position>(ctx: &mut Context<P>, state: &P, color: Color, bound: Score) -> SssTrace {
    let mut arena = Arena::new();
    let mut frontier = BinaryHeap::new();
    let mut root_bounds = Vec::new();

    let root = arena.insert(state.clone(), None, color);
    ctx.generated += 1;
    frontier.push((bound, root, Liveness::Live));

    let value = loop {
        let (h, id, liveness) = frontier
            .pop()
            .expect("the frontier cannot run dry before the root is solved");
        if id == root {
            trace!("sss* root popped with bound {h} ({liveness:?})");
            root_bounds.push(h);
        }

        if let Some(parent) = arena[id].parent {
            if arena[parent].purged {
                arena[id].purged = true;
                arena.release(id);
                continue;
            }
        }

        match liveness {
            Liveness::Live => {
                let node = &arena[id];
                if node.state.terminal() {
                    let value = node.state.value().min(h);
                    arena.retain(id);
                    frontier.push((value, id, Liveness::Solved));
                } else if node.color == Color::White {
                    ctx.expanded += 1;
                    if let Some(my_move) = arena[id].pending.pop_front() {
                        let child = spawn(ctx, &mut arena, id, my_move);
                        frontier.push((h, child, Liveness::Live));
                    }
                } else {
                    ctx.expanded += 1;
                    let pending: Vec<_> = arena[id].pending.drain(..).collect();
                    for my_move in pending {
                        let child = spawn(ctx, &mut arena, id, my_move);
                        frontier.push((h, child, Liveness::Live));
                    }
                }
            }
            Liveness::Solved => {
                let parent = match arena[id].parent {
                    Some(parent) => parent,
                    None => break h,
                };
                if arena[id].color == Color::White {
                    // The first solved child of a Black node carries the
                    // highest bound left, so the parent is solved too and
                    // the rest of its subtree is dropped.
                    arena[parent].purged = true;
                    arena.retain(parent);
                    frontier.push((h, parent, Liveness::Solved));
                } else if let Some(my_move) = arena[parent].pending.pop_front() {
                    // White parent: try the next alternative under the same bound.
                    let sibling = spawn(ctx, &mut arena, parent, my_move);
                    frontier.push((h, sibling, Liveness::Live));
                } else {
                    arena.retain(parent);
                    frontier.push((h, parent, Liveness::Solved));
                }
            }
        }
        arena.release(id);
    };

    arena.release(root);
    for (_, id, _) in frontier {
        arena.release(id);
    }
    ctx.peak_nodes = ctx.peak_nodes.max(arena.peak());
    debug_assert!(arena.is_empty(), "{} sss* nodes outlived the search", arena.len());

    SssTrace {
        value,
        root_bounds,
        peak_nodes: arena.peak(),
        leaked: arena.len(),
    }
}

fn spawn<P: Position>(
    ctx: &mut Context<P>,
    arena: &mut Arena<P>,
    parent: NodeId,
    my_move: Option<P::Move>,
) -> NodeId {
    let node = &arena[parent];
    let state = match my_move {
        Some(my_move) => node.state.play(node.color, my_move),
        None => node.state.clone(),
    };
    let color = -node.color;
    ctx.generated += 1;
    arena.insert(state, Some(parent), color)
}
