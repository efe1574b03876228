use std::rc::Rc;

use crate::puzzle::Board;

/// A discovered state plus the node it was generated from.
///
/// Nodes form a tree rooted at the start board: each holds a shared, read-only
/// reference to its parent, so a frontier of many nodes shares common prefixes and
/// the path is only materialized once, for the terminal node.
#[derive(Debug)]
pub struct SearchNode {
    state: Board,
    parent: Option<Rc<SearchNode>>,
    path_cost: u32,
    heuristic: u32,
}

impl SearchNode {
    pub fn root(state: Board, heuristic: u32) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            path_cost: 0,
            heuristic,
        })
    }

    /// A node one move further from the root than `parent`.
    pub fn child(parent: &Rc<Self>, state: Board, heuristic: u32) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            path_cost: parent.path_cost + 1,
            heuristic,
        })
    }

    pub fn state(&self) -> &Board {
        &self.state
    }

    pub fn parent(&self) -> Option<&SearchNode> {
        self.parent.as_deref()
    }

    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// Estimated total cost `g + h`.
    pub fn f(&self) -> u32 {
        self.path_cost + self.heuristic
    }

    /// Boards from the root to this node, inclusive.
    pub fn path(&self) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.path_cost as usize + 1);
        let mut node = Some(self);
        while let Some(current) = node {
            path.push(current.state.clone());
            node = current.parent();
        }
        path.reverse();
        path
    }
}

impl Drop for SearchNode {
    // Unlinks the parent chain iteratively; recursive drops of long chains overflow the stack.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}
