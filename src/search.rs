//! A best-first search core in the spirit of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! with two differences: equal estimates are explored in insertion order, which keeps results
//! reproducible independently of how the heap arranges equal keys, and the buffers live in a
//! [SearchContext] so that repeated queries do not reallocate.
use crate::cell::Cell;
use crate::error::{Error, Result};
use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::{BuildHasher, Hash};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Search context used by the grid solvers.
pub type GridSearchContext = SearchContext<Cell, u32>;

struct SmallestCostHolder<N, K> {
    estimated_cost: K,
    cost: K,
    insertion: usize,
    node: N,
}

impl<N, K: PartialEq> Eq for SmallestCostHolder<N, K> {}

impl<N, K: PartialEq> PartialEq for SmallestCostHolder<N, K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.insertion == other.insertion
    }
}

impl<N, K: Ord> PartialOrd for SmallestCostHolder<N, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, K: Ord> Ord for SmallestCostHolder<N, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap pops the smallest estimate, and among equal estimates the
        // entry that was pushed first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.insertion.cmp(&self.insertion),
            s => s,
        }
    }
}

/// Best known cost from the start (`g`) and the resulting estimate of the total cost (`f`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scores<C> {
    pub g: C,
    pub f: C,
}

/// Frontier, cost maps, closed set and predecessor map of a single search. All of them are
/// cleared when a new search starts, so a context can be reused but never observes stale state.
pub struct SearchContext<N, C> {
    frontier: BinaryHeap<SmallestCostHolder<N, C>>,
    scores: FxIndexMap<N, Scores<C>>,
    closed: FxHashSet<N>,
    parents: FxHashMap<N, N>,
    counter: usize,
}

impl<N, C> Default for SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> SearchContext<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> SearchContext<N, C> {
        SearchContext {
            frontier: BinaryHeap::new(),
            scores: FxIndexMap::default(),
            closed: FxHashSet::default(),
            parents: FxHashMap::default(),
            counter: 0,
        }
    }

    fn clear(&mut self) {
        self.frontier.clear();
        self.scores.clear();
        self.closed.clear();
        self.parents.clear();
        self.counter = 0;
    }

    fn push(&mut self, estimated_cost: C, cost: C, node: N) {
        self.frontier.push(SmallestCostHolder {
            estimated_cost,
            cost,
            insertion: self.counter,
            node,
        });
        self.counter += 1;
    }

    /// Number of nodes that were expanded (closed) by the last search.
    pub fn expanded(&self) -> usize {
        self.closed.len()
    }

    /// `g` and `f` of a node reached by the last search.
    pub fn scores(&self, node: &N) -> Option<Scores<C>> {
        self.scores.get(node).copied()
    }

    /// Predecessor map of the last search.
    pub fn parents(&self) -> &FxHashMap<N, N> {
        &self.parents
    }

    /// Runs A* from `start` until a node satisfying `success` is popped from the frontier.
    /// `successors` yields the reachable neighbours of a node together with the step cost and
    /// `heuristic` must never overestimate the remaining cost for the result to be optimal.
    ///
    /// Returns the path from `start` to the reached node (both inclusive) and its cost, or [None]
    /// once the frontier is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the predecessor map built during the search does not lead back to `start`, which
    /// would be a bug in this function.
    pub fn astar<FN, IN, FH, FS>(
        &mut self,
        start: &N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.clear();
        let h = heuristic(start);
        self.scores.insert(
            start.clone(),
            Scores {
                g: Zero::zero(),
                f: h,
            },
        );
        self.push(h, Zero::zero(), start.clone());

        while let Some(SmallestCostHolder { cost, node, .. }) = self.frontier.pop() {
            if success(&node) {
                let path = reconstruct_path(&self.parents, start, &node).unwrap_or_else(|err| {
                    panic!("search produced an inconsistent predecessor map: {err}")
                });
                debug!(
                    "Reached goal after expanding {} nodes ({} pushed)",
                    self.closed.len(),
                    self.counter
                );
                return Some((path, cost));
            }
            // A node may sit in the frontier several times if a cheaper way to it was found after
            // it was first pushed. Only the first pop carries its final cost.
            if !self.closed.insert(node.clone()) {
                continue;
            }
            for (successor, move_cost) in successors(&node) {
                if self.closed.contains(&successor) {
                    continue;
                }
                let new_cost = cost + move_cost;
                let estimated_cost = match self.scores.entry(successor.clone()) {
                    Vacant(e) => {
                        let f = new_cost + heuristic(e.key());
                        e.insert(Scores { g: new_cost, f });
                        f
                    }
                    Occupied(mut e) => {
                        if new_cost < e.get().g {
                            let f = new_cost + heuristic(e.key());
                            e.insert(Scores { g: new_cost, f });
                            f
                        } else {
                            continue;
                        }
                    }
                };
                self.parents.insert(successor.clone(), node.clone());
                self.push(estimated_cost, new_cost, successor);
            }
        }
        debug!(
            "Frontier exhausted after expanding {} nodes, no path exists",
            self.closed.len()
        );
        None
    }
}

/// Runs [SearchContext::astar] on a fresh context.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    successors: FN,
    heuristic: FH,
    success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    SearchContext::new().astar(start, successors, heuristic, success)
}

/// Walks `parents` backwards from `goal` until `start` is reached and returns the nodes in
/// start-to-goal order. A missing predecessor or a cycle yields
/// [Error::BrokenPredecessorChain].
pub fn reconstruct_path<N, S>(parents: &HashMap<N, N, S>, start: &N, goal: &N) -> Result<Vec<N>>
where
    N: Eq + Hash + Clone,
    S: BuildHasher,
{
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while current != start {
        let steps = path.len() - 1;
        // Every step consumes a distinct entry unless the chain loops.
        if steps >= parents.len() {
            return Err(Error::BrokenPredecessorChain { steps });
        }
        current = parents
            .get(current)
            .ok_or(Error::BrokenPredecessorChain { steps })?;
        path.push(current.clone());
    }
    path.reverse();
    Ok(path)
}
