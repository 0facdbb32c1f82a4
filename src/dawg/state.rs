use smallvec::SmallVec;

use super::children::{ChildIter, Children};

/// Identity of a state: its slot in the owning [`StateArena`](super::state_arena::StateArena).
///
/// Ids are handed out by a per-arena counter, so two automata built from the same words
/// number their states identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    /// The root is always the first state allocated in an arena.
    pub const ROOT: StateId = StateId(0);

    pub(crate) const fn new(index: u32) -> Self {
        StateId(index)
    }

    /// Position of this state in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Structural key of a state: its terminal flag plus every `(label, target)` pair in
/// insertion order.
///
/// Targets are compared by id only. That is sound because states are closed bottom-up:
/// by the time a signature is taken, every child is already canonical, so equal ids mean
/// equal subgraphs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    terminal: bool,
    edges: SmallVec<[(char, StateId); 4]>,
}

/// A node in the word graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    children: Children,
    terminal: bool,
}

impl State {
    /// Creates a state with no transitions.
    ///
    /// # Arguments
    ///
    /// * `terminal` - Whether a word ends at this state
    pub fn new(terminal: bool) -> Self {
        State {
            children: Children::None,
            terminal,
        }
    }

    /// Returns the target of the `label` transition, if there is one.
    #[inline]
    pub fn get_child(&self, label: char) -> Option<StateId> {
        self.children.find(label)
    }

    /// Adds a transition, or re-points an existing one in place.
    ///
    /// New labels go to the end of the transition order; a replaced label keeps its slot.
    pub fn put_child(&mut self, label: char, target: StateId) {
        if self.children.replace(label, target).is_none() {
            self.children.push(label, target);
        }
    }

    /// True if a word ends at this state.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Marks or unmarks this state as the end of a word.
    #[inline]
    pub fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    /// The most recently added transition.
    #[inline]
    pub fn last_child(&self) -> Option<(char, StateId)> {
        self.children.last()
    }

    /// The transition at `index` in insertion order.
    #[inline]
    pub fn transition(&self, index: usize) -> Option<(char, StateId)> {
        self.children.get(index)
    }

    /// Transitions in insertion order.
    #[inline]
    pub fn transitions(&self) -> ChildIter<'_> {
        self.children.iter()
    }

    /// Number of outgoing transitions.
    #[inline]
    pub fn transition_count(&self) -> usize {
        self.children.len()
    }

    /// True if this state has at least one outgoing transition.
    #[inline]
    pub fn has_transitions(&self) -> bool {
        !self.children.is_empty()
    }

    /// Computes the structural signature used to find equivalent states.
    pub fn signature(&self) -> Signature {
        Signature {
            terminal: self.terminal,
            edges: self.children.iter().collect(),
        }
    }

    /// Rewrites every target through `map`. Used when the arena is compacted.
    pub(crate) fn remap(&mut self, mut map: impl FnMut(StateId) -> StateId) {
        let old = std::mem::take(&mut self.children);
        for (label, target) in old.iter() {
            self.children.push(label, map(target));
        }
    }
}
