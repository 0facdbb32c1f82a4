//! Index-addressed storage for automaton states.
//!
//! States refer to each other by [`StateId`] rather than by reference, so a canonical
//! state can be shared by any number of parents without reference counting.

use std::ops::{Index, IndexMut};

use super::state::{State, StateId};

/// Owns every state of one automaton.
///
/// Slots of states discarded during minimization go onto a free list and are handed out
/// again by [`alloc`](StateArena::alloc), so the arena stays close to the size of the
/// live graph while words are being added.
#[derive(Clone, Debug, Default)]
pub(crate) struct StateArena {
    states: Vec<State>,
    free_list: Vec<StateId>,
}

impl StateArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        StateArena {
            states: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Stores `state` and returns its id. The first state allocated is [`StateId::ROOT`].
    pub fn alloc(&mut self, state: State) -> StateId {
        if let Some(id) = self.free_list.pop() {
            self.states[id.index()] = state;
            return id;
        }
        let index = u32::try_from(self.states.len()).expect("state arena exceeds u32 ids");
        self.states.push(state);
        StateId::new(index)
    }

    /// Releases a slot. The caller guarantees nothing points at `id` any more.
    pub fn free(&mut self, id: StateId) {
        debug_assert_ne!(id, StateId::ROOT, "the root is never freed");
        debug_assert!(!self.free_list.contains(&id), "double free of {id:?}");
        self.states[id.index()] = State::default();
        self.free_list.push(id);
    }

    /// Returns the number of live states.
    pub fn len(&self) -> usize {
        self.states.len() - self.free_list.len()
    }

    /// Iterates over the stored states in id order.
    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// Rebuilds the arena with only the states reachable from `root`, renumbered densely
    /// in depth-first preorder. `root` becomes [`StateId::ROOT`].
    pub fn compact(mut self, root: StateId) -> StateArena {
        let mut numbering: Vec<Option<StateId>> = vec![None; self.states.len()];
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![root];
        numbering[root.index()] = Some(StateId::ROOT);
        order.push(root);

        while let Some(id) = stack.pop() {
            for (_, target) in self.states[id.index()].transitions() {
                let slot = &mut numbering[target.index()];
                if slot.is_none() {
                    *slot = Some(StateId::new(order.len() as u32));
                    order.push(target);
                    stack.push(target);
                }
            }
        }

        let states = order
            .iter()
            .map(|&old| {
                let mut state = std::mem::take(&mut self.states[old.index()]);
                state.remap(|target| {
                    numbering[target.index()].expect("reachable state was numbered")
                });
                state
            })
            .collect();

        StateArena {
            states,
            free_list: Vec::new(),
        }
    }
}

impl Index<StateId> for StateArena {
    type Output = State;

    #[inline]
    fn index(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }
}

impl IndexMut<StateId> for StateArena {
    #[inline]
    fn index_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_count_up_from_root() {
        let mut arena = StateArena::new();
        assert_eq!(arena.alloc(State::new(false)), StateId::ROOT);
        assert_eq!(arena.alloc(State::new(true)), StateId::new(1));
        assert_eq!(arena.alloc(State::new(true)), StateId::new(2));
        assert_eq!(arena.len(), 3);
        assert!(arena[StateId::new(1)].is_terminal());
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut arena = StateArena::new();
        arena.alloc(State::new(false));
        let a = arena.alloc(State::new(true));
        let _b = arena.alloc(State::new(true));
        arena.free(a);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.alloc(State::new(false)), a);
        assert!(!arena[a].is_terminal());
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn separate_arenas_number_independently() {
        let mut first = StateArena::new();
        let mut second = StateArena::new();
        for _ in 0..5 {
            first.alloc(State::new(false));
        }
        assert_eq!(second.alloc(State::new(false)), StateId::ROOT);
    }

    #[test]
    fn compact_drops_unreachable_states() {
        let mut arena = StateArena::new();
        let root = arena.alloc(State::new(false));
        let orphan = arena.alloc(State::new(true));
        let leaf = arena.alloc(State::new(true));
        let freed = arena.alloc(State::new(false));
        arena.free(freed);
        arena[root].put_child('a', leaf);
        arena[root].put_child('b', leaf);
        let _ = orphan;

        let compacted = arena.compact(root);
        assert_eq!(compacted.len(), 2);
        let targets: Vec<_> = compacted[StateId::ROOT].transitions().collect();
        assert_eq!(targets, [('a', StateId::new(1)), ('b', StateId::new(1))]);
        assert!(compacted[StateId::new(1)].is_terminal());
    }
}
