use super::state::StateId;
use super::state_arena::StateArena;

/// A lazy depth-first enumeration of the words below one state.
///
/// Transitions are followed in insertion order. Words are produced in sorted order for
/// graphs built by [`Builder`](super::builder::Builder), but that is a consequence of
/// sorted construction rather than something this iterator enforces.
#[derive(Clone)]
pub struct Words<'a> {
    arena: &'a StateArena,
    buffer: String,
    stack: Vec<(StateId, usize)>,
    emit_start: bool,
}

impl<'a> Words<'a> {
    /// Enumerates the words reachable from `start`, each prefixed with `prefix`.
    /// A `None` start yields nothing.
    pub(crate) fn new(arena: &'a StateArena, start: Option<StateId>, prefix: String) -> Self {
        match start {
            Some(id) => Words {
                arena,
                buffer: prefix,
                stack: vec![(id, 0)],
                emit_start: arena[id].is_terminal(),
            },
            None => Words {
                arena,
                buffer: prefix,
                stack: Vec::new(),
                emit_start: false,
            },
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if std::mem::take(&mut self.emit_start) {
            return Some(self.buffer.clone());
        }
        loop {
            let top = self.stack.last_mut()?;
            match self.arena[top.0].transition(top.1) {
                Some((label, child)) => {
                    top.1 += 1;
                    self.buffer.push(label);
                    self.stack.push((child, 0));
                    if self.arena[child].is_terminal() {
                        return Some(self.buffer.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The start state's frame owns no label of its own.
                    if !self.stack.is_empty() {
                        self.buffer.pop();
                    }
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Words<'_> {}
