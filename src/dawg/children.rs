use super::state::StateId;

/// A compact, insertion-ordered transition table that doesn't allocate until there are at
/// least three transitions.
///
/// Order matters: the builder relies on [`Children::last`] being the most recently added
/// edge, so new labels are always appended and replacing a target keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Children {
    /// No transitions.
    #[default]
    None,
    /// Exactly one transition (label, target).
    One((char, StateId)),
    /// Exactly two transitions, in insertion order.
    Two((char, StateId, char, StateId)),
    /// Three or more transitions stored in a vector.
    Many(Vec<(char, StateId)>),
}

impl Children {
    /// Gets the transition at the specified position in insertion order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(char, StateId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the target of the transition labeled `label`.
    #[inline]
    pub fn find(&self, label: char) -> Option<StateId> {
        match self {
            Children::None => None,
            Children::One((ch, id)) => (*ch == label).then_some(*id),
            Children::Two((c1, n1, c2, n2)) => {
                if label == *c1 {
                    Some(*n1)
                } else if label == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => {
                // Unrolling by 2 exposes load-level parallelism and beats a scalar loop
                // on the small fan-outs typical of word graphs.
                let chunks = children.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == label {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == label {
                        return Some(chunk[1].1);
                    }
                }
                remainder
                    .iter()
                    .find(|&&(ch, _)| ch == label)
                    .map(|&(_, id)| id)
            }
        }
    }

    /// The most recently appended transition.
    #[inline]
    pub fn last(&self) -> Option<(char, StateId)> {
        match self {
            Children::None => None,
            Children::One(child) => Some(*child),
            Children::Two((_, _, c2, n2)) => Some((*c2, *n2)),
            Children::Many(children) => children.last().copied(),
        }
    }

    /// Returns the number of transitions.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    /// True if there are no transitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Appends a transition for a label that isn't present yet.
    pub(crate) fn push(&mut self, label: char, target: StateId) {
        debug_assert!(self.find(label).is_none(), "push: label already exists");
        let c = (label, target);
        match self {
            Children::None => *self = Children::One(c),
            Children::One((c1, n1)) => *self = Children::Two((*c1, *n1, c.0, c.1)),
            Children::Two((c1, n1, c2, n2)) => {
                *self = Children::Many(vec![(*c1, *n1), (*c2, *n2), c])
            }
            Children::Many(children) => children.push(c),
        };
    }

    /// Points the transition labeled `label` at `target`, keeping its position.
    ///
    /// Returns the previous target, or `None` if there was no such transition.
    pub(crate) fn replace(&mut self, label: char, target: StateId) -> Option<StateId> {
        let slot = match self {
            Children::None => None,
            Children::One((c, n)) => (*c == label).then_some(n),
            Children::Two((c1, n1, c2, n2)) => {
                if *c1 == label {
                    Some(n1)
                } else if *c2 == label {
                    Some(n2)
                } else {
                    None
                }
            }
            Children::Many(children) => children
                .iter_mut()
                .find(|(c, _)| *c == label)
                .map(|(_, n)| n),
        }?;
        Some(std::mem::replace(slot, target))
    }

    /// Returns an iterator over the transitions in insertion order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_> {
        ChildIter {
            children: self,
            index: 0,
        }
    }
}

/// An iterator over the transitions of a [`Children`] table.
#[derive(Clone)]
pub struct ChildIter<'a> {
    children: &'a Children,
    index: usize,
}

impl Iterator for ChildIter<'_> {
    type Item = (char, StateId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next_child = self.children.get(self.index)?;
        self.index += 1;
        Some(next_child)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}
