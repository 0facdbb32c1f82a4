use super::builder::Word;

/// What [`Builder::insert`](super::builder::Builder::insert) does with a word equal to the
/// previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Leave the graph unchanged and report that nothing was added.
    #[default]
    Ignore,
    /// Fail with [`DawgError::DuplicateWord`](super::error::DawgError::DuplicateWord).
    Reject,
}

/// Options controlling how words are normalized and inserted.
///
/// The finished [`Dawg`](super::automaton::Dawg) keeps its configuration so queries
/// normalize their arguments exactly the way construction did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DawgConfig {
    /// Lowercase every word and every query argument.
    pub fold_case: bool,
    /// Handling of repeated words.
    pub duplicates: DuplicatePolicy,
}

impl Default for DawgConfig {
    fn default() -> Self {
        Self {
            fold_case: true,
            duplicates: DuplicatePolicy::Ignore,
        }
    }
}

impl DawgConfig {
    /// Store and query words exactly as given.
    pub fn case_sensitive() -> Self {
        Self {
            fold_case: false,
            ..Default::default()
        }
    }

    /// Treat repeated words as an error.
    pub fn strict() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
            ..Default::default()
        }
    }

    /// Sets whether words are lowercased.
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    /// Sets the duplicate handling policy.
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub(crate) fn normalize(&self, word: Word) -> Word {
        if self.fold_case {
            word.into_iter().flat_map(char::to_lowercase).collect()
        } else {
            word
        }
    }

    pub(crate) fn normalize_str(&self, word: &str) -> Word {
        if self.fold_case {
            word.chars().flat_map(char::to_lowercase).collect()
        } else {
            word.chars().collect()
        }
    }
}
