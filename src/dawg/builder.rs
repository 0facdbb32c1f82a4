use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use itertools::{Itertools, Position};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::automaton::Dawg;
use super::config::{DawgConfig, DuplicatePolicy};
use super::error::{DawgError, LoadError};
use super::state::{Signature, State, StateId};
use super::state_arena::StateArena;

/// A word as a buffer of labels. Most words fit inline.
pub(crate) type Word = SmallVec<[char; 32]>;

/// Trait for types that can be used as a word when building a word graph.
///
/// Implemented for common string and character sequence types so that
/// [`Builder::insert`] and [`build_dawg`] accept them directly.
pub trait IntoWord {
    /// Collects this word into a label buffer.
    fn collect_word(self) -> SmallVec<[char; 32]>;
}

impl IntoWord for &str {
    fn collect_word(self) -> Word {
        self.chars().collect()
    }
}

impl IntoWord for &&str {
    fn collect_word(self) -> Word {
        self.chars().collect()
    }
}

impl IntoWord for String {
    fn collect_word(self) -> Word {
        self.chars().collect()
    }
}

impl IntoWord for &String {
    fn collect_word(self) -> Word {
        self.chars().collect()
    }
}

impl IntoWord for &[char] {
    fn collect_word(self) -> Word {
        self.iter().copied().collect()
    }
}

impl IntoWord for Vec<char> {
    fn collect_word(self) -> Word {
        self.into_iter().collect()
    }
}

impl IntoWord for SmallVec<[char; 32]> {
    fn collect_word(self) -> Word {
        self
    }
}

/// Incremental constructor of a minimal word graph.
///
/// Words must arrive in non-decreasing order after normalization. After each insertion,
/// the branch left open by the previous word is closed: each of its states is either
/// replaced by an equivalent state already in the registry or registered as the canonical
/// state for its signature. Only the most recently added path is ever open, so a single
/// pass over sorted input yields a minimal graph.
///
/// [`build`](Builder::build) consumes the builder, drops the registry and returns an
/// immutable [`Dawg`]; nothing can be inserted afterwards.
pub struct Builder {
    arena: StateArena,
    registry: HashMap<Signature, StateId>,
    previous_word: Word,
    edge_count: usize,
    word_count: usize,
    config: DawgConfig,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DawgConfig::default())
    }

    /// Creates a builder with the given configuration.
    pub fn with_config(config: DawgConfig) -> Self {
        let mut arena = StateArena::new();
        let root = arena.alloc(State::new(false));
        debug_assert_eq!(root, StateId::ROOT);
        Builder {
            arena,
            registry: HashMap::new(),
            previous_word: Word::new(),
            edge_count: 0,
            word_count: 0,
            config,
        }
    }

    /// Adds a word to the graph being constructed.
    ///
    /// The word is normalized according to the builder's [`DawgConfig`] before it is
    /// compared with the previous one.
    ///
    /// Returns `Ok(true)` if the word was added and `Ok(false)` if it repeats the previous
    /// word under [`DuplicatePolicy::Ignore`].
    ///
    /// # Errors
    ///
    /// Returns [`DawgError::OrderingViolation`] if the word sorts before the previously
    /// inserted word, and [`DawgError::DuplicateWord`] for a repeat under
    /// [`DuplicatePolicy::Reject`].
    pub fn insert(&mut self, word: impl IntoWord) -> Result<bool, DawgError> {
        let word = self.config.normalize(word.collect_word());
        self.insert_normalized(word)
    }

    /// Live edge count so far: one per transition created, less one per merge.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of distinct words inserted so far.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// True if no word has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    pub(crate) fn insert_normalized(&mut self, word: Word) -> Result<bool, DawgError> {
        match word.as_slice().cmp(self.previous_word.as_slice()) {
            Ordering::Less => {
                return Err(DawgError::OrderingViolation {
                    previous: self.previous_word.iter().collect(),
                    word: word.iter().collect(),
                })
            }
            Ordering::Equal if self.word_count > 0 => {
                return match self.config.duplicates {
                    DuplicatePolicy::Ignore => Ok(false),
                    DuplicatePolicy::Reject => {
                        Err(DawgError::DuplicateWord(word.iter().collect()))
                    }
                }
            }
            _ => {}
        }

        let prefix_len = self
            .previous_word
            .iter()
            .zip(word.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let last_state = self.follow_open_path(&word[..prefix_len]);
        if self.arena[last_state].has_transitions() {
            self.replace_or_register(last_state);
        }
        self.add_suffix(last_state, &word[prefix_len..]);

        self.previous_word = word;
        self.word_count += 1;
        Ok(true)
    }

    /// Follows `prefix` from the root. The previous word traced this exact path, so it
    /// always exists.
    fn follow_open_path(&self, prefix: &[char]) -> StateId {
        prefix
            .iter()
            .try_fold(StateId::ROOT, |id, &label| self.arena[id].get_child(label))
            .expect("common prefix is a path of the previous word")
    }

    fn add_suffix(&mut self, mut last_state: StateId, suffix: &[char]) {
        if suffix.is_empty() {
            self.arena[last_state].set_terminal(true);
            return;
        }
        for (position, &label) in suffix.iter().with_position() {
            let terminal = matches!(position, Position::Last | Position::Only);
            let next = self.arena.alloc(State::new(terminal));
            self.arena[last_state].put_child(label, next);
            self.edge_count += 1;
            last_state = next;
        }
    }

    /// Closes the open branch hanging off `state`'s most recently added transition.
    ///
    /// The branch is a single chain of last edges down to a leaf. It is closed bottom-up
    /// so that every child is canonical before its parent's signature is taken.
    fn replace_or_register(&mut self, state: StateId) {
        let mut chain: SmallVec<[(StateId, char, StateId); 32]> = SmallVec::new();
        let mut parent = state;
        while let Some((label, child)) = self.arena[parent].last_child() {
            chain.push((parent, label, child));
            parent = child;
        }

        for (parent, label, child) in chain.into_iter().rev() {
            let signature = self.arena[child].signature();
            match self.registry.get(&signature) {
                Some(&canonical) => {
                    trace!(?child, ?canonical, %label, "merging equivalent state");
                    self.arena[parent].put_child(label, canonical);
                    self.arena.free(child);
                    self.edge_count -= 1;
                }
                None => {
                    trace!(?child, %label, "registering state");
                    self.registry.insert(signature, child);
                }
            }
        }
    }

    /// Finalizes construction and returns the immutable graph.
    ///
    /// Closes the last open branch, drops the registry and compacts the state arena down
    /// to the reachable states.
    pub fn build(mut self) -> Dawg {
        if self.arena[StateId::ROOT].has_transitions() {
            self.replace_or_register(StateId::ROOT);
        }
        let Builder {
            arena,
            registry,
            edge_count,
            word_count,
            config,
            ..
        } = self;
        let registered = registry.len();
        drop(registry);

        let arena = arena.compact(StateId::ROOT);
        debug!(
            words = word_count,
            states = arena.len(),
            edges = edge_count,
            registered,
            "built word graph"
        );
        Dawg::from_parts(arena, edge_count, word_count, config)
    }
}

/// Builds a word graph from words in any order and case.
///
/// The words are normalized with the default [`DawgConfig`], sorted and inserted one by one.
///
/// # Examples
///
/// ```
/// use wordgraph::dawg::builder::build_dawg;
///
/// let dawg = build_dawg(["CHERRY", "apple", "Banana"]).unwrap();
/// assert!(dawg.search("banana"));
/// assert!(!dawg.search("apricot"));
/// ```
pub fn build_dawg<W: IntoWord>(words: impl IntoIterator<Item = W>) -> Result<Dawg, DawgError> {
    build_dawg_with_config(words, DawgConfig::default())
}

/// Builds a word graph from words in any order, using `config`.
pub fn build_dawg_with_config<W: IntoWord>(
    words: impl IntoIterator<Item = W>,
    config: DawgConfig,
) -> Result<Dawg, DawgError> {
    let mut words: Vec<Word> = words
        .into_iter()
        .map(|word| config.normalize(word.collect_word()))
        .collect();
    words.sort_unstable();

    let mut builder = Builder::with_config(config);
    for word in words {
        builder.insert_normalized(word)?;
    }
    Ok(builder.build())
}

/// Builds a word graph from a reader yielding one word per line.
///
/// Trailing whitespace is trimmed. Empty lines and lines starting with `#` are skipped.
/// The words need not be sorted.
pub fn build_dawg_from_reader(
    mut reader: impl BufRead,
    config: DawgConfig,
) -> Result<Dawg, LoadError> {
    let mut words = Vec::new();

    // Reuse one line buffer instead of allocating a string per line.
    let mut buf = String::with_capacity(80);
    while reader.read_line(&mut buf)? != 0 {
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            words.push(word.collect_word());
        }
        buf.clear();
    }
    debug!(words = words.len(), "read word list");
    Ok(build_dawg_with_config(words, config)?)
}

/// Builds a word graph from a dictionary file with one word per line.
///
/// Lines starting with '#' are treated as comments and ignored. Empty lines are skipped.
///
/// # Examples
///
/// ```no_run
/// use wordgraph::dawg::builder::build_dawg_from_file;
///
/// let dawg = build_dawg_from_file("dictionary.txt").unwrap();
/// ```
pub fn build_dawg_from_file(path: impl AsRef<Path>) -> Result<Dawg, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading word list");
    let file = File::open(path)?;
    build_dawg_from_reader(BufReader::new(file), DawgConfig::default())
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
