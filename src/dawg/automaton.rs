use std::io::BufRead;
use std::path::Path;

use super::builder::{
    build_dawg_from_file, build_dawg_from_reader, build_dawg_with_config, IntoWord, Word,
};
use super::config::DawgConfig;
use super::error::{DawgError, LoadError};
use super::state::StateId;
use super::state_arena::StateArena;
use super::words::Words;

/// An immutable, minimal word graph.
///
/// Produced by [`Builder::build`](super::builder::Builder::build) or one of the
/// constructors below. It holds no construction state, only the compacted states, so it
/// is `Send + Sync` and every query takes `&self`; any number of threads may read it at
/// once.
///
/// # Examples
///
/// ```
/// use wordgraph::Dawg;
///
/// let dawg = Dawg::from_words(["a", "i", "in", "inn", "tea", "ted", "ten", "to"]).unwrap();
/// assert!(dawg.search("tea"));
/// assert!(!dawg.search("te"));
/// assert!(dawg.prefix_exist("te"));
/// assert_eq!(dawg.prefix_search("te"), ["tea", "ted", "ten"]);
/// assert!(dawg.prefix_search("z").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Dawg {
    arena: StateArena,
    edge_count: usize,
    word_count: usize,
    config: DawgConfig,
}

impl Dawg {
    pub(crate) fn from_parts(
        arena: StateArena,
        edge_count: usize,
        word_count: usize,
        config: DawgConfig,
    ) -> Self {
        Dawg {
            arena,
            edge_count,
            word_count,
            config,
        }
    }

    /// Builds a graph from words in any order and case, with the default configuration.
    pub fn from_words<W: IntoWord>(words: impl IntoIterator<Item = W>) -> Result<Dawg, DawgError> {
        build_dawg_with_config(words, DawgConfig::default())
    }

    /// Builds a graph from words in any order, using `config`.
    pub fn with_config<W: IntoWord>(
        words: impl IntoIterator<Item = W>,
        config: DawgConfig,
    ) -> Result<Dawg, DawgError> {
        build_dawg_with_config(words, config)
    }

    /// Builds a graph from possibly absent words.
    ///
    /// # Errors
    ///
    /// Returns [`DawgError::NullArgument`] if any entry is `None`.
    pub fn try_from_words<W: IntoWord>(
        words: impl IntoIterator<Item = Option<W>>,
    ) -> Result<Dawg, DawgError> {
        let words = words
            .into_iter()
            .map(|word| word.ok_or(DawgError::NullArgument("word")))
            .collect::<Result<Vec<W>, _>>()?;
        Self::from_words(words)
    }

    /// Builds a graph from a reader yielding one word per line.
    pub fn from_reader(reader: impl BufRead) -> Result<Dawg, LoadError> {
        build_dawg_from_reader(reader, DawgConfig::default())
    }

    /// Builds a graph from a reader yielding one word per line, using `config`.
    pub fn from_reader_with_config(
        reader: impl BufRead,
        config: DawgConfig,
    ) -> Result<Dawg, LoadError> {
        build_dawg_from_reader(reader, config)
    }

    /// Builds a graph from a word list file, one word per line.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Dawg, LoadError> {
        build_dawg_from_file(path)
    }

    /// Returns true if `word` was one of the input words.
    pub fn search(&self, word: &str) -> bool {
        self.walk(&self.config.normalize_str(word))
            .is_some_and(|id| self.arena[id].is_terminal())
    }

    /// Same as [`search`](Dawg::search).
    pub fn contains(&self, word: &str) -> bool {
        self.search(word)
    }

    /// Returns true if some input word starts with `prefix`, the word itself included.
    pub fn prefix_exist(&self, prefix: &str) -> bool {
        // Every state but an empty root lies on the path of some word.
        self.walk(&self.config.normalize_str(prefix)).is_some_and(|id| {
            let state = &self.arena[id];
            state.is_terminal() || state.has_transitions()
        })
    }

    /// [`prefix_exist`](Dawg::prefix_exist) for an argument that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`DawgError::NullArgument`] if `prefix` is `None`.
    pub fn try_prefix_exist(&self, prefix: Option<&str>) -> Result<bool, DawgError> {
        let prefix = prefix.ok_or(DawgError::NullArgument("prefix"))?;
        Ok(self.prefix_exist(prefix))
    }

    /// Returns every input word that starts with `prefix`.
    ///
    /// Words come out in depth-first, transition insertion order. Sort the result if a
    /// particular order is required.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix).collect()
    }

    /// [`prefix_search`](Dawg::prefix_search) for an argument that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`DawgError::NullArgument`] if `prefix` is `None`.
    pub fn try_prefix_search(&self, prefix: Option<&str>) -> Result<Vec<String>, DawgError> {
        let prefix = prefix.ok_or(DawgError::NullArgument("prefix"))?;
        Ok(self.prefix_search(prefix))
    }

    /// Lazily enumerates the input words that start with `prefix`.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let prefix = self.config.normalize_str(prefix);
        Words::new(&self.arena, self.walk(&prefix), prefix.iter().collect())
    }

    /// Lazily enumerates every stored word.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.arena, Some(StateId::ROOT), String::new())
    }

    /// The edge count maintained during construction: one per transition created, less one
    /// for every merge. It equals `state_count() - 1`.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of states in the graph, root included.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of transitions in the graph.
    pub fn transition_count(&self) -> usize {
        self.arena.iter().map(|state| state.transition_count()).sum()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// True if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The configuration the graph was built with.
    pub fn config(&self) -> &DawgConfig {
        &self.config
    }

    /// Returns the root node, for walking the graph by hand.
    ///
    /// Labels are matched exactly; no case folding is applied.
    pub fn root(&self) -> Node<'_> {
        Node {
            arena: &self.arena,
            id: StateId::ROOT,
        }
    }

    fn walk(&self, labels: &Word) -> Option<StateId> {
        labels
            .iter()
            .try_fold(StateId::ROOT, |id, &label| self.arena[id].get_child(label))
    }
}

/// A read-only view of one state of a [`Dawg`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    arena: &'a StateArena,
    id: StateId,
}

impl<'a> Node<'a> {
    /// Returns the node that `label`'s edge leads to, or `None` if there is no such edge.
    #[inline]
    pub fn get(self, label: char) -> Option<Node<'a>> {
        self.arena[self.id].get_child(label).map(|id| Node {
            arena: self.arena,
            id,
        })
    }

    /// True if this node corresponds to the end of a word.
    #[inline]
    pub fn is_word(self) -> bool {
        self.arena[self.id].is_terminal()
    }

    /// The identity of the underlying state. Shared states have the same id.
    #[inline]
    pub fn id(self) -> StateId {
        self.id
    }

    /// Returns the number of outgoing edges.
    #[inline]
    pub fn child_count(self) -> usize {
        self.arena[self.id].transition_count()
    }

    /// Returns the outgoing edges in insertion order.
    pub fn children(self) -> impl Iterator<Item = (char, Node<'a>)> + 'a {
        let arena = self.arena;
        arena[self.id]
            .transitions()
            .map(move |(label, id)| (label, Node { arena, id }))
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("word", &self.is_word())
            .field("children", &self.child_count())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Dawg {
        Dawg::from_words(["a", "i", "in", "inn", "tea", "ted", "ten", "to"]).unwrap()
    }

    #[test]
    fn search_finds_exactly_the_input() {
        let dawg = sample();
        for word in ["a", "i", "in", "inn", "tea", "ted", "ten", "to"] {
            assert!(dawg.search(word), "{word}");
        }
        for word in ["", "t", "te", "inns", "b", "tot", "tead"] {
            assert!(!dawg.search(word), "{word}");
        }
    }

    #[test]
    fn queries_fold_case() {
        let dawg = Dawg::from_words(["Tea", "TED"]).unwrap();
        assert!(dawg.search("tea"));
        assert!(dawg.search("TEA"));
        assert!(dawg.prefix_exist("tE"));
        assert_eq!(dawg.prefix_search("TE"), ["tea", "ted"]);
    }

    #[test]
    fn case_sensitive_graph_keeps_case() {
        let dawg = Dawg::with_config(["Tea", "tea"], DawgConfig::case_sensitive()).unwrap();
        assert_eq!(dawg.len(), 2);
        assert!(dawg.search("Tea"));
        assert!(!dawg.search("TEA"));
        assert_eq!(dawg.words().collect::<Vec<_>>(), ["Tea", "tea"]);
    }

    #[test]
    fn prefix_exist_ignores_terminal_flag() {
        let dawg = sample();
        assert!(dawg.prefix_exist(""));
        assert!(dawg.prefix_exist("te"));
        assert!(dawg.prefix_exist("tea"));
        assert!(!dawg.prefix_exist("tea!"));
        assert!(!dawg.prefix_exist("x"));
    }

    #[test]
    fn prefix_search_includes_the_prefix_itself() {
        let dawg = sample();
        assert_eq!(dawg.prefix_search("in"), ["in", "inn"]);
        assert_eq!(dawg.prefix_search("te"), ["tea", "ted", "ten"]);
        assert!(dawg.prefix_search("z").is_empty());
        assert_eq!(dawg.prefix_search("").len(), 8);
    }

    #[test]
    fn absent_arguments_are_errors() {
        let dawg = sample();
        assert_eq!(
            dawg.try_prefix_exist(None),
            Err(DawgError::NullArgument("prefix"))
        );
        assert_eq!(
            dawg.try_prefix_search(None),
            Err(DawgError::NullArgument("prefix"))
        );
        assert_eq!(dawg.try_prefix_exist(Some("t")), Ok(true));
        assert_eq!(
            dawg.try_prefix_search(Some("to")),
            Ok(vec!["to".to_string()])
        );
    }

    #[test]
    fn absent_words_are_rejected() {
        let res = Dawg::try_from_words([Some("a"), None, Some("b")]);
        assert_eq!(res.unwrap_err(), DawgError::NullArgument("word"));

        let dawg = Dawg::try_from_words([Some("b"), Some("a")]).unwrap();
        assert_eq!(dawg.len(), 2);
    }

    #[test]
    fn counts_agree() {
        let dawg = sample();
        assert_eq!(dawg.len(), 8);
        assert_eq!(dawg.edge_count(), dawg.state_count() - 1);
        // An unminimized trie over these words has 10 transitions. Only leaves are shared
        // here, so the graph keeps all of them but needs far fewer states.
        assert_eq!(dawg.transition_count(), 10);
        assert_eq!(dawg.state_count(), 6);
        assert_eq!(dawg.edge_count(), 5);
    }

    #[test]
    fn empty_input() {
        let dawg = Dawg::from_words(Vec::<String>::new()).unwrap();
        assert!(dawg.is_empty());
        assert_eq!(dawg.root().child_count(), 0);
        assert!(!dawg.search(""));
        assert!(!dawg.search("anything"));
        assert!(dawg.prefix_search("").is_empty());
        assert!(!dawg.prefix_exist(""));
        assert_eq!(dawg.edge_count(), 0);
        assert_eq!(dawg.state_count(), 1);
    }

    #[test]
    fn nodes_walk_the_graph() {
        let dawg = Dawg::from_words(["TEST", "TESTER", "WTEST"]).unwrap();
        let root = dawg.root();

        let n = root.get('t').unwrap();
        assert!(!n.is_word());
        let n = n.get('e').unwrap();
        assert!(!n.is_word());
        let n = n.get('s').unwrap();
        assert!(!n.is_word());
        let n = n.get('t').unwrap();
        assert!(n.is_word());
        let n = n.get('e').unwrap();
        assert!(!n.is_word());
        let n = n.get('r').unwrap();
        assert!(n.is_word());
        assert_eq!(n.get('t'), None);

        let labels: Vec<char> = root.children().map(|(ch, _)| ch).collect();
        assert_eq!(labels, ['t', 'w']);
    }
}
