//! # wordgraph
//!
//! A compact [DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Directed Acyclic Word Graph) for static dictionaries.
//!
//! A DAWG is a minimal acyclic deterministic automaton. It is a trie whose equivalent
//! subtrees have been merged, so both prefixes and suffixes are shared. The graph is built
//! in a single pass over sorted words with the incremental algorithm of
//! [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1), then frozen.
//!
//! ## Features
//!
//! - **Minimal**: structurally equal states are merged while words are inserted
//! - **Arena-backed**: states live in one vector and refer to each other by index
//! - **Thread-safe**: a built [`Dawg`] is immutable and `Send + Sync`
//! - **Case folding**: words and queries are lowercased by default, see [`DawgConfig`]
//!
//! ## Quick Start
//!
//! ```
//! use wordgraph::Dawg;
//!
//! let dawg = Dawg::from_words(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
//!
//! assert!(dawg.search("cake"));
//! assert!(!dawg.search("ake"));
//! assert!(dawg.prefix_exist("FA"));
//! assert_eq!(dawg.prefix_search("ma"), ["make"]);
//! ```
//!
//! ## Incremental construction
//!
//! [`Builder`] takes words one at a time. They must arrive in sorted order:
//!
//! ```
//! use wordgraph::{Builder, DawgError};
//!
//! let mut builder = Builder::new();
//! builder.insert("apple").unwrap();
//! builder.insert("banana").unwrap();
//! assert!(matches!(builder.insert("apricot"), Err(DawgError::OrderingViolation { .. })));
//!
//! let dawg = builder.build();
//! assert_eq!(dawg.words().collect::<Vec<_>>(), ["apple", "banana"]);
//! ```
//!
//! ## Walking the graph
//!
//! ```
//! use wordgraph::Dawg;
//!
//! let dawg = Dawg::from_words(["tea", "ted", "ten"]).unwrap();
//! let root = dawg.root();
//! let is_word = |w: &str| w.chars().try_fold(root, |n, ch| n.get(ch)).is_some_and(|n| n.is_word());
//! assert!(is_word("ted"));
//! assert!(!is_word("te"));
//! ```

#![warn(missing_docs)]

/// Core DAWG data structure: states, builder and queries.
pub mod dawg;

pub use dawg::builder::{build_dawg, build_dawg_from_file};
pub use dawg::{Builder, Dawg, DawgConfig, DawgError, DuplicatePolicy, LoadError, Node};
