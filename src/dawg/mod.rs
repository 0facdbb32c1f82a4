/// Immutable word graph and its query operations.
pub mod automaton;
/// Incremental construction from sorted words.
pub mod builder;
/// Compact insertion-ordered transition tables.
pub mod children;
/// Construction options.
pub mod config;
/// Error types.
pub mod error;
/// States, their identities and signatures.
pub mod state;
/// Index-addressed state storage.
pub(crate) mod state_arena;
/// Depth-first word enumeration.
pub mod words;

pub use automaton::{Dawg, Node};
pub use builder::{Builder, IntoWord};
pub use config::{DawgConfig, DuplicatePolicy};
pub use error::{DawgError, LoadError};
pub use state::{Signature, State, StateId};
pub use words::Words;
