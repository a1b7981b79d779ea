#![no_std] // Shared by the parser and any embedding front end

#[macro_use]
extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod category;
pub mod grammar;
pub mod ids;
pub mod vocabulary;

// Re-export core types for convenience
pub use category::TokenCategory;
pub use grammar::{Symbol, ADJECTIVE_DIVIDER, EOS_MARKER};
pub use ids::{NodeId, SentenceId};
pub use vocabulary::{Overlap, Vocabulary, VocabularyError, WordClass};
