//! Word lists and the dictionary oracle
//!
//! Provides the embedded fallback list compiled into the binary, file loading,
//! and the asynchronously resolved dictionary used to judge submissions.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryHandle, WordOracle};
pub use embedded::{FALLBACK, FALLBACK_COUNT};
