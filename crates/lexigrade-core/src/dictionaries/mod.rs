//! Static lexicons loaded once per process.
//!
//! All dictionaries are `LazyLock` statics: initialized on first use,
//! immutable afterwards, safe for concurrent reads. Embedding them keeps
//! the binary self-contained with no word-list files to locate at runtime.

pub mod abbreviations;
pub mod dale_chall;
pub mod en_lemmas;
pub mod en_syllables;
pub mod stop_words;
